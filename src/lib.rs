//! `mingle` is the typed REST layer for the Mingle hangout service.
//!
//! It is organized around three small pieces:
//! - [`endpoint::Endpoint`] — an immutable description of one API call
//!   (service base, path, method, params, binary parts, content type, and
//!   the response type it decodes into).
//! - `webc` — the private web layer that materializes an `Endpoint` into a
//!   concrete request and performs the exchange over `reqwest`.
//! - [`api`] — the catalog of per-operation factory functions (user, place,
//!   hangout), each returning a fully populated `Endpoint`.
//!
//! The UI layers above (view models, session handling) are not part of this
//! crate; they hand typed request values in and get a typed result or a
//! structured [`Error`] back, exactly once per dispatch.

// region:    --- Modules

mod error;

pub use error::{Error, Result};

pub mod api;
pub mod client;
pub mod endpoint;

mod webc;

// -- Flatten
pub use client::{Client, ClientBuilder, ClientConfig};
pub use webc::{ApiError, WebRequest};

// endregion: --- Modules
