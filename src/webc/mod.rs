//! The web support module. Private to the crate: it turns an `Endpoint` into
//! a transport-ready `WebRequest` (encoder) and performs the exchange over
//! `reqwest` (dispatcher). The `Client` is the only caller.

// region:    --- Modules

mod encoder;
mod error;
mod multipart;
mod web_client;

// -- Flatten
pub use encoder::*;
pub use error::*;
pub(crate) use multipart::*;
pub(crate) use web_client::*;

// endregion: --- Modules
