//! The endpoint catalog: one factory function per API operation, grouped by
//! domain. Every factory is pure (no I/O); it serializes its typed request
//! value and returns a fully populated `Endpoint` for the `Client` to execute.

// region:    --- Modules

mod common;

pub mod hangout;
pub mod place;
pub mod user;

// -- Flatten
pub use common::*;

// endregion: --- Modules
