//! The client module exposes the public entry point: a cheaply clonable
//! `Client` that encodes endpoints, dispatches them, and decodes the result.

// region:    --- Modules

mod builder;
mod client_impl;
mod config;

// -- Flatten
pub use builder::*;
pub use client_impl::*;
pub use config::*;

// endregion: --- Modules
