//! The endpoint module contains the `Endpoint<R>` descriptor and the small
//! value types it is built from. An `Endpoint` is plain data: constructing one
//! performs no I/O, and dispatching it never mutates it, so the same value can
//! be cloned and reused across dispatches.

// region:    --- Modules

mod binary_part;
mod builder;
mod content_type;
mod endpoint_type;
mod http_method;
mod path;
mod service_base;

// -- Flatten
pub use binary_part::*;
pub use builder::*;
pub use content_type::*;
pub use endpoint_type::*;
pub use http_method::*;
pub use path::*;
pub use service_base::*;

// endregion: --- Modules
