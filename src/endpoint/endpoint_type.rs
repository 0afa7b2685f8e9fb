use crate::endpoint::{BinaryPart, ContentType, EndpointBuilder, HttpMethod, ServiceBase};
use serde_json::Value;
use std::marker::PhantomData;

/// An immutable, typed description of one API call.
///
/// `R` is the response type the dispatcher decodes into; it is fixed when the
/// endpoint is constructed and never inferred at runtime. The phantom is over
/// `fn() -> R` so an `Endpoint` stays `Send + Sync + Clone` whatever `R` is.
pub struct Endpoint<R> {
	pub(crate) base: ServiceBase,
	pub(crate) path: String,
	pub(crate) method: HttpMethod,
	pub(crate) query_params: Option<Value>,
	pub(crate) body_params: Option<Value>,
	pub(crate) binary_parts: Vec<BinaryPart>,
	pub(crate) content_type: ContentType,
	pub(crate) marker: PhantomData<fn() -> R>,
}

/// Constructors
impl<R> Endpoint<R> {
	/// Starts a builder for the given base, path, and method.
	/// Defaults: no params, no binary parts, `ContentType::None`.
	pub fn builder(base: ServiceBase, path: impl Into<String>, method: HttpMethod) -> EndpointBuilder {
		EndpointBuilder::new(base, path, method)
	}
}

/// Getters
impl<R> Endpoint<R> {
	#[must_use]
	pub fn base(&self) -> ServiceBase {
		self.base
	}

	#[must_use]
	pub fn path(&self) -> &str {
		&self.path
	}

	#[must_use]
	pub fn method(&self) -> HttpMethod {
		self.method
	}

	#[must_use]
	pub fn query_params(&self) -> Option<&Value> {
		self.query_params.as_ref()
	}

	#[must_use]
	pub fn body_params(&self) -> Option<&Value> {
		self.body_params.as_ref()
	}

	#[must_use]
	pub fn binary_parts(&self) -> &[BinaryPart] {
		&self.binary_parts
	}

	#[must_use]
	pub fn content_type(&self) -> ContentType {
		self.content_type
	}
}

// Manual impls so `R` does not need to be `Clone`/`Debug`.
impl<R> Clone for Endpoint<R> {
	fn clone(&self) -> Self {
		Self {
			base: self.base,
			path: self.path.clone(),
			method: self.method,
			query_params: self.query_params.clone(),
			body_params: self.body_params.clone(),
			binary_parts: self.binary_parts.clone(),
			content_type: self.content_type,
			marker: PhantomData,
		}
	}
}

impl<R> std::fmt::Debug for Endpoint<R> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Endpoint")
			.field("base", &self.base)
			.field("path", &self.path)
			.field("method", &self.method)
			.field("query_params", &self.query_params)
			.field("body_params", &self.body_params)
			.field("binary_parts", &self.binary_parts.len())
			.field("content_type", &self.content_type)
			.finish()
	}
}
