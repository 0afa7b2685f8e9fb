use crate::endpoint::{BinaryPart, ContentType, Endpoint, HttpMethod, ServiceBase};
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// Builder for [`Endpoint`].
///
/// Carries its working state as a `Result` so the chaining methods stay
/// infallible (the reqwest `RequestBuilder` scheme); every construction
/// failure surfaces at [`EndpointBuilder::build`].
pub struct EndpointBuilder {
	inner: Result<Inner>,
}

struct Inner {
	base: ServiceBase,
	path: String,
	method: HttpMethod,
	query_params: Option<Value>,
	body_params: Option<Value>,
	binary_parts: Vec<BinaryPart>,
	content_type: ContentType,
}

impl EndpointBuilder {
	pub fn new(base: ServiceBase, path: impl Into<String>, method: HttpMethod) -> Self {
		Self {
			inner: Ok(Inner {
				base,
				path: path.into(),
				method,
				query_params: None,
				body_params: None,
				binary_parts: Vec::new(),
				content_type: ContentType::None,
			}),
		}
	}

	/// Sets the query params from any `Serialize` value that maps to a flat JSON object.
	#[must_use]
	pub fn query_params(self, params: &impl Serialize) -> Self {
		self.map(|mut inner| {
			inner.query_params = Some(to_params_object(params, &inner.path)?);
			Ok(inner)
		})
	}

	/// Sets the body params from any `Serialize` value that maps to a flat JSON object.
	#[must_use]
	pub fn body_params(self, params: &impl Serialize) -> Self {
		self.map(|mut inner| {
			inner.body_params = Some(to_params_object(params, &inner.path)?);
			Ok(inner)
		})
	}

	#[must_use]
	pub fn binary_part(self, part: BinaryPart) -> Self {
		self.map(|mut inner| {
			inner.binary_parts.push(part);
			Ok(inner)
		})
	}

	#[must_use]
	pub fn binary_parts(self, parts: impl IntoIterator<Item = BinaryPart>) -> Self {
		self.map(|mut inner| {
			inner.binary_parts.extend(parts);
			Ok(inner)
		})
	}

	#[must_use]
	pub fn content_type(self, content_type: ContentType) -> Self {
		self.map(|mut inner| {
			inner.content_type = content_type;
			Ok(inner)
		})
	}

	/// Finalizes the descriptor, enforcing the construction contract:
	/// binary parts are only legal under `ContentType::Multipart`.
	pub fn build<R>(self) -> Result<Endpoint<R>> {
		let inner = self.inner?;

		if !inner.binary_parts.is_empty() && inner.content_type != ContentType::Multipart {
			return Err(Error::BinaryPartsRequireMultipart {
				path: inner.path,
				content_type: inner.content_type,
			});
		}

		Ok(Endpoint {
			base: inner.base,
			path: inner.path,
			method: inner.method,
			query_params: inner.query_params,
			body_params: inner.body_params,
			binary_parts: inner.binary_parts,
			content_type: inner.content_type,
			marker: PhantomData,
		})
	}

	fn map(self, f: impl FnOnce(Inner) -> Result<Inner>) -> Self {
		Self {
			inner: self.inner.and_then(f),
		}
	}
}

/// Serializes a params struct to a JSON object.
/// Anything else (scalar, array, serialization failure) is a construction error.
fn to_params_object(params: &impl Serialize, path: &str) -> Result<Value> {
	let value = serde_json::to_value(params).map_err(|_| Error::ParamsNotAnObject { path: path.to_string() })?;
	if value.is_object() {
		Ok(value)
	} else {
		Err(Error::ParamsNotAnObject { path: path.to_string() })
	}
}
