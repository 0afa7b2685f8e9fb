use crate::client::ClientConfig;
use crate::endpoint::{ContentType, Endpoint, HttpMethod};
use crate::webc::MultipartForm;
use crate::{Error, Result};
use bytes::Bytes;
use serde_json::Value;
use url::Url;
use url::form_urlencoded;

// region:    --- WebRequest

/// A transport-ready request, fully materialized from an `Endpoint`.
/// Producing one performs no I/O; the same endpoint encodes to the same bytes
/// every time, modulo the multipart boundary token.
#[derive(Debug, Clone)]
pub struct WebRequest {
	pub method: HttpMethod,
	pub url: Url,
	pub headers: Vec<(String, String)>,
	pub body: Option<Bytes>,
}

// endregion: --- WebRequest

// region:    --- Encoder

pub(crate) fn to_web_request<R>(endpoint: &Endpoint<R>, config: &ClientConfig) -> Result<WebRequest> {
	// -- URL: base origin + path, then query pairs (always, whatever the content type)
	let base = config.base_url(endpoint.base());
	let mut url = Url::parse(base.as_str())
		.and_then(|url| url.join(endpoint.path()))
		.map_err(|err| Error::InvalidUrl {
			url: format!("{}{}", base.as_str(), endpoint.path()),
			cause: err.to_string(),
		})?;

	if let Some(query) = endpoint.query_params() {
		let pairs = param_pairs(query, endpoint)?;
		let mut serializer = url.query_pairs_mut();
		for (key, value) in pairs {
			serializer.append_pair(&key, &value);
		}
	}

	let mut headers: Vec<(String, String)> = config.default_headers().to_vec();

	// -- Body, per content type
	let body = match endpoint.content_type() {
		ContentType::None | ContentType::UrlEncoded if !endpoint.binary_parts().is_empty() => {
			return Err(Error::BinaryPartsRequireMultipart {
				path: endpoint.path().to_string(),
				content_type: endpoint.content_type(),
			});
		}
		ContentType::None => None,
		ContentType::UrlEncoded => {
			let mut serializer = form_urlencoded::Serializer::new(String::new());
			if let Some(params) = endpoint.body_params() {
				for (key, value) in param_pairs(params, endpoint)? {
					serializer.append_pair(&key, &value);
				}
			}
			let form = serializer.finish();
			headers.push(("Content-Type".to_string(), "application/x-www-form-urlencoded".to_string()));
			Some(Bytes::from(form))
		}
		ContentType::Multipart => {
			let mut form = MultipartForm::new();
			if let Some(params) = endpoint.body_params() {
				for (key, value) in param_pairs(params, endpoint)? {
					form.add_field(&key, &value);
				}
			}
			for part in endpoint.binary_parts() {
				form.add_binary_part(part);
			}
			headers.push(("Content-Type".to_string(), form.content_type()));
			Some(form.finish())
		}
	};

	Ok(WebRequest {
		method: endpoint.method(),
		url,
		headers,
		body,
	})
}

/// Flattens a params object into string pairs.
/// `null` entries are skipped; nested arrays/objects cannot be represented in
/// either the query string or a form encoding and fail.
fn param_pairs<R>(params: &Value, endpoint: &Endpoint<R>) -> Result<Vec<(String, String)>> {
	let Some(object) = params.as_object() else {
		return Err(Error::ParamsNotAnObject {
			path: endpoint.path().to_string(),
		});
	};

	let mut pairs = Vec::with_capacity(object.len());
	for (key, value) in object {
		let value = match value {
			Value::Null => continue,
			Value::String(s) => s.clone(),
			Value::Bool(b) => b.to_string(),
			Value::Number(n) => n.to_string(),
			Value::Array(_) | Value::Object(_) => {
				return Err(Error::UnsupportedParamValue {
					key: key.clone(),
					content_type: endpoint.content_type(),
				});
			}
		};
		pairs.push((key.clone(), value));
	}

	Ok(pairs)
}

// endregion: --- Encoder
