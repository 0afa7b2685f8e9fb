use crate::webc::{ApiError, Error, Result, WebRequest};
use bytes::Bytes;
use tracing::{debug, trace};

/// The dispatcher. A thin wrapper over a shared `reqwest::Client`; each
/// `do_request` is one independent exchange with no cross-call state.
/// Cancellation is dropping the returned future.
#[derive(Debug, Clone, Default)]
pub(crate) struct WebClient {
	reqwest_client: reqwest::Client,
}

/// The raw outcome of a successful exchange. Decoding into the endpoint's
/// response type happens above, in the `Client`.
#[derive(Debug)]
pub(crate) struct WebResponse {
	pub status: u16,
	pub body: Bytes,
}

impl WebClient {
	pub async fn do_request(&self, web_req: WebRequest) -> Result<WebResponse> {
		debug!("-> {} {}", web_req.method.as_str(), web_req.url);

		let mut builder = self.reqwest_client.request(web_req.method.into(), web_req.url);
		for (name, value) in web_req.headers {
			builder = builder.header(name, value);
		}
		if let Some(body) = web_req.body {
			builder = builder.body(body);
		}

		let response = builder.send().await?;
		let status = response.status();
		let body = response.bytes().await?;

		trace!("<- status {status} ({} bytes)", body.len());

		if !status.is_success() {
			// Structured server payload first, raw text as the fallback.
			let api_error = serde_json::from_slice::<ApiError>(&body).ok();
			return Err(Error::FailedStatus {
				status: status.as_u16(),
				api_error,
				body: String::from_utf8_lossy(&body).into_owned(),
			});
		}

		Ok(WebResponse {
			status: status.as_u16(),
			body,
		})
	}
}
