use crate::client::{ClientBuilder, ClientConfig};
use crate::endpoint::Endpoint;
use crate::webc::{self, WebClient, WebRequest, WebResponse};
use crate::{Error, Result};
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// The public entry point: encode, dispatch, decode.
///
/// Cloning is cheap (`Arc` inner) and concurrent dispatches are independent;
/// the only shared resource is reqwest's connection pool underneath.
#[derive(Debug, Clone, Default)]
pub struct Client {
	inner: Arc<ClientInner>,
}

#[derive(Debug, Default)]
struct ClientInner {
	config: ClientConfig,
	web_client: WebClient,
}

/// Constructors
impl Client {
	#[must_use]
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	pub(crate) fn from_config(config: ClientConfig) -> Self {
		Self {
			inner: Arc::new(ClientInner {
				config,
				web_client: WebClient::default(),
			}),
		}
	}
}

/// Getters
impl Client {
	#[must_use]
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}
}

/// Execution
impl Client {
	/// Materializes the transport-ready request for an endpoint without
	/// dispatching it. Pure; mostly useful for inspection and tests.
	pub fn to_web_request<R>(&self, endpoint: &Endpoint<R>) -> Result<WebRequest> {
		webc::to_web_request(endpoint, &self.inner.config)
	}

	/// Dispatches the endpoint and decodes the success body into `R`.
	///
	/// Exactly one terminal outcome per call: the decoded value, or one of
	/// the structured [`Error`] cases. No retries, no caching.
	pub async fn execute<R: DeserializeOwned>(&self, endpoint: &Endpoint<R>) -> Result<R> {
		let web_res = self.dispatch(endpoint).await?;
		serde_json::from_slice(&web_res.body).map_err(|err| Error::ResponseDecode {
			status: web_res.status,
			cause: err.to_string(),
		})
	}

	/// Dispatches the endpoint and passes the success body through as raw
	/// bytes (static map imagery and the like). No structural decoding.
	pub async fn execute_bytes(&self, endpoint: &Endpoint<Bytes>) -> Result<Bytes> {
		let web_res = self.dispatch(endpoint).await?;
		Ok(web_res.body)
	}

	async fn dispatch<R>(&self, endpoint: &Endpoint<R>) -> Result<WebResponse> {
		let web_req = self.to_web_request(endpoint)?;
		match self.inner.web_client.do_request(web_req).await {
			Ok(res) => Ok(res),
			// Lift the structured server failure out of the web layer.
			Err(webc::Error::FailedStatus { status, api_error, body }) => Err(Error::Server {
				status,
				error: api_error,
				body,
			}),
			Err(err) => Err(err.into()),
		}
	}
}
