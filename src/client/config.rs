use crate::endpoint::{BaseUrl, ServiceBase};

const API_BASE_URL: &str = "https://api.mingle.social/";
const MAPS_BASE_URL: &str = "https://maps.googleapis.com/";

/// Client-level configuration: one concrete origin per [`ServiceBase`], plus
/// headers applied to every request (e.g. an auth header installed by the
/// session layer above this crate).
#[derive(Debug, Clone)]
pub struct ClientConfig {
	api_base: BaseUrl,
	maps_base: BaseUrl,
	default_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			api_base: BaseUrl::from_static(API_BASE_URL),
			maps_base: BaseUrl::from_static(MAPS_BASE_URL),
			default_headers: Vec::new(),
		}
	}
}

/// Setters (builder style)
impl ClientConfig {
	#[must_use]
	pub fn with_api_base_url(mut self, url: impl Into<std::sync::Arc<str>>) -> Self {
		self.api_base = BaseUrl::from_owned(url);
		self
	}

	#[must_use]
	pub fn with_maps_base_url(mut self, url: impl Into<std::sync::Arc<str>>) -> Self {
		self.maps_base = BaseUrl::from_owned(url);
		self
	}

	#[must_use]
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));
		self
	}
}

/// Getters
impl ClientConfig {
	#[must_use]
	pub fn base_url(&self, base: ServiceBase) -> &BaseUrl {
		match base {
			ServiceBase::Api => &self.api_base,
			ServiceBase::Maps => &self.maps_base,
		}
	}

	#[must_use]
	pub fn default_headers(&self) -> &[(String, String)] {
		&self.default_headers
	}
}
