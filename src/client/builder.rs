use crate::client::{Client, ClientConfig};

#[derive(Debug, Default)]
pub struct ClientBuilder {
	config: ClientConfig,
}

impl ClientBuilder {
	#[must_use]
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = config;
		self
	}

	#[must_use]
	pub fn with_api_base_url(mut self, url: impl Into<std::sync::Arc<str>>) -> Self {
		self.config = self.config.with_api_base_url(url);
		self
	}

	#[must_use]
	pub fn with_maps_base_url(mut self, url: impl Into<std::sync::Arc<str>>) -> Self {
		self.config = self.config.with_maps_base_url(url);
		self
	}

	#[must_use]
	pub fn with_default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.config = self.config.with_default_header(name, value);
		self
	}

	#[must_use]
	pub fn build(self) -> Client {
		Client::from_config(self.config)
	}
}
