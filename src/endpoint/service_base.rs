use std::sync::Arc;

/// Selects which configured service origin an endpoint targets.
///
/// The application backend and the mapping service are distinct origins; each
/// endpoint names its base explicitly and the `ClientConfig` resolves it to a
/// concrete URL at encode time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceBase {
	/// The Mingle application backend.
	Api,
	/// The Google Maps web services (place search, static map imagery).
	Maps,
}

/// A concrete service origin URL.
/// It is designed to be efficiently clonable.
#[derive(Debug, Clone)]
pub struct BaseUrl {
	inner: Arc<str>,
}

/// Constructors
impl BaseUrl {
	#[must_use]
	pub fn from_static(url: &'static str) -> Self {
		Self { inner: Arc::from(url) }
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Self { inner: url.into() }
	}
}

/// Getters
impl BaseUrl {
	#[must_use]
	pub fn as_str(&self) -> &str {
		&self.inner
	}
}
