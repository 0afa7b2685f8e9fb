use derive_more::From;
use serde::{Deserialize, Serialize};

pub type Result<T> = core::result::Result<T, Error>;

/// The structured error payload the Mingle backend returns on non-success
/// statuses. Kept permissive: `code` is optional and unknown fields are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
	pub message: String,
	#[serde(default)]
	pub code: Option<String>,
}

#[derive(Debug, From)]
pub enum Error {
	/// Non-success HTTP status. `api_error` is the decoded structured payload
	/// when the body parsed as one; `body` keeps the raw text either way.
	FailedStatus {
		status: u16,
		api_error: Option<ApiError>,
		body: String,
	},

	// -- Externals
	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
