use crate::endpoint::ContentType;
use crate::webc;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, From)]
pub enum Error {
	// -- Endpoint construction
	/// Binary parts were attached but the endpoint's content type is not multipart.
	BinaryPartsRequireMultipart {
		path: String,
		content_type: ContentType,
	},
	/// Query or body params did not serialize to a JSON object.
	ParamsNotAnObject {
		path: String,
	},

	// -- Encoding
	/// A param value is a nested structure the chosen encoding cannot represent.
	UnsupportedParamValue {
		key: String,
		content_type: ContentType,
	},
	InvalidUrl {
		url: String,
		cause: String,
	},

	// -- Dispatch
	/// Non-success HTTP status. `error` holds the structured server payload when it decoded.
	Server {
		status: u16,
		error: Option<webc::ApiError>,
		body: String,
	},
	/// Success status, but the body did not match the endpoint's response type.
	ResponseDecode {
		status: u16,
		cause: String,
	},

	// -- Modules
	#[from]
	Webc(webc::Error),
}

/// Getters
impl Error {
	/// The HTTP status code, when this error carries one.
	#[must_use]
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Server { status, .. } | Self::ResponseDecode { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// The decoded server error payload, when present.
	#[must_use]
	pub fn api_error(&self) -> Option<&webc::ApiError> {
		match self {
			Self::Server { error, .. } => error.as_ref(),
			_ => None,
		}
	}
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
