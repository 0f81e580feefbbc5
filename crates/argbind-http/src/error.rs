//! Errors surfaced to the host framework

use hyper::StatusCode;
use thiserror::Error;

/// Result alias used by handlers
pub type Result<T> = std::result::Result<T, Error>;

/// Failure returned by a handler, mapped to an HTTP status by the host.
#[derive(Debug, Error)]
pub enum Error {
	/// The client sent a request that could not be bound or understood (400)
	#[error("{0}")]
	BadRequest(String),

	/// The requested resource does not exist (404)
	#[error("Not found: {0}")]
	NotFound(String),

	/// A fault on the server side (500)
	#[error("Internal server error: {0}")]
	Internal(String),

	/// A response body could not be serialized (500)
	#[error("Serialization error: {0}")]
	Serialization(String),

	/// Request construction failed, e.g. an unparsable URI
	#[error("Invalid request: {0}")]
	InvalidRequest(String),
}

impl Error {
	/// HTTP status code for this error
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::Error;
	///
	/// let error = Error::BadRequest("Bad or missing value for test".to_string());
	/// assert_eq!(error.status_code(), 400);
	/// assert_eq!(error.to_string(), "Bad or missing value for test");
	/// ```
	pub fn status_code(&self) -> u16 {
		self.status().as_u16()
	}

	/// Typed variant of [`Error::status_code`]
	pub fn status(&self) -> StatusCode {
		match self {
			Error::BadRequest(_) | Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
			Error::NotFound(_) => StatusCode::NOT_FOUND,
			Error::Internal(_) | Error::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Returns true for errors the client is responsible for
	pub fn is_client_error(&self) -> bool {
		self.status().is_client_error()
	}

	/// Render as a response with a `{"error": message}` JSON body
	pub fn into_response(self) -> crate::Response {
		crate::Response::from(self)
	}
}

impl From<serde_json::Error> for Error {
	fn from(error: serde_json::Error) -> Self {
		Error::Serialization(error.to_string())
	}
}
