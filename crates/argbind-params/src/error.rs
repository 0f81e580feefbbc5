//! Binding failures
//!
//! Every variant of [`ParamError`] raised while binding collapses into a
//! single client-facing outcome: `400 Bad Request` with the message
//! `Bad or missing value for <name>`. [`BindError`] carries the context that
//! is logged alongside.

use serde_json::Value;
use std::fmt;
use thiserror::Error;

use crate::types::ParamType;

/// Result alias for parameter operations
pub type ParamResult<T> = std::result::Result<T, ParamError>;

/// Subject used in messages when a failure is not tied to one parameter
pub const BODY_SUBJECT: &str = "request body";

/// A raw value that could not be converted to its declared type
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConversionError {
	#[error("Can't parse {0} as boolean")]
	InvalidBool(String),

	#[error("Can't parse {0} as integer")]
	InvalidInt(String),

	#[error("Can't parse {0} as ISO-8601 datetime")]
	InvalidDateTime(String),

	#[error("Can't parse {0} as ISO-8601 date")]
	InvalidDate(String),

	#[error("Can't use {0} as a list of strings")]
	InvalidList(String),

	#[error("Can't use {0} as a string")]
	InvalidString(String),

	#[error("expected a value of type {expected}, found {found}")]
	TypeMismatch { expected: ParamType, found: String },
}

/// Errors raised while resolving declared parameters
#[derive(Debug, Error)]
pub enum ParamError {
	#[error("Missing required parameter {0}")]
	MissingParameter(String),

	/// Same as `MissingParameter`, worded for query-only binding
	#[error("Missing required argument {0}")]
	MissingArgument(String),

	#[error("Invalid value for {name}: {source}")]
	Conversion {
		name: String,
		#[source]
		source: ConversionError,
	},

	#[error("No deserializer registered for type '{type_name}' of parameter {name}")]
	UnknownType { name: String, type_name: String },

	#[error("Malformed JSON body: {0}")]
	MalformedBody(#[from] serde_json::Error),

	#[error("JSON body must be an object, got {0}")]
	BodyNotObject(&'static str),

	/// A handler asked for an argument that was never bound
	#[error("Argument {0} was not bound")]
	NotBound(String),
}

/// A failed binding, with the context needed to diagnose it
#[derive(Debug)]
pub struct BindError {
	parameter: Option<String>,
	raw_value: Option<Value>,
	source: ParamError,
}

impl BindError {
	/// Failure tied to a declared parameter
	pub fn for_parameter(name: impl Into<String>, raw_value: Option<Value>, source: ParamError) -> Self {
		Self {
			parameter: Some(name.into()),
			raw_value,
			source,
		}
	}

	/// Failure reading the request body itself
	pub fn for_body(source: ParamError) -> Self {
		Self {
			parameter: None,
			raw_value: None,
			source,
		}
	}

	/// Name of the offending parameter, if the failure concerns one
	pub fn parameter(&self) -> Option<&str> {
		self.parameter.as_deref()
	}

	/// The raw value that failed to convert
	pub fn raw_value(&self) -> Option<&Value> {
		self.raw_value.as_ref()
	}

	pub fn error(&self) -> &ParamError {
		&self.source
	}

	/// What the client is told
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{BindError, ParamError};
	///
	/// let error = BindError::for_parameter(
	/// 	"test",
	/// 	None,
	/// 	ParamError::MissingParameter("test".into()),
	/// );
	/// assert_eq!(error.client_message(), "Bad or missing value for test");
	/// ```
	pub fn client_message(&self) -> String {
		format!(
			"Bad or missing value for {}",
			self.parameter.as_deref().unwrap_or(BODY_SUBJECT)
		)
	}
}

impl fmt::Display for BindError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{}: {}",
			self.parameter.as_deref().unwrap_or(BODY_SUBJECT),
			self.source
		)
	}
}

impl std::error::Error for BindError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		Some(&self.source)
	}
}

impl From<BindError> for argbind_http::Error {
	fn from(error: BindError) -> Self {
		argbind_http::Error::BadRequest(error.client_message())
	}
}

// Outside of binding a ParamError means the handler and its signature
// disagree, which is a server-side fault.
impl From<ParamError> for argbind_http::Error {
	fn from(error: ParamError) -> Self {
		argbind_http::Error::Internal(error.to_string())
	}
}
