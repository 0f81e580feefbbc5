//! Per-request raw value sources

use argbind_http::{QueryParams, Request};
use serde_json::{Map, Value};

use crate::error::ParamError;

/// Where declared parameters are read from for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
	/// The query string
	Query,
	/// Top-level members of a JSON object body
	Body,
}

/// Name → raw value mapping for a single request
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawSource {
	values: Map<String, Value>,
}

impl RawSource {
	/// Query parameters as raw values
	///
	/// Each key maps to the string given at its first occurrence; later
	/// repeats of the same key are ignored.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::QueryParams;
	/// use argbind_params::RawSource;
	/// use serde_json::json;
	///
	/// let source = RawSource::from_query(&QueryParams::parse("test=10&test=20&e=a,b&e=c"));
	/// assert_eq!(source.get("test"), Some(&json!("10")));
	/// assert_eq!(source.get("e"), Some(&json!("a,b")));
	/// ```
	pub fn from_query(query: &QueryParams) -> Self {
		let values = query
			.iter()
			.filter_map(|(name, values)| {
				let first = values.first()?;
				Some((name.to_string(), Value::String(first.clone())))
			})
			.collect();
		Self { values }
	}

	/// Members of a JSON object body; an empty body is an empty source
	///
	/// # Errors
	///
	/// [`ParamError::MalformedBody`] if the body is not JSON, and
	/// [`ParamError::BodyNotObject`] if it is JSON but not an object.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{ParamError, RawSource};
	/// use serde_json::json;
	///
	/// let source = RawSource::from_body(br#"{"test": 10}"#).unwrap();
	/// assert_eq!(source.get("test"), Some(&json!(10)));
	///
	/// assert!(RawSource::from_body(b"").unwrap().is_empty());
	/// assert!(matches!(RawSource::from_body(b"[1]"), Err(ParamError::BodyNotObject("array"))));
	/// ```
	pub fn from_body(body: &[u8]) -> Result<Self, ParamError> {
		if body.is_empty() {
			return Ok(Self::default());
		}

		match serde_json::from_slice::<Value>(body)? {
			Value::Object(values) => Ok(Self { values }),
			other => Err(ParamError::BodyNotObject(json_kind(&other))),
		}
	}

	/// Read the source of the given kind from a request
	pub fn from_request(request: &Request, kind: SourceKind) -> Result<Self, ParamError> {
		match kind {
			SourceKind::Query => Ok(Self::from_query(&request.query_params)),
			SourceKind::Body => Self::from_body(&request.body),
		}
	}

	pub fn get(&self, name: &str) -> Option<&Value> {
		self.values.get(name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.values.contains_key(name)
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}
