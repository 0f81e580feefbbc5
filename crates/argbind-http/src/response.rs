use bytes::Bytes;
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP Response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Response, StatusCode};
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	/// Create a Response with HTTP 200 OK status
	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	/// Create a Response with HTTP 400 Bad Request status
	pub fn bad_request() -> Self {
		Self::new(StatusCode::BAD_REQUEST)
	}

	/// Create a Response with HTTP 500 Internal Server Error status
	pub fn internal_server_error() -> Self {
		Self::new(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Set the response body
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a custom header to the response
	///
	/// Invalid header names or values are ignored.
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let Ok(header_name) = hyper::header::HeaderName::from_bytes(name.as_bytes())
			&& let Ok(header_value) = hyper::header::HeaderValue::from_str(value)
		{
			self.headers.insert(header_name, header_value);
		}
		self
	}

	/// Set the response body to JSON and add appropriate Content-Type header
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::Response;
	/// use serde_json::json;
	///
	/// let response = Response::ok().with_json(&json!({"test": 10})).unwrap();
	///
	/// assert_eq!(
	/// 	response.headers.get("content-type").unwrap().to_str().unwrap(),
	/// 	"application/json"
	/// );
	/// ```
	pub fn with_json<T: Serialize>(mut self, data: &T) -> crate::Result<Self> {
		let json = serde_json::to_vec(data)?;
		self.body = Bytes::from(json);
		self.headers.insert(
			hyper::header::CONTENT_TYPE,
			hyper::header::HeaderValue::from_static("application/json"),
		);
		Ok(self)
	}

	/// Shorthand for `Response::ok().with_json(data)`
	pub fn json<T: Serialize>(data: &T) -> crate::Result<Self> {
		Self::ok().with_json(data)
	}

	/// Decode the body as JSON
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::Response;
	/// use serde_json::{Value, json};
	///
	/// let response = Response::json(&json!({"test": [1, 2]})).unwrap();
	/// let body: Value = response.json_body().unwrap();
	/// assert_eq!(body, json!({"test": [1, 2]}));
	/// ```
	pub fn json_body<T: DeserializeOwned>(&self) -> crate::Result<T> {
		Ok(serde_json::from_slice(&self.body)?)
	}
}

impl From<crate::Error> for Response {
	fn from(error: crate::Error) -> Self {
		let body = serde_json::json!({
			"error": error.to_string(),
		});

		Response::new(error.status())
			.with_json(&body)
			.unwrap_or_else(|_| Response::internal_server_error())
	}
}
