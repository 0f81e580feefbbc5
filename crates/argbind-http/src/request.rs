//! HTTP request representation handed to wrapped handlers

mod params;

pub use params::QueryParams;

use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;

use crate::{Error, Result};

/// HTTP request as seen by a handler
///
/// Query parameters are decoded once at construction. Path parameters are
/// filled in by the router after matching the URL template.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub query_params: QueryParams,
	pub path_params: HashMap<String, String>,
}

impl Request {
	/// Create a request from its raw parts
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Bytes, HeaderMap, Method, Request, Uri, Version};
	///
	/// let request = Request::new(
	/// 	Method::GET,
	/// 	Uri::from_static("/int?test=10"),
	/// 	Version::HTTP_11,
	/// 	HeaderMap::new(),
	/// 	Bytes::new(),
	/// );
	/// assert_eq!(request.query_params.get("test"), Some("10"));
	/// ```
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			query_params,
			path_params: HashMap::new(),
		}
	}

	/// Start building a request
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}

	/// Raw body bytes
	pub fn body(&self) -> &Bytes {
		&self.body
	}
}

/// Builder for [`Request`]
#[derive(Debug, Default)]
pub struct RequestBuilder {
	method: Option<Method>,
	uri: Option<String>,
	version: Option<Version>,
	headers: HeaderMap,
	body: Bytes,
	path_params: HashMap<String, String>,
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = Some(method);
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = Some(uri.into());
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = Some(version);
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Record a value extracted from the URL path
	pub fn path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(key.into(), value.into());
		self
	}

	/// Build the request
	///
	/// Defaults to `GET /` over HTTP/1.1 when method or URI are not set.
	///
	/// # Errors
	///
	/// Returns [`Error::InvalidRequest`] if the URI cannot be parsed.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Method, Request};
	///
	/// let request = Request::builder()
	/// 	.method(Method::POST)
	/// 	.uri("/with/123/path_params")
	/// 	.path_param("path_param", "123")
	/// 	.body(r#"{"test": "hello"}"#)
	/// 	.build()
	/// 	.unwrap();
	///
	/// assert_eq!(request.path(), "/with/123/path_params");
	/// assert_eq!(request.path_params.get("path_param").map(String::as_str), Some("123"));
	/// ```
	pub fn build(self) -> Result<Request> {
		let uri = match self.uri {
			Some(raw) => raw
				.parse::<Uri>()
				.map_err(|e| Error::InvalidRequest(format!("invalid URI '{}': {}", raw, e)))?,
			None => Uri::from_static("/"),
		};

		let mut request = Request::new(
			self.method.unwrap_or(Method::GET),
			uri,
			self.version.unwrap_or(Version::HTTP_11),
			self.headers,
			self.body,
		);
		request.path_params = self.path_params;
		Ok(request)
	}
}
