use super::Request;
use hyper::Uri;
use std::collections::HashMap;

/// Decoded query string parameters
///
/// A key may occur several times in a query string (`?e=a&e=b`); every
/// occurrence is kept, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams(HashMap<String, Vec<String>>);

impl QueryParams {
	/// Parse a raw (still percent-encoded) query string
	///
	/// `+` decodes to a space. Pairs without `=` get an empty value.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::QueryParams;
	///
	/// let params = QueryParams::parse("b=test&e=a,b&name=John%20Doe&e=c");
	/// assert_eq!(params.get("b"), Some("test"));
	/// assert_eq!(params.get("name"), Some("John Doe"));
	/// assert_eq!(params.get_all("e"), Some(&["a,b".to_string(), "c".to_string()][..]));
	/// ```
	pub fn parse(query: &str) -> Self {
		let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query).unwrap_or_default();

		let mut map: HashMap<String, Vec<String>> = HashMap::new();
		for (key, value) in pairs {
			map.entry(key).or_default().push(value);
		}
		Self(map)
	}

	/// First value for a key
	pub fn get(&self, name: &str) -> Option<&str> {
		self.0
			.get(name)
			.and_then(|values| values.first())
			.map(String::as_str)
	}

	/// Every value for a key, in query order
	pub fn get_all(&self, name: &str) -> Option<&[String]> {
		self.0.get(name).map(Vec::as_slice)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.0.contains_key(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
		self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl Request {
	/// Parse query parameters from URI
	pub(super) fn parse_query_params(uri: &Uri) -> QueryParams {
		uri.query().map(QueryParams::parse).unwrap_or_default()
	}

	/// Get the request path
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Method, Request};
	///
	/// let request = Request::builder()
	/// 	.method(Method::GET)
	/// 	.uri("/list?test=one,two,three")
	/// 	.build()
	/// 	.unwrap();
	///
	/// assert_eq!(request.path(), "/list");
	/// ```
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Set a path parameter (used by routers for path variable extraction)
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Method, Request};
	///
	/// let mut request = Request::builder()
	/// 	.method(Method::GET)
	/// 	.uri("/me/42/birthdate")
	/// 	.build()
	/// 	.unwrap();
	///
	/// request.set_path_param("id", "42");
	/// assert_eq!(request.path_param("id"), Some("42"));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}

	/// Get a path parameter extracted by the router
	pub fn path_param(&self, name: &str) -> Option<&str> {
		self.path_params.get(name).map(String::as_str)
	}
}
