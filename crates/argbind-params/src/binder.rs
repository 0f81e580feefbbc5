//! The parameter binder
//!
//! Resolution order for every declared parameter:
//!
//! 1. a parameter named like the request argument is skipped;
//! 2. a path-extracted value wins over everything else;
//! 3. otherwise the value from the selected source (query or body);
//! 4. otherwise the declared default, or a missing-parameter failure.
//!
//! The first failure aborts binding. It is logged once and reported to the
//! client as `400 Bad Request`.

use argbind_http::Request;
use serde_json::{Map, Value};
use std::sync::Arc;

use crate::config::{BinderConfig, BindingMode};
use crate::deserializers::{Deserializers, raw_text};
use crate::descriptor::{ParamDescriptor, Signature};
use crate::error::{BindError, ParamError, ParamResult};
use crate::source::RawSource;
use crate::value::{FromParamValue, ParamValue};

/// Deserialized arguments for one invocation, in declaration order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundArgs {
	values: Vec<(String, ParamValue)>,
}

impl BoundArgs {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, value: ParamValue) {
		let name = name.into();
		match self.values.iter_mut().find(|(n, _)| *n == name) {
			Some((_, slot)) => *slot = value,
			None => self.values.push((name, value)),
		}
	}

	pub fn get(&self, name: &str) -> Option<&ParamValue> {
		self.values
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v)
	}

	/// Remove an argument and convert it to its Rust type
	///
	/// # Errors
	///
	/// [`ParamError::NotBound`] if no such argument was bound, or a conversion
	/// error if it was bound with another type.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{BoundArgs, ParamValue};
	///
	/// let mut args = BoundArgs::new();
	/// args.insert("test", ParamValue::Int(10));
	///
	/// let test: i64 = args.take("test").unwrap();
	/// assert_eq!(test, 10);
	/// assert!(args.is_empty());
	/// ```
	pub fn take<T: FromParamValue>(&mut self, name: &str) -> ParamResult<T> {
		let idx = self
			.values
			.iter()
			.position(|(n, _)| n == name)
			.ok_or_else(|| ParamError::NotBound(name.to_string()))?;
		let (_, value) = self.values.remove(idx);
		T::from_param_value(value).map_err(|source| ParamError::Conversion {
			name: name.to_string(),
			source,
		})
	}

	/// Convert a copy of an argument to its Rust type
	pub fn extract<T: FromParamValue>(&self, name: &str) -> ParamResult<T> {
		let value = self
			.get(name)
			.cloned()
			.ok_or_else(|| ParamError::NotBound(name.to_string()))?;
		T::from_param_value(value).map_err(|source| ParamError::Conversion {
			name: name.to_string(),
			source,
		})
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
		self.values.iter().map(|(n, v)| (n.as_str(), v))
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}

	/// All arguments as a JSON object
	pub fn to_json(&self) -> Value {
		let map: Map<String, Value> = self
			.values
			.iter()
			.map(|(n, v)| (n.clone(), v.to_json()))
			.collect();
		Value::Object(map)
	}
}

/// Binds declared parameters from requests
///
/// Cheap to clone; signature and configuration are shared.
#[derive(Debug, Clone)]
pub struct ParameterBinder {
	signature: Arc<Signature>,
	config: Arc<BinderConfig>,
	deserializers: &'static Deserializers,
}

impl ParameterBinder {
	pub fn new(signature: Signature) -> Self {
		Self {
			signature: Arc::new(signature),
			config: Arc::new(BinderConfig::default()),
			deserializers: Deserializers::builtin(),
		}
	}

	pub fn with_config(mut self, config: BinderConfig) -> Self {
		self.config = Arc::new(config);
		self
	}

	/// Use a custom deserializer table
	pub fn with_deserializers(mut self, deserializers: &'static Deserializers) -> Self {
		self.deserializers = deserializers;
		self
	}

	pub fn signature(&self) -> &Signature {
		&self.signature
	}

	pub fn config(&self) -> &BinderConfig {
		&self.config
	}

	/// Resolve every declared parameter for `request`
	///
	/// Path values are read from `request.path_params`.
	///
	/// # Errors
	///
	/// The first failure, with the offending parameter and raw value.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_http::{Method, Request};
	/// use argbind_params::{ParamDescriptor, ParamType, ParamValue, ParameterBinder, Signature};
	///
	/// let binder = ParameterBinder::new(
	/// 	Signature::new("request").param(ParamDescriptor::required("test", ParamType::Int)),
	/// );
	/// let request = Request::builder().method(Method::GET).uri("/int?test=10").build().unwrap();
	///
	/// let args = binder.bind(&request).unwrap();
	/// assert_eq!(args.get("test"), Some(&ParamValue::Int(10)));
	/// ```
	pub fn bind(&self, request: &Request) -> Result<BoundArgs, BindError> {
		let kind = self.config.source_for(&request.method);
		let source = RawSource::from_request(request, kind).map_err(BindError::for_body)?;

		let mut args = BoundArgs::new();
		for param in self.signature.params() {
			let name = param.name();
			if name == self.signature.request_arg() {
				continue;
			}

			let raw = match request.path_params.get(name) {
				Some(path_value) => Value::String(path_value.clone()),
				None => match source.get(name) {
					Some(raw) => raw.clone(),
					None => match param.default() {
						Some(default) => {
							args.insert(name, default.clone());
							continue;
						}
						None => {
							return Err(BindError::for_parameter(name, None, self.missing(name)));
						}
					},
				},
			};

			let value = self.deserialize(param, &raw).map_err(|e| {
				BindError::for_parameter(name, Some(raw.clone()), e)
			})?;
			args.insert(name, value);
		}

		Ok(args)
	}

	/// [`bind`](Self::bind), logging a failure and mapping it to `400`
	///
	/// # Errors
	///
	/// `argbind_http::Error::BadRequest("Bad or missing value for <name>")`.
	pub fn bind_or_reject(&self, request: &Request) -> argbind_http::Result<BoundArgs> {
		match self.bind(request) {
			Ok(args) => {
				tracing::debug!(
					target: "argbind::params",
					path = %request.path(),
					bound = args.len(),
					"Request {} bound",
					self.config.mode.noun()
				);
				Ok(args)
			}
			Err(error) => {
				self.log_failure(&error);
				Err(error.into())
			}
		}
	}

	fn deserialize(&self, param: &ParamDescriptor, raw: &Value) -> ParamResult<ParamValue> {
		let declared = param.declared_type();
		let f = self
			.deserializers
			.get(declared)
			.ok_or_else(|| ParamError::UnknownType {
				name: param.name().to_string(),
				type_name: declared.name().to_string(),
			})?;

		f(raw).map_err(|source| ParamError::Conversion {
			name: param.name().to_string(),
			source,
		})
	}

	fn missing(&self, name: &str) -> ParamError {
		match self.config.mode {
			BindingMode::MethodBased => ParamError::MissingParameter(name.to_string()),
			BindingMode::QueryOnly => ParamError::MissingArgument(name.to_string()),
		}
	}

	fn log_failure(&self, error: &BindError) {
		tracing::warn!(
			target: "argbind::params",
			parameter = error.parameter().unwrap_or(crate::error::BODY_SUBJECT),
			raw_value = %error.raw_value().map(raw_text).unwrap_or_default(),
			error = %error.error(),
			"Request {} not validated",
			self.config.mode.noun()
		);
	}
}
