//! Binder configuration
//!
//! ```toml
//! mode = "method_based"      # or "query_only"
//! read_methods = ["GET"]
//! ```

use hyper::Method;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::source::SourceKind;

/// Errors raised while loading a [`BinderConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("Failed to parse binder configuration: {0}")]
	Parse(#[from] toml::de::Error),

	#[error("Invalid HTTP method in read_methods: '{0}'")]
	InvalidMethod(String),
}

/// How the raw value source is chosen for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingMode {
	/// Query string for read methods, JSON body for everything else
	#[default]
	MethodBased,
	/// Always the query string, whatever the method
	QueryOnly,
}

impl BindingMode {
	/// Word used for parameters in diagnostics
	pub fn noun(&self) -> &'static str {
		match self {
			BindingMode::MethodBased => "parameters",
			BindingMode::QueryOnly => "args",
		}
	}
}

/// Settings shared by every invocation of a wrapped handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderConfig {
	pub mode: BindingMode,
	/// Methods whose parameters come from the query string
	pub read_methods: Vec<String>,
}

impl Default for BinderConfig {
	fn default() -> Self {
		Self {
			mode: BindingMode::MethodBased,
			read_methods: vec![Method::GET.to_string()],
		}
	}
}

impl BinderConfig {
	/// Configuration that always binds from the query string
	pub fn query_only() -> Self {
		Self {
			mode: BindingMode::QueryOnly,
			..Self::default()
		}
	}

	/// Load from TOML; missing keys keep their defaults
	///
	/// # Errors
	///
	/// Fails on malformed TOML or an invalid method name.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{BinderConfig, BindingMode};
	///
	/// let config = BinderConfig::from_toml_str(r#"read_methods = ["GET", "HEAD"]"#).unwrap();
	/// assert_eq!(config.mode, BindingMode::MethodBased);
	/// assert_eq!(config.read_methods, ["GET", "HEAD"]);
	/// ```
	pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
		let mut config: BinderConfig = toml::from_str(input)?;
		config.normalize()?;
		Ok(config)
	}

	/// Validate method names and upper-case them
	pub fn normalize(&mut self) -> Result<(), ConfigError> {
		for method in &mut self.read_methods {
			let upper = method.trim().to_ascii_uppercase();
			Method::from_bytes(upper.as_bytes())
				.map_err(|_| ConfigError::InvalidMethod(method.clone()))?;
			*method = upper;
		}
		Ok(())
	}

	pub fn is_read_method(&self, method: &Method) -> bool {
		self.read_methods
			.iter()
			.any(|m| m.eq_ignore_ascii_case(method.as_str()))
	}

	/// Source to bind from for a request made with `method`
	pub fn source_for(&self, method: &Method) -> SourceKind {
		match self.mode {
			BindingMode::QueryOnly => SourceKind::Query,
			BindingMode::MethodBased if self.is_read_method(method) => SourceKind::Query,
			BindingMode::MethodBased => SourceKind::Body,
		}
	}
}
