//! Type-driven conversion of raw values
//!
//! Raw values are `serde_json::Value`s: query and path values arrive as
//! strings, body values keep whatever JSON type the client sent.

use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ConversionError;
use crate::temporal;
use crate::types::{DeclaredType, ParamType};
use crate::value::ParamValue;

/// A pure conversion from a raw value to a typed one
pub type DeserializeFn = fn(&Value) -> Result<ParamValue, ConversionError>;

static BUILTIN: Lazy<Deserializers> = Lazy::new(|| {
	let mut table = Deserializers::empty();
	table.register(ParamType::Bool, parse_bool);
	table.register(ParamType::Int, parse_int);
	table.register(ParamType::Str, parse_str);
	table.register(ParamType::Date, parse_date);
	table.register(ParamType::DateTime, parse_datetime);
	table.register(ParamType::StrList, parse_str_list);
	table
});

/// Table of deserializers keyed by declared type
#[derive(Debug, Clone)]
pub struct Deserializers {
	table: HashMap<ParamType, DeserializeFn>,
}

impl Deserializers {
	/// A table with no entries
	pub fn empty() -> Self {
		Self {
			table: HashMap::new(),
		}
	}

	/// The shared table covering every [`ParamType`]
	pub fn builtin() -> &'static Deserializers {
		&BUILTIN
	}

	/// Register (or replace) the deserializer for a type
	pub fn register(&mut self, ty: ParamType, f: DeserializeFn) -> &mut Self {
		self.table.insert(ty, f);
		self
	}

	/// Look up the deserializer for a declared type
	///
	/// `Unsupported` declared types never have one.
	pub fn get(&self, declared: &DeclaredType) -> Option<DeserializeFn> {
		declared
			.param_type()
			.and_then(|ty| self.table.get(&ty).copied())
	}

	pub fn contains(&self, ty: ParamType) -> bool {
		self.table.contains_key(&ty)
	}
}

/// Text of a raw value for diagnostics: strings unquoted, the rest as JSON
pub(crate) fn raw_text(raw: &Value) -> String {
	match raw {
		Value::String(s) => s.clone(),
		other => other.to_string(),
	}
}

/// Case-insensitive `"true"` / `"false"`; JSON booleans pass through
///
/// # Examples
///
/// ```
/// use argbind_params::deserializers::parse_bool;
/// use argbind_params::ParamValue;
/// use serde_json::json;
///
/// assert_eq!(parse_bool(&json!("TRUE")).unwrap(), ParamValue::Bool(true));
/// assert_eq!(parse_bool(&json!(false)).unwrap(), ParamValue::Bool(false));
/// assert!(parse_bool(&json!("yes")).is_err());
/// ```
pub fn parse_bool(raw: &Value) -> Result<ParamValue, ConversionError> {
	match raw {
		Value::Bool(b) => Ok(ParamValue::Bool(*b)),
		Value::String(s) if s.eq_ignore_ascii_case("true") => Ok(ParamValue::Bool(true)),
		Value::String(s) if s.eq_ignore_ascii_case("false") => Ok(ParamValue::Bool(false)),
		other => Err(ConversionError::InvalidBool(raw_text(other))),
	}
}

/// Exact `i64` parse of a string, or a JSON integer
pub fn parse_int(raw: &Value) -> Result<ParamValue, ConversionError> {
	let parsed = match raw {
		Value::String(s) => s.parse::<i64>().ok(),
		Value::Number(n) => n.as_i64(),
		_ => None,
	};
	parsed
		.map(ParamValue::Int)
		.ok_or_else(|| ConversionError::InvalidInt(raw_text(raw)))
}

/// Identity for strings, no validation
///
/// JSON numbers and booleans are taken by their JSON text. Null, arrays and
/// objects are rejected.
pub fn parse_str(raw: &Value) -> Result<ParamValue, ConversionError> {
	match raw {
		Value::String(s) => Ok(ParamValue::Str(s.clone())),
		Value::Number(n) => Ok(ParamValue::Str(n.to_string())),
		Value::Bool(b) => Ok(ParamValue::Str(b.to_string())),
		other => Err(ConversionError::InvalidString(raw_text(other))),
	}
}

/// ISO-8601 date-time, see [`temporal::parse_naive_datetime`]
pub fn parse_datetime(raw: &Value) -> Result<ParamValue, ConversionError> {
	raw.as_str()
		.and_then(temporal::parse_naive_datetime)
		.map(ParamValue::DateTime)
		.ok_or_else(|| ConversionError::InvalidDateTime(raw_text(raw)))
}

/// ISO-8601 date, or the date part of a date-time
pub fn parse_date(raw: &Value) -> Result<ParamValue, ConversionError> {
	raw.as_str()
		.and_then(temporal::parse_naive_date)
		.map(ParamValue::Date)
		.ok_or_else(|| ConversionError::InvalidDate(raw_text(raw)))
}

/// A JSON array of strings verbatim, or a string split on `,`
///
/// # Examples
///
/// ```
/// use argbind_params::deserializers::parse_str_list;
/// use argbind_params::ParamValue;
/// use serde_json::json;
///
/// let split = parse_str_list(&json!("one,two,three")).unwrap();
/// assert_eq!(split, ParamValue::StrList(vec!["one".into(), "two".into(), "three".into()]));
///
/// let single = parse_str_list(&json!("not a datetime")).unwrap();
/// assert_eq!(single, ParamValue::StrList(vec!["not a datetime".into()]));
/// ```
pub fn parse_str_list(raw: &Value) -> Result<ParamValue, ConversionError> {
	match raw {
		Value::String(s) => Ok(ParamValue::StrList(
			s.split(',').map(str::to_string).collect(),
		)),
		Value::Array(items) => items
			.iter()
			.map(|item| item.as_str().map(str::to_string))
			.collect::<Option<Vec<_>>>()
			.map(ParamValue::StrList)
			.ok_or_else(|| ConversionError::InvalidList(raw.to_string())),
		other => Err(ConversionError::InvalidList(raw_text(other))),
	}
}
