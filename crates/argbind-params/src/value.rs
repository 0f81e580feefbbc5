//! Bound parameter values and their conversion to Rust types

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::ConversionError;
use crate::temporal;
use crate::types::ParamType;

/// A deserialized parameter value
///
/// `Null` only ever comes from a declared default (an optional parameter that
/// was not supplied); raw input never deserializes to it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
	Null,
	Bool(bool),
	Int(i64),
	Str(String),
	Date(NaiveDate),
	DateTime(NaiveDateTime),
	StrList(Vec<String>),
}

impl ParamValue {
	/// The type tag of this value, `None` for `Null`
	pub fn param_type(&self) -> Option<ParamType> {
		match self {
			ParamValue::Null => None,
			ParamValue::Bool(_) => Some(ParamType::Bool),
			ParamValue::Int(_) => Some(ParamType::Int),
			ParamValue::Str(_) => Some(ParamType::Str),
			ParamValue::Date(_) => Some(ParamType::Date),
			ParamValue::DateTime(_) => Some(ParamType::DateTime),
			ParamValue::StrList(_) => Some(ParamType::StrList),
		}
	}

	pub fn is_null(&self) -> bool {
		matches!(self, ParamValue::Null)
	}

	/// Conventional JSON form; dates use ISO-8601 text
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::ParamValue;
	/// use chrono::NaiveDate;
	/// use serde_json::json;
	///
	/// let value = ParamValue::DateTime(
	/// 	NaiveDate::from_ymd_opt(2017, 10, 10).unwrap().and_hms_opt(10, 10, 10).unwrap(),
	/// );
	/// assert_eq!(value.to_json(), json!("2017-10-10T10:10:10"));
	/// ```
	pub fn to_json(&self) -> Value {
		match self {
			ParamValue::Null => Value::Null,
			ParamValue::Bool(b) => Value::Bool(*b),
			ParamValue::Int(i) => Value::from(*i),
			ParamValue::Str(s) => Value::String(s.clone()),
			ParamValue::Date(d) => Value::String(temporal::format_date(d)),
			ParamValue::DateTime(dt) => Value::String(temporal::format_datetime(dt)),
			ParamValue::StrList(items) => {
				Value::Array(items.iter().cloned().map(Value::String).collect())
			}
		}
	}

	/// Short description used in type mismatch errors
	fn describe(&self) -> String {
		match self.param_type() {
			Some(ty) => ty.to_string(),
			None => "null".to_string(),
		}
	}
}

impl Serialize for ParamValue {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			ParamValue::Null => serializer.serialize_none(),
			ParamValue::Bool(b) => serializer.serialize_bool(*b),
			ParamValue::Int(i) => serializer.serialize_i64(*i),
			ParamValue::Str(s) => serializer.serialize_str(s),
			ParamValue::Date(d) => serializer.serialize_str(&temporal::format_date(d)),
			ParamValue::DateTime(dt) => serializer.serialize_str(&temporal::format_datetime(dt)),
			ParamValue::StrList(items) => items.serialize(serializer),
		}
	}
}

/// Rust types a bound parameter can be extracted into
///
/// Implemented for exactly the supported types and for `Option` of them.
/// A handler parameter of any other type does not compile.
pub trait FromParamValue: Sized {
	/// Declared type used when the parameter is registered
	const PARAM_TYPE: ParamType;

	/// Whether an absent value binds to `None` instead of failing
	const NULLABLE: bool = false;

	fn from_param_value(value: ParamValue) -> Result<Self, ConversionError>;
}

fn mismatch(expected: ParamType, found: &ParamValue) -> ConversionError {
	ConversionError::TypeMismatch {
		expected,
		found: found.describe(),
	}
}

macro_rules! impl_from_param_value {
	($ty:ty, $tag:ident) => {
		impl FromParamValue for $ty {
			const PARAM_TYPE: ParamType = ParamType::$tag;

			fn from_param_value(value: ParamValue) -> Result<Self, ConversionError> {
				match value {
					ParamValue::$tag(inner) => Ok(inner),
					other => Err(mismatch(ParamType::$tag, &other)),
				}
			}
		}

		impl From<$ty> for ParamValue {
			fn from(value: $ty) -> Self {
				ParamValue::$tag(value)
			}
		}
	};
}

impl_from_param_value!(bool, Bool);
impl_from_param_value!(i64, Int);
impl_from_param_value!(String, Str);
impl_from_param_value!(NaiveDate, Date);
impl_from_param_value!(NaiveDateTime, DateTime);
impl_from_param_value!(Vec<String>, StrList);

impl<T: FromParamValue> FromParamValue for Option<T> {
	const PARAM_TYPE: ParamType = T::PARAM_TYPE;
	const NULLABLE: bool = true;

	fn from_param_value(value: ParamValue) -> Result<Self, ConversionError> {
		match value {
			ParamValue::Null => Ok(None),
			other => T::from_param_value(other).map(Some),
		}
	}
}

impl<T> From<Option<T>> for ParamValue
where
	ParamValue: From<T>,
{
	fn from(value: Option<T>) -> Self {
		value.map(ParamValue::from).unwrap_or(ParamValue::Null)
	}
}

impl From<&str> for ParamValue {
	fn from(value: &str) -> Self {
		ParamValue::Str(value.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	fn test_option_takes_null_as_none() {
		let value: Option<Vec<String>> = FromParamValue::from_param_value(ParamValue::Null).unwrap();
		assert_eq!(value, None);
	}

	#[rstest]
	fn test_option_unwraps_present_value() {
		let value: Option<i64> = FromParamValue::from_param_value(ParamValue::Int(35)).unwrap();
		assert_eq!(value, Some(35));
	}

	#[rstest]
	fn test_wrong_variant_is_a_mismatch() {
		let err = i64::from_param_value(ParamValue::Str("10".into())).unwrap_err();
		assert_eq!(
			err,
			ConversionError::TypeMismatch {
				expected: ParamType::Int,
				found: "str".into(),
			}
		);
	}

	#[rstest]
	fn test_null_for_required_type_is_a_mismatch() {
		assert!(String::from_param_value(ParamValue::Null).is_err());
	}

	#[rstest]
	fn test_serialize_matches_to_json() {
		let values = vec![
			ParamValue::Null,
			ParamValue::Bool(true),
			ParamValue::Int(10),
			ParamValue::Str("hello".into()),
			ParamValue::Date(NaiveDate::from_ymd_opt(2017, 10, 19).unwrap()),
			ParamValue::StrList(vec!["one".into(), "two".into()]),
		];
		for value in values {
			assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());
		}
	}

	#[rstest]
	fn test_nullable_flags() {
		assert!(!<i64 as FromParamValue>::NULLABLE);
		assert!(<Option<i64> as FromParamValue>::NULLABLE);
		assert_eq!(<Option<Vec<String>> as FromParamValue>::PARAM_TYPE, ParamType::StrList);
	}

	#[rstest]
	fn test_defaults_convert_into_values() {
		assert_eq!(ParamValue::from(35i64), ParamValue::Int(35));
		assert_eq!(ParamValue::from("helloworld"), ParamValue::Str("helloworld".into()));
		assert_eq!(ParamValue::from(None::<Vec<String>>), ParamValue::Null);
		assert_eq!(ParamValue::from(Some(true)).to_json(), json!(true));
	}
}
