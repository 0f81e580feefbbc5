//! Declared parameter types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of types a handler parameter may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
	Bool,
	Int,
	Str,
	Date,
	DateTime,
	/// A list of strings, given as a JSON array or a comma separated string
	StrList,
}

impl ParamType {
	pub const ALL: [ParamType; 6] = [
		ParamType::Bool,
		ParamType::Int,
		ParamType::Str,
		ParamType::Date,
		ParamType::DateTime,
		ParamType::StrList,
	];

	/// Canonical name, as written in diagnostics
	pub fn as_str(&self) -> &'static str {
		match self {
			ParamType::Bool => "bool",
			ParamType::Int => "int",
			ParamType::Str => "str",
			ParamType::Date => "date",
			ParamType::DateTime => "datetime",
			ParamType::StrList => "list[str]",
		}
	}
}

impl fmt::Display for ParamType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Error returned when a type name matches none of the supported types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported parameter type '{0}'")]
pub struct UnsupportedType(pub String);

impl FromStr for ParamType {
	type Err = UnsupportedType;

	/// Parse a type name
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::ParamType;
	///
	/// assert_eq!("int".parse::<ParamType>().unwrap(), ParamType::Int);
	/// assert_eq!("List[str]".parse::<ParamType>().unwrap(), ParamType::StrList);
	/// assert!("uuid".parse::<ParamType>().is_err());
	/// ```
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"bool" | "boolean" => Ok(ParamType::Bool),
			"int" | "integer" | "i64" => Ok(ParamType::Int),
			"str" | "string" | "String" => Ok(ParamType::Str),
			"date" | "NaiveDate" => Ok(ParamType::Date),
			"datetime" | "NaiveDateTime" => Ok(ParamType::DateTime),
			"list[str]" | "List[str]" | "Vec<String>" => Ok(ParamType::StrList),
			other => Err(UnsupportedType(other.to_string())),
		}
	}
}

/// The type a parameter was registered with
///
/// Registration by name accepts any name; a name that matches no supported
/// type is kept as `Unsupported` and every request to the handler fails
/// binding for that parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
	Builtin(ParamType),
	Unsupported(String),
}

impl DeclaredType {
	/// Resolve a type name, keeping unknown names as `Unsupported`
	pub fn from_name(name: &str) -> Self {
		match name.parse::<ParamType>() {
			Ok(ty) => DeclaredType::Builtin(ty),
			Err(UnsupportedType(name)) => DeclaredType::Unsupported(name),
		}
	}

	pub fn param_type(&self) -> Option<ParamType> {
		match self {
			DeclaredType::Builtin(ty) => Some(*ty),
			DeclaredType::Unsupported(_) => None,
		}
	}

	pub fn name(&self) -> &str {
		match self {
			DeclaredType::Builtin(ty) => ty.as_str(),
			DeclaredType::Unsupported(name) => name,
		}
	}
}

impl From<ParamType> for DeclaredType {
	fn from(ty: ParamType) -> Self {
		DeclaredType::Builtin(ty)
	}
}

impl fmt::Display for DeclaredType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}
