//! Wrap-time description of a handler's parameters

use crate::types::{DeclaredType, ParamType};
use crate::value::{FromParamValue, ParamValue};

/// One declared handler parameter
///
/// Built once when the handler is wrapped and shared by every invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
	name: String,
	ty: DeclaredType,
	default: Option<ParamValue>,
}

impl ParamDescriptor {
	/// A parameter that must be supplied
	pub fn required(name: impl Into<String>, ty: ParamType) -> Self {
		Self {
			name: name.into(),
			ty: DeclaredType::Builtin(ty),
			default: None,
		}
	}

	/// A parameter that binds to `ParamValue::Null` when absent
	pub fn optional(name: impl Into<String>, ty: ParamType) -> Self {
		Self::required(name, ty).with_default(ParamValue::Null)
	}

	/// A parameter registered by type name
	///
	/// Names that match no supported type are accepted here; binding fails for
	/// them on every request.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{DeclaredType, ParamDescriptor, ParamType};
	///
	/// let known = ParamDescriptor::named("test", "int");
	/// assert_eq!(known.declared_type(), &DeclaredType::Builtin(ParamType::Int));
	///
	/// let unknown = ParamDescriptor::named("ratio", "float");
	/// assert_eq!(unknown.declared_type().param_type(), None);
	/// ```
	pub fn named(name: impl Into<String>, type_name: &str) -> Self {
		Self {
			name: name.into(),
			ty: DeclaredType::from_name(type_name),
			default: None,
		}
	}

	/// Descriptor for a Rust parameter type
	///
	/// `Option<T>` parameters default to `None`.
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{ParamDescriptor, ParamType, ParamValue};
	///
	/// let count = ParamDescriptor::for_type::<i64>("count");
	/// assert!(count.is_required());
	///
	/// let tags = ParamDescriptor::for_type::<Option<Vec<String>>>("tags");
	/// assert_eq!(tags.declared_type().param_type(), Some(ParamType::StrList));
	/// assert_eq!(tags.default(), Some(&ParamValue::Null));
	/// ```
	pub fn for_type<T: FromParamValue>(name: impl Into<String>) -> Self {
		let descriptor = Self::required(name, T::PARAM_TYPE);
		if T::NULLABLE {
			descriptor.with_default(ParamValue::Null)
		} else {
			descriptor
		}
	}

	/// Value to bind when the parameter is absent from the request
	pub fn with_default(mut self, value: impl Into<ParamValue>) -> Self {
		self.default = Some(value.into());
		self
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn declared_type(&self) -> &DeclaredType {
		&self.ty
	}

	pub fn default(&self) -> Option<&ParamValue> {
		self.default.as_ref()
	}

	pub fn is_required(&self) -> bool {
		self.default.is_none()
	}
}

/// The parameter list of a handler
///
/// The leading request argument is not a descriptor; only its name is kept
/// so a declared parameter of the same name is recognised and skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
	request_arg: String,
	params: Vec<ParamDescriptor>,
}

impl Signature {
	/// Empty signature whose request argument is named `request_arg`
	pub fn new(request_arg: impl Into<String>) -> Self {
		Self {
			request_arg: request_arg.into(),
			params: Vec::new(),
		}
	}

	/// Append a parameter, keeping declaration order
	///
	/// # Examples
	///
	/// ```
	/// use argbind_params::{ParamDescriptor, ParamType, Signature};
	///
	/// let signature = Signature::new("request")
	/// 	.param(ParamDescriptor::required("path_param", ParamType::Int))
	/// 	.param(ParamDescriptor::required("test", ParamType::Str))
	/// 	.param(ParamDescriptor::required("test_2", ParamType::Int).with_default(35i64));
	///
	/// let names: Vec<_> = signature.params().iter().map(|p| p.name()).collect();
	/// assert_eq!(names, ["path_param", "test", "test_2"]);
	/// ```
	pub fn param(mut self, descriptor: ParamDescriptor) -> Self {
		self.params.push(descriptor);
		self
	}

	pub fn request_arg(&self) -> &str {
		&self.request_arg
	}

	pub fn params(&self) -> &[ParamDescriptor] {
		&self.params
	}

	pub fn get(&self, name: &str) -> Option<&ParamDescriptor> {
		self.params.iter().find(|p| p.name() == name)
	}

	pub fn len(&self) -> usize {
		self.params.len()
	}

	pub fn is_empty(&self) -> bool {
		self.params.is_empty()
	}
}

impl Default for Signature {
	fn default() -> Self {
		Self::new("request")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_required_has_no_default() {
		let descriptor = ParamDescriptor::required("test", ParamType::Int);
		assert!(descriptor.is_required());
		assert_eq!(descriptor.default(), None);
	}

	#[rstest]
	fn test_optional_defaults_to_null() {
		let descriptor = ParamDescriptor::optional("e", ParamType::StrList);
		assert!(!descriptor.is_required());
		assert_eq!(descriptor.default(), Some(&ParamValue::Null));
	}

	#[rstest]
	fn test_explicit_default_on_option_type_wins() {
		let descriptor =
			ParamDescriptor::for_type::<Option<String>>("test").with_default("helloworld");
		assert_eq!(
			descriptor.default(),
			Some(&ParamValue::Str("helloworld".to_string()))
		);
	}

	#[rstest]
	fn test_lookup_by_name() {
		let signature = Signature::default()
			.param(ParamDescriptor::required("a", ParamType::Int))
			.param(ParamDescriptor::required("b", ParamType::Str));

		assert_eq!(signature.request_arg(), "request");
		assert_eq!(signature.len(), 2);
		assert_eq!(
			signature.get("b").map(|p| p.declared_type().clone()),
			Some(DeclaredType::Builtin(ParamType::Str))
		);
		assert!(signature.get("c").is_none());
	}
}
