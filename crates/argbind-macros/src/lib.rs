//! Attribute macros for argbind
//!
//! Use them through the `argbind` crate, which re-exports both.

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod crate_paths;
mod parse_fn;

use parse_fn::BindingSource;

/// Bind a handler function's parameters from the query string (read
/// methods) or the JSON body (everything else)
///
/// Generates `<CamelCaseName>Handler`, a unit struct implementing `Handler`.
/// The function itself is left unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use argbind::prelude::*;
///
/// #[parse_parameters]
/// async fn with_path_params(
/// 	request: Request,
/// 	path_param: i64,
/// 	test: String,
/// 	#[param(default = 35)] test_2: i64,
/// ) -> Result<Response> {
/// 	Response::json(&serde_json::json!({"path_param": path_param, "test": test, "test_2": test_2}))
/// }
///
/// let handler = WithPathParamsHandler;
/// ```
///
/// A parameter whose type is not supported fails to compile.
#[proc_macro_attribute]
pub fn parse_parameters(attr: TokenStream, item: TokenStream) -> TokenStream {
	let input = parse_macro_input!(item as syn::ItemFn);

	parse_fn::parse_fn_impl(attr.into(), input, BindingSource::MethodBased)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}

/// Like [`macro@parse_parameters`], but always reads the query string
#[proc_macro_attribute]
pub fn parse_query_args(attr: TokenStream, item: TokenStream) -> TokenStream {
	let input = parse_macro_input!(item as syn::ItemFn);

	parse_fn::parse_fn_impl(attr.into(), input, BindingSource::QueryOnly)
		.unwrap_or_else(|err| err.to_compile_error())
		.into()
}
