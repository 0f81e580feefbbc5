//! Handler function macros
//!
//! `#[parse_parameters]` and `#[parse_query_args]` read the parameter list of
//! a handler function once, at compile time, and generate a unit struct
//! implementing `Handler` that binds those parameters from each request
//! before calling the function.
//!
//! The first parameter receives the request. Every following parameter is a
//! declared parameter: its name is the lookup key, its type selects the
//! deserializer and `#[param(default = expr)]` gives a default. `Option<T>`
//! parameters default to `None`.

use crate::crate_paths::get_argbind_crate;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{
	Attribute, Expr, ExprLit, FnArg, GenericArgument, Ident, ItemFn, Lit, Pat, PatType,
	PathArguments, Result, Type,
};

/// Where the generated handler reads parameters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BindingSource {
	/// Query string for read methods, JSON body otherwise
	MethodBased,
	/// Always the query string
	QueryOnly,
}

impl BindingSource {
	fn attribute(&self) -> &'static str {
		match self {
			BindingSource::MethodBased => "#[parse_parameters]",
			BindingSource::QueryOnly => "#[parse_query_args]",
		}
	}
}

/// A declared parameter of the handler function
struct ParamInfo {
	name: Ident,
	ty: Type,
	default: Option<Expr>,
}

fn is_param_attr(attr: &Attribute) -> bool {
	attr.path().is_ident("param")
}

/// Reads `#[param(default = expr)]`
fn parse_param_default(attrs: &[Attribute]) -> Result<Option<Expr>> {
	let mut default = None;
	for attr in attrs.iter().filter(|attr| is_param_attr(attr)) {
		attr.parse_nested_meta(|meta| {
			if meta.path.is_ident("default") {
				default = Some(meta.value()?.parse::<Expr>()?);
				Ok(())
			} else {
				Err(meta.error("unsupported #[param] option, expected `default = <expr>`"))
			}
		})?;
	}
	Ok(default)
}

/// `get_user_profile` becomes `GetUserProfileHandler`
pub(crate) fn handler_name(fn_name: &Ident) -> Ident {
	let camel: String = fn_name
		.unraw()
		.to_string()
		.split('_')
		.filter(|part| !part.is_empty())
		.map(|part| {
			let mut chars = part.chars();
			match chars.next() {
				Some(first) => first.to_uppercase().chain(chars).collect(),
				None => String::new(),
			}
		})
		.collect();
	Ident::new(&format!("{}Handler", camel), fn_name.span())
}

/// Last path segment of a type, e.g. `String` for `::std::string::String`
fn last_segment(ty: &Type) -> Option<&syn::PathSegment> {
	match ty {
		Type::Path(type_path) if type_path.qself.is_none() => type_path.path.segments.last(),
		_ => None,
	}
}

fn is_string(ty: &Type) -> bool {
	last_segment(ty).is_some_and(|segment| {
		segment.ident == "String" && matches!(segment.arguments, PathArguments::None)
	})
}

/// `T` of an `Option<T>`
fn option_inner(ty: &Type) -> Option<&Type> {
	let segment = last_segment(ty)?;
	if segment.ident != "Option" {
		return None;
	}
	match &segment.arguments {
		PathArguments::AngleBracketed(args) if args.args.len() == 1 => match args.args.first() {
			Some(GenericArgument::Type(inner)) => Some(inner),
			_ => None,
		},
		_ => None,
	}
}

/// Default value expression typed as the parameter
///
/// String literals are accepted for `String` and `Option<String>` parameters.
fn default_value(ty: &Type, expr: &Expr) -> TokenStream {
	let is_str_lit = matches!(
		expr,
		Expr::Lit(ExprLit {
			lit: Lit::Str(_),
			..
		})
	);
	let value = if is_str_lit && is_string(ty) {
		quote! { ::std::string::String::from(#expr) }
	} else if is_str_lit && option_inner(ty).is_some_and(is_string) {
		quote! { ::std::option::Option::Some(::std::string::String::from(#expr)) }
	} else {
		quote! { #expr }
	};

	quote! {
		{
			let __default: #ty = #value;
			__default
		}
	}
}

fn request_arg_name(arg: &FnArg, source: BindingSource) -> Result<String> {
	match arg {
		FnArg::Typed(PatType { pat, .. }) => match &**pat {
			Pat::Ident(pat_ident) => Ok(pat_ident.ident.unraw().to_string()),
			Pat::Wild(_) => Ok("request".to_string()),
			other => Err(syn::Error::new_spanned(
				other,
				format!(
					"{} request parameter must be a simple identifier",
					source.attribute()
				),
			)),
		},
		FnArg::Receiver(receiver) => Err(syn::Error::new_spanned(
			receiver,
			format!("{} cannot be used on methods", source.attribute()),
		)),
	}
}

fn collect_params<'a>(
	args: impl Iterator<Item = &'a FnArg>,
	source: BindingSource,
) -> Result<Vec<ParamInfo>> {
	let mut params = Vec::new();
	for arg in args {
		let FnArg::Typed(PatType { attrs, pat, ty, .. }) = arg else {
			continue;
		};

		let name = match &**pat {
			Pat::Ident(pat_ident) => pat_ident.ident.clone(),
			other => {
				return Err(syn::Error::new_spanned(
					other,
					format!("{} parameters must be simple identifiers", source.attribute()),
				));
			}
		};

		params.push(ParamInfo {
			name,
			ty: (**ty).clone(),
			default: parse_param_default(attrs)?,
		});
	}
	Ok(params)
}

/// Implementation of the `#[parse_parameters]` and `#[parse_query_args]`
/// attribute macros
pub(crate) fn parse_fn_impl(
	args: TokenStream,
	input: ItemFn,
	source: BindingSource,
) -> Result<TokenStream> {
	if !args.is_empty() {
		return Err(syn::Error::new_spanned(
			args,
			format!("{} takes no arguments", source.attribute()),
		));
	}

	if !input.sig.generics.params.is_empty() {
		return Err(syn::Error::new_spanned(
			&input.sig.generics,
			format!("{} functions cannot be generic", source.attribute()),
		));
	}

	let mut inputs = input.sig.inputs.iter();
	let request_name = match inputs.next() {
		Some(arg) => request_arg_name(arg, source)?,
		None => {
			return Err(syn::Error::new_spanned(
				&input.sig,
				format!(
					"{} function must take the request as its first parameter",
					source.attribute()
				),
			));
		}
	};
	let params = collect_params(inputs, source)?;

	let krate = get_argbind_crate()?;
	let fn_name = &input.sig.ident;
	let vis = &input.vis;
	let handler_ident = handler_name(fn_name);
	let is_async = input.sig.asyncness.is_some();

	// Keep the function callable, minus the #[param] markers
	let mut plain_fn = input.clone();
	for arg in plain_fn.sig.inputs.iter_mut() {
		if let FnArg::Typed(pat_type) = arg {
			pat_type.attrs.retain(|attr| !is_param_attr(attr));
		}
	}

	let descriptors: Vec<_> = params
		.iter()
		.map(|param| {
			let name = param.name.unraw().to_string();
			let ty = &param.ty;
			let descriptor = quote! {
				#krate::params::ParamDescriptor::for_type::<#ty>(#name)
			};
			match &param.default {
				Some(expr) => {
					let value = default_value(ty, expr);
					quote! { .param(#descriptor.with_default(#value)) }
				}
				None => quote! { .param(#descriptor) },
			}
		})
		.collect();

	let configure = match source {
		BindingSource::MethodBased => quote!(),
		BindingSource::QueryOnly => {
			quote! { .with_config(#krate::params::BinderConfig::query_only()) }
		}
	};

	// Prefixed locals so a parameter named like the function cannot shadow it
	let call_args: Vec<_> = params
		.iter()
		.map(|param| format_ident!("__param_{}", param.name.unraw()))
		.collect();

	let takes: Vec<_> = params
		.iter()
		.zip(&call_args)
		.map(|(param, local)| {
			let name = param.name.unraw().to_string();
			let ty = &param.ty;
			quote! { let #local: #ty = __args.take::<#ty>(#name)?; }
		})
		.collect();

	let fn_call = if is_async {
		quote! { #fn_name(__request, #(#call_args),*).await }
	} else {
		quote! { #fn_name(__request, #(#call_args),*) }
	};

	let doc = format!("Handler binding the parameters of [`{}`].", fn_name.unraw());

	Ok(quote! {
		#plain_fn

		#[doc = #doc]
		#[derive(Debug, Clone, Copy, Default)]
		#vis struct #handler_ident;

		impl #handler_ident {
			/// Parameters declared by the wrapped function
			pub fn signature() -> #krate::params::Signature {
				#krate::params::Signature::new(#request_name)
					#(#descriptors)*
			}

			/// Binder shared by every invocation
			pub fn binder() -> &'static #krate::params::ParameterBinder {
				static BINDER: ::std::sync::OnceLock<#krate::params::ParameterBinder> =
					::std::sync::OnceLock::new();
				BINDER.get_or_init(|| {
					#krate::params::ParameterBinder::new(Self::signature())
						#configure
				})
			}
		}

		#[#krate::__private::async_trait]
		impl #krate::http::Handler for #handler_ident {
			async fn handle(
				&self,
				__request: #krate::http::Request,
			) -> #krate::http::Result<#krate::http::Response> {
				#[allow(unused_mut)]
				let mut __args = Self::binder().bind_or_reject(&__request)?;
				#(#takes)*
				#fn_call
			}
		}
	})
}
