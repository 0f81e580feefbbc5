//! Helper functions for dynamic crate path resolution using proc_macro_crate

use proc_macro2::TokenStream;
use quote::quote;

/// Resolves the path to the argbind facade crate dynamically.
///
/// Supports renamed dependencies. Inside the facade itself `::argbind` is
/// used, which the facade declares with `extern crate self as argbind`.
pub(crate) fn get_argbind_crate() -> syn::Result<TokenStream> {
	use proc_macro_crate::{FoundCrate, crate_name};

	match crate_name("argbind") {
		Ok(FoundCrate::Itself) => Ok(quote!(::argbind)),
		Ok(FoundCrate::Name(name)) => {
			let ident = syn::Ident::new(&name, proc_macro2::Span::call_site());
			Ok(quote!(::#ident))
		}
		Err(e) => Err(syn::Error::new(
			proc_macro2::Span::call_site(),
			format!(
				"failed to resolve `argbind` crate: {}. Ensure it is listed in Cargo.toml dependencies.",
				e
			),
		)),
	}
}
