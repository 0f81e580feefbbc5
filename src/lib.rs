//! # argbind
//!
//! Typed parameter binding for async web request handlers.
//!
//! A handler declares the parameters it needs as ordinary function
//! parameters. argbind reads them from the request, converts each one to its
//! declared type, and calls the handler with typed arguments. A value that is
//! missing or does not convert answers `400 Bad Request` with
//! `Bad or missing value for <name>`; the handler is not called.
//!
//! - read methods (`GET` by default) bind from the query string;
//! - every other method binds from the JSON object body;
//! - path values extracted by the router win over both;
//! - absent parameters fall back to their default, or fail.
//!
//! ## Crates
//!
//! - [`http`]: the request, response and handler types at the host boundary
//! - [`params`]: descriptors, deserializers and the binder
//! - [`parse_parameters`] / [`parse_query_args`]: attribute macros that derive
//!   the descriptors from a function signature
//!
//! ## Quick Example
//!
//! ```rust
//! use argbind::prelude::*;
//! use chrono::NaiveDate;
//!
//! #[parse_parameters]
//! async fn birthdate(
//! 	request: Request,
//! 	name: String,
//! 	birthdate: NaiveDate,
//! 	#[param(default = false)] shout: bool,
//! ) -> Result<Response> {
//! 	let greeting = format!("Hello {}, you were born on {}", name, birthdate);
//! 	let greeting = if shout { greeting.to_uppercase() } else { greeting };
//! 	Response::json(&serde_json::json!({ "greeting": greeting }))
//! }
//!
//! # tokio_test::block_on(async {
//! let request = Request::builder()
//! 	.uri("/birthdate?name=ada&birthdate=1815-12-10")
//! 	.build()
//! 	.unwrap();
//! let response = BirthdateHandler.handle(request).await.unwrap();
//! assert_eq!(response.status, StatusCode::OK);
//!
//! let request = Request::builder().uri("/birthdate?name=ada").build().unwrap();
//! let error = BirthdateHandler.handle(request).await.unwrap_err();
//! assert_eq!(error.to_string(), "Bad or missing value for birthdate");
//! # });
//! ```

extern crate self as argbind;

pub use argbind_macros::{parse_parameters, parse_query_args};

/// Host boundary types
pub mod http {
	pub use argbind_http::*;
}

/// Parameter binding
pub mod params {
	pub use argbind_params::*;
}

#[doc(hidden)]
pub mod __private {
	pub use async_trait::async_trait;
}

pub mod prelude {
	pub use crate::http::{
		Error, Handler, Method, Request, RequestBuilder, Response, Result, StatusCode,
	};
	pub use crate::params::{
		BinderConfig, BindingMode, BoundArgs, ParamDescriptor, ParamType, ParamValue,
		ParameterBinder, Signature,
	};
	pub use crate::{parse_parameters, parse_query_args};

	// External
	pub use async_trait::async_trait;
}
