//! # argbind params
//!
//! Typed parameter binding for request handlers.
//!
//! A handler declares its parameters once, as a [`Signature`]: a name, a type
//! from a fixed set ([`ParamType`]) and an optional default for each. For
//! every request the [`ParameterBinder`]:
//!
//! 1. picks the raw value source from the HTTP method: the query string for
//!    read methods (`GET` by default), the JSON body otherwise;
//! 2. resolves each parameter from the path values, then the source, then
//!    its default;
//! 3. converts the raw value with the deserializer registered for its type;
//! 4. on the first failure logs one warning and answers `400 Bad Request`
//!    with `Bad or missing value for <name>`;
//! 5. otherwise calls the handler with the request and the [`BoundArgs`].
//!
//! ## Supported types
//!
//! | [`ParamType`] | Rust type | accepted raw input |
//! |---------------|-----------|--------------------|
//! | `Bool` | `bool` | `"true"`/`"false"` in any case, JSON booleans |
//! | `Int` | `i64` | integer strings, JSON integers |
//! | `Str` | `String` | anything textual, unvalidated |
//! | `Date` | `NaiveDate` | ISO-8601 date or date-time (truncated) |
//! | `DateTime` | `NaiveDateTime` | ISO-8601 date-time or date (midnight), zone dropped |
//! | `StrList` | `Vec<String>` | JSON array of strings, or a comma separated string |
//!
//! `Option<T>` of any of these defaults to `None` when absent.
//!
//! ## Example
//!
//! ```rust
//! use argbind_http::{Handler, Method, Request, Response};
//! use argbind_params::{BoundArgs, ParamDescriptor, ParamType, Signature, parse_parameters};
//!
//! # tokio_test::block_on(async {
//! let handler = parse_parameters(
//! 	Signature::new("request")
//! 		.param(ParamDescriptor::required("path_param", ParamType::Int))
//! 		.param(ParamDescriptor::required("test", ParamType::Str))
//! 		.param(ParamDescriptor::required("test_2", ParamType::Int).with_default(35i64)),
//! 	|_request: Request, args: BoundArgs| async move { Response::json(&args.to_json()) },
//! );
//!
//! let request = Request::builder()
//! 	.method(Method::GET)
//! 	.uri("/with/123/path_params?test=hello")
//! 	.path_param("path_param", "123")
//! 	.build()
//! 	.unwrap();
//!
//! let response = handler.handle(request).await.unwrap();
//! let body: serde_json::Value = response.json_body().unwrap();
//! assert_eq!(body, serde_json::json!({"path_param": 123, "test": "hello", "test_2": 35}));
//! # });
//! ```

pub mod binder;
pub mod config;
pub mod descriptor;
pub mod deserializers;
pub mod error;
pub mod handler;
pub mod source;
pub mod temporal;
pub mod types;
pub mod value;

pub use binder::{BoundArgs, ParameterBinder};
pub use config::{BinderConfig, BindingMode, ConfigError};
pub use descriptor::{ParamDescriptor, Signature};
pub use deserializers::{DeserializeFn, Deserializers};
pub use error::{BindError, ConversionError, ParamError, ParamResult};
pub use handler::{ParsedHandler, parse_parameters, parse_query_args, parse_with};
pub use source::{RawSource, SourceKind};
pub use types::{DeclaredType, ParamType, UnsupportedType};
pub use value::{FromParamValue, ParamValue};
