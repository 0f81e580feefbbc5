//! # argbind HTTP
//!
//! The host boundary of argbind: the request a router hands to a wrapped
//! handler, the response it gets back, and the error type that turns a
//! failed binding into `400 Bad Request`.
//!
//! The server and the router stay outside of this crate. A router is expected
//! to build a [`Request`], record the values it extracted from the URL path
//! with [`Request::set_path_param`] and call [`Handler::handle`].
//!
//! ```rust
//! use argbind_http::{Handler, Request, Response, Result};
//! use async_trait::async_trait;
//!
//! struct Hello;
//!
//! #[async_trait]
//! impl Handler for Hello {
//! 	async fn handle(&self, _request: Request) -> Result<Response> {
//! 		Ok(Response::ok().with_body("Hello!"))
//! 	}
//! }
//! ```

pub mod error;
pub mod handler;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use handler::Handler;
pub use request::{QueryParams, Request, RequestBuilder};
pub use response::Response;

// Re-exported so downstream crates name the same HTTP types.
pub use bytes::Bytes;
pub use hyper::{HeaderMap, Method, StatusCode, Uri, Version};
