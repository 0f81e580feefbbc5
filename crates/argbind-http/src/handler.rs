//! Handler trait for HTTP request processing.
//!
//! Every route the host registers resolves to a `Handler`. Wrapped handlers
//! produced by `argbind-params` implement it too, so they can be registered
//! wherever a plain handler is accepted.

use async_trait::async_trait;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Handler trait for processing requests.
///
/// Handlers receive a request and produce a response or an error.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

/// Blanket implementation for `Arc<T>` where T: Handler.
///
/// This allows `Arc<dyn Handler>` to be used as a Handler.
#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Blanket implementation for boxed handlers
#[async_trait]
impl<T: Handler + ?Sized> Handler for Box<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}
