//! Wrapping handler functions with parameter binding

use argbind_http::{Handler, Request, Response, Result};
use async_trait::async_trait;
use std::future::Future;

use crate::binder::{BoundArgs, ParameterBinder};
use crate::config::BinderConfig;
use crate::descriptor::Signature;

/// A handler function whose declared parameters are bound before each call
///
/// Binding failures never reach the function: they are answered with
/// `400 Bad Request`. Whatever the function returns, success or error, is
/// passed through unchanged.
pub struct ParsedHandler<F> {
	binder: ParameterBinder,
	func: F,
}

impl<F> ParsedHandler<F> {
	pub fn new(binder: ParameterBinder, func: F) -> Self {
		Self { binder, func }
	}

	pub fn binder(&self) -> &ParameterBinder {
		&self.binder
	}
}

#[async_trait]
impl<F, Fut> Handler for ParsedHandler<F>
where
	F: Fn(Request, BoundArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	async fn handle(&self, request: Request) -> Result<Response> {
		let args = self.binder.bind_or_reject(&request)?;
		(self.func)(request, args).await
	}
}

/// Wrap `func` so its parameters are read from the query string (read
/// methods) or the JSON body (everything else)
///
/// # Examples
///
/// ```
/// use argbind_http::{Handler, Method, Request, Response};
/// use argbind_params::{BoundArgs, ParamDescriptor, ParamType, Signature, parse_parameters};
///
/// # tokio_test::block_on(async {
/// let handler = parse_parameters(
/// 	Signature::new("request").param(ParamDescriptor::required("test", ParamType::Int)),
/// 	|_request: Request, mut args: BoundArgs| async move {
/// 		let test: i64 = args.take("test")?;
/// 		Response::json(&serde_json::json!({ "test": test }))
/// 	},
/// );
///
/// let request = Request::builder().method(Method::GET).uri("/int?test=10").build().unwrap();
/// let response = handler.handle(request).await.unwrap();
/// assert_eq!(response.body, r#"{"test":10}"#);
///
/// let request = Request::builder().method(Method::GET).uri("/int?test=ten").build().unwrap();
/// let error = handler.handle(request).await.unwrap_err();
/// assert_eq!(error.status_code(), 400);
/// # });
/// ```
pub fn parse_parameters<F, Fut>(signature: Signature, func: F) -> ParsedHandler<F>
where
	F: Fn(Request, BoundArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	ParsedHandler::new(ParameterBinder::new(signature), func)
}

/// Wrap `func` so its parameters are always read from the query string
pub fn parse_query_args<F, Fut>(signature: Signature, func: F) -> ParsedHandler<F>
where
	F: Fn(Request, BoundArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	ParsedHandler::new(
		ParameterBinder::new(signature).with_config(BinderConfig::query_only()),
		func,
	)
}

/// Wrap `func` with a fully configured binder
pub fn parse_with<F, Fut>(binder: ParameterBinder, func: F) -> ParsedHandler<F>
where
	F: Fn(Request, BoundArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	ParsedHandler::new(binder, func)
}
