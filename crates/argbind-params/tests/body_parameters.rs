//! Binding from JSON bodies on non-read methods

use argbind_http::{Handler, Method, Request, Response};
use argbind_params::temporal::{format_date, format_datetime};
use argbind_params::{
	BinderConfig, BoundArgs, ParamDescriptor, ParamType, ParameterBinder, Signature,
	parse_parameters, parse_with,
};
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;
use serde_json::{Value, json};

fn single(ty: ParamType) -> impl Handler {
	parse_parameters(
		Signature::new("request").param(ParamDescriptor::required("test", ty)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	)
}

fn post(body: Value) -> Request {
	Request::builder()
		.method(Method::POST)
		.uri("/")
		.body(body.to_string())
		.build()
		.unwrap()
}

fn post_raw(body: &'static str) -> Request {
	Request::builder()
		.method(Method::POST)
		.uri("/")
		.body(body)
		.build()
		.unwrap()
}

async fn call(handler: &impl Handler, request: Request) -> (u16, Option<Value>) {
	match handler.handle(request).await {
		Ok(response) => (response.status.as_u16(), response.json_body().ok()),
		Err(error) => (error.status_code(), None),
	}
}

#[rstest]
#[case(json!({"test": 10}), 200, Some(json!({"test": 10})))]
#[case(json!({"test": "10"}), 200, Some(json!({"test": 10})))]
#[case(json!({"test": "not an integer"}), 400, None)]
#[case(json!({"test": 10.5}), 400, None)]
#[case(json!({"test": true}), 400, None)]
#[case(json!({"test": null}), 400, None)]
#[tokio::test]
async fn test_parse_int(#[case] body: Value, #[case] status: u16, #[case] expected: Option<Value>) {
	assert_eq!(call(&single(ParamType::Int), post(body)).await, (status, expected));
}

#[rstest]
#[case(json!({"test": true}), 200, Some(json!({"test": true})))]
#[case(json!({"test": false}), 200, Some(json!({"test": false})))]
#[case(json!({"test": "True"}), 200, Some(json!({"test": true})))]
#[case(json!({"test": "not an bool"}), 400, None)]
#[case(json!({"test": 1}), 400, None)]
#[tokio::test]
async fn test_parse_bool(#[case] body: Value, #[case] status: u16, #[case] expected: Option<Value>) {
	assert_eq!(call(&single(ParamType::Bool), post(body)).await, (status, expected));
}

#[rstest]
#[case(json!({"test": "hello"}), 200, Some(json!({"test": "hello"})))]
#[case(json!({"test": "400"}), 200, Some(json!({"test": "400"})))]
#[case(json!({"test": 400}), 200, Some(json!({"test": "400"})))]
#[case(json!({"test": ["a"]}), 400, None)]
#[case(json!({"test": {"a": 1}}), 400, None)]
#[tokio::test]
async fn test_parse_str(#[case] body: Value, #[case] status: u16, #[case] expected: Option<Value>) {
	assert_eq!(call(&single(ParamType::Str), post(body)).await, (status, expected));
}

#[rstest]
#[case(json!({"test": "2017-10-10T10:10:10"}), 200, Some(json!({"test": "2017-10-10T10:10:10"})))]
#[case(json!({"test": "2017-10-10T10:10:10.5Z"}), 200, Some(json!({"test": "2017-10-10T10:10:10.500"})))]
#[case(json!({"test": "not a datetime"}), 400, None)]
#[case(json!({"test": 1507630210}), 400, None)]
#[tokio::test]
async fn test_parse_datetime(
	#[case] body: Value,
	#[case] status: u16,
	#[case] expected: Option<Value>,
) {
	let handler = parse_parameters(
		Signature::new("request").param(ParamDescriptor::required("test", ParamType::DateTime)),
		|_request, mut args: BoundArgs| async move {
			let test: NaiveDateTime = args.take("test")?;
			Response::json(&json!({ "test": format_datetime(&test) }))
		},
	);
	assert_eq!(call(&handler, post(body)).await, (status, expected));
}

#[rstest]
#[case(json!({"test": "2017-10-19"}), 200, Some(json!({"test": "2017-10-19"})))]
#[case(json!({"test": "not a datetime"}), 400, None)]
#[tokio::test]
async fn test_parse_date(#[case] body: Value, #[case] status: u16, #[case] expected: Option<Value>) {
	let handler = parse_parameters(
		Signature::new("request").param(ParamDescriptor::required("test", ParamType::Date)),
		|_request, mut args: BoundArgs| async move {
			let test: NaiveDate = args.take("test")?;
			Response::json(&json!({ "test": format_date(&test) }))
		},
	);
	assert_eq!(call(&handler, post(body)).await, (status, expected));
}

#[rstest]
#[case(json!({"test": "one,two,three"}), 200, Some(json!({"test": ["one", "two", "three"]})))]
#[case(json!({"test": ["one", "two", "three"]}), 200, Some(json!({"test": ["one", "two", "three"]})))]
#[case(json!({"test": "not a datetime"}), 200, Some(json!({"test": ["not a datetime"]})))]
#[case(json!({"test": ["not a datetime"]}), 200, Some(json!({"test": ["not a datetime"]})))]
#[case(json!({"test": []}), 200, Some(json!({"test": []})))]
#[case(json!({}), 200, Some(json!({"test": null})))]
#[case(json!({"test": [1, 2]}), 400, None)]
#[tokio::test]
async fn test_parse_list(#[case] body: Value, #[case] status: u16, #[case] expected: Option<Value>) {
	let handler = parse_parameters(
		Signature::new("req").param(ParamDescriptor::optional("test", ParamType::StrList)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	assert_eq!(call(&handler, post(body)).await, (status, expected));
}

#[tokio::test]
async fn test_all_at_once() {
	let handler = parse_parameters(
		Signature::new("req")
			.param(ParamDescriptor::required("a", ParamType::Int))
			.param(ParamDescriptor::required("b", ParamType::Str))
			.param(ParamDescriptor::required("c", ParamType::DateTime))
			.param(ParamDescriptor::required("d", ParamType::Date))
			.param(ParamDescriptor::optional("e", ParamType::StrList)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);

	let response = call(
		&handler,
		post(json!({
			"a": 10,
			"b": "test",
			"c": "2017-10-10T10:10:10",
			"d": "2017-10-10",
			"e": ["a", "b", "c", "d", "e"],
		})),
	)
	.await;

	assert_eq!(
		response,
		(
			200,
			Some(json!({
				"a": 10,
				"b": "test",
				"c": "2017-10-10T10:10:10",
				"d": "2017-10-10",
				"e": ["a", "b", "c", "d", "e"],
			}))
		)
	);
}

#[rstest]
#[case(json!({}), json!({"test": "helloworld"}))]
#[case(json!({"test": "given"}), json!({"test": "given"}))]
#[tokio::test]
async fn test_optional(#[case] body: Value, #[case] expected: Value) {
	let handler = parse_parameters(
		Signature::new("request")
			.param(ParamDescriptor::required("test", ParamType::Str).with_default("helloworld")),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	assert_eq!(call(&handler, post(body)).await, (200, Some(expected)));
}

#[tokio::test]
async fn test_empty_body_uses_defaults() {
	let handler = parse_parameters(
		Signature::new("request")
			.param(ParamDescriptor::required("test", ParamType::Str).with_default("helloworld")),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	assert_eq!(
		call(&handler, post_raw("")).await,
		(200, Some(json!({"test": "helloworld"})))
	);
}

#[tokio::test]
async fn test_mandatory() {
	let error = single(ParamType::Str)
		.handle(post(json!({})))
		.await
		.unwrap_err();
	assert_eq!(error.status_code(), 400);
	assert_eq!(error.to_string(), "Bad or missing value for test");
}

#[rstest]
#[case(r#"{"test": "#)]
#[case("not json")]
#[case("[1, 2]")]
#[case("10")]
#[tokio::test]
async fn test_unusable_body_is_rejected(#[case] body: &'static str) {
	let error = single(ParamType::Str).handle(post_raw(body)).await.unwrap_err();
	assert_eq!(error.status_code(), 400);
	assert_eq!(error.to_string(), "Bad or missing value for request body");
}

#[tokio::test]
async fn test_unusable_body_without_parameters_is_still_rejected() {
	let handler = parse_parameters(Signature::new("request"), |_request, _args| async {
		Ok(Response::ok())
	});
	let error = handler.handle(post_raw("not json")).await.unwrap_err();
	assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_query_is_ignored_for_post() {
	let request = Request::builder()
		.method(Method::POST)
		.uri("/int?test=10")
		.body("{}")
		.build()
		.unwrap();

	let error = single(ParamType::Int).handle(request).await.unwrap_err();
	assert_eq!(error.status_code(), 400);
}

#[tokio::test]
async fn test_with_path_params() {
	let handler = parse_parameters(
		Signature::new("request")
			.param(ParamDescriptor::required("path_param", ParamType::Int))
			.param(ParamDescriptor::required("test", ParamType::Str))
			.param(ParamDescriptor::required("test_2", ParamType::Int).with_default(35i64)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	let request = Request::builder()
		.method(Method::POST)
		.uri("/with/123/path_params")
		.path_param("path_param", "123")
		.body(r#"{"test": "hello", "path_param": 5}"#)
		.build()
		.unwrap();

	assert_eq!(
		call(&handler, request).await,
		(200, Some(json!({"path_param": 123, "test": "hello", "test_2": 35})))
	);
}

#[tokio::test]
async fn test_request_argument_name_is_never_bound() {
	let handler = parse_parameters(
		Signature::new("request")
			.param(ParamDescriptor::required("request", ParamType::Int))
			.param(ParamDescriptor::required("test", ParamType::Int)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);

	assert_eq!(
		call(&handler, post(json!({"test": 1}))).await,
		(200, Some(json!({"test": 1})))
	);
}

#[rstest]
#[case(Method::PUT)]
#[case(Method::PATCH)]
#[case(Method::DELETE)]
#[tokio::test]
async fn test_other_methods_read_the_body(#[case] method: Method) {
	let request = Request::builder()
		.method(method)
		.uri("/int?test=1")
		.body(r#"{"test": 10}"#)
		.build()
		.unwrap();

	assert_eq!(
		call(&single(ParamType::Int), request).await,
		(200, Some(json!({"test": 10})))
	);
}

#[tokio::test]
async fn test_configured_read_methods() {
	let config = BinderConfig::from_toml_str(r#"read_methods = ["GET", "DELETE"]"#).unwrap();
	let handler = parse_with(
		ParameterBinder::new(
			Signature::new("request").param(ParamDescriptor::required("test", ParamType::Int)),
		)
		.with_config(config),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	let request = Request::builder()
		.method(Method::DELETE)
		.uri("/int?test=7")
		.build()
		.unwrap();

	assert_eq!(call(&handler, request).await, (200, Some(json!({"test": 7}))));
}

/// Outer wrapper that forwards to an already wrapped handler
struct RequireTestArg<H> {
	inner: H,
}

#[async_trait]
impl<H: Handler> Handler for RequireTestArg<H> {
	async fn handle(&self, request: Request) -> argbind_http::Result<Response> {
		self.inner.handle(request).await
	}
}

#[tokio::test]
async fn test_outer_wrapper_sees_declared_parameters() {
	let inner = parse_parameters(
		Signature::new("request").param(ParamDescriptor::required("test", ParamType::Int)),
		|_request, args: BoundArgs| async move { Response::json(&args.to_json()) },
	);
	assert!(inner.binder().signature().get("test").is_some());

	let handler = RequireTestArg { inner };
	assert_eq!(
		call(&handler, post(json!({"test": 10}))).await,
		(200, Some(json!({"test": 10})))
	);
}
