use argbind::prelude::*;

#[parse_parameters]
async fn search(
	_request: Request,
	#[param(default = "x")] term: Option<String>,
	#[param(default = "relevance")] sort: ::std::string::String,
	#[param(default = None)] cursor: Option<String>,
) -> Result<Response> {
	let _ = (term, sort, cursor);
	Ok(Response::ok())
}

fn main() {
	let signature = SearchHandler::signature();
	assert_eq!(
		signature.get("term").and_then(|p| p.default()),
		Some(&ParamValue::Str("x".to_string()))
	);
	assert_eq!(
		signature.get("cursor").and_then(|p| p.default()),
		Some(&ParamValue::Null)
	);
}
