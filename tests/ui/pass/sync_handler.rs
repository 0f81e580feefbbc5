use argbind::prelude::*;

#[parse_parameters]
fn echo(req: Request, r#type: String) -> Result<Response> {
	Ok(Response::ok().with_body(format!("{} {}", req.path(), r#type)))
}

fn main() {
	let signature = EchoHandler::signature();
	assert_eq!(signature.request_arg(), "req");
	assert!(signature.get("type").is_some());
	let _ = EchoHandler::binder();
}
