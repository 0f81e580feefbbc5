use argbind::prelude::*;

const DEFAULT_PAGE: i64 = 1;

#[parse_query_args]
pub async fn list_items(
	_: Request,
	#[param(default = DEFAULT_PAGE)] page: i64,
	#[param(default = "name")] order_by: String,
	#[param(default = vec!["active".to_string()])] status: Vec<String>,
	#[param(default = Some(true))] archived: Option<bool>,
) -> Result<Response> {
	let _ = (page, order_by, status, archived);
	Ok(Response::ok())
}

fn main() {
	let signature = ListItemsHandler::signature();
	assert_eq!(signature.request_arg(), "request");
	assert!(signature.params().iter().all(|p| !p.is_required()));
}
