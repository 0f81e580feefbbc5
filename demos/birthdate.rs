//! Drives a `#[parse_parameters]` handler with a few hand-built requests.
//!
//! ```text
//! RUST_LOG=argbind=debug cargo run --example birthdate
//! ```

use argbind::prelude::*;
use chrono::NaiveDateTime;
use tracing_subscriber::EnvFilter;

/// `GET /me/<id>/birthdate?birthdate=...`
#[parse_parameters]
async fn birthdate(_request: Request, id: String, birthdate: NaiveDateTime) -> Result<Response> {
	Response::json(&serde_json::json!({
		"id": id,
		"birthdate": argbind::params::temporal::format_datetime(&birthdate),
	}))
}

fn route(id: &str, query: &str) -> Result<Request> {
	Request::builder()
		.method(Method::GET)
		.uri(format!("/me/{}/birthdate?{}", id, query))
		.path_param("id", id)
		.build()
}

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("argbind=warn")),
		)
		.init();

	let requests = [
		route("42", "birthdate=1990-04-01T08:30:00")?,
		route("42", "birthdate=1990-04-01")?,
		route("42", "birthdate=yesterday")?,
		route("42", "")?,
	];

	for request in requests {
		let uri = request.uri.to_string();
		let response = match BirthdateHandler.handle(request).await {
			Ok(response) => response,
			Err(error) => error.into_response(),
		};
		println!(
			"{} -> {} {}",
			uri,
			response.status,
			String::from_utf8_lossy(&response.body)
		);
	}

	Ok(())
}
