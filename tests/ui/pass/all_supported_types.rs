use argbind::prelude::*;
use chrono::{NaiveDate, NaiveDateTime};

#[parse_parameters]
async fn every_type(
	request: Request,
	flag: bool,
	count: i64,
	name: String,
	day: NaiveDate,
	at: NaiveDateTime,
	tags: Vec<String>,
	maybe: Option<i64>,
) -> Result<Response> {
	let _ = (request, flag, count, name, day, at, tags, maybe);
	Ok(Response::ok())
}

fn main() {
	let _handler: Box<dyn Handler> = Box::new(EveryTypeHandler);
	assert_eq!(EveryTypeHandler::signature().len(), 7);
}
