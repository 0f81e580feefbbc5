//! ISO-8601 parsing into naive (zone-less) dates and date-times
//!
//! Accepted input, in extended or basic form:
//!
//! ```text
//! 2017-10-10            20171010
//! 2017-10-10T10         2017-10-10T10:10
//! 2017-10-10T10:10:10   20171010T101010
//! 2017-10-10 10:10:10.123456
//! 2017-10-10T10:10:10Z  2017-10-10T10:10:10+02:00  2017-10-10T10:10:10-0500
//! ```
//!
//! A trailing zone designator is dropped and the wall-clock time is kept as
//! is; it is not converted to UTC.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y%m%d"];
const TIME_FORMATS: [&str; 4] = ["%H:%M:%S%.f", "%H:%M", "%H%M%S%.f", "%H%M"];

/// Parse an ISO-8601 date-time, tolerating a date-only value (midnight)
///
/// # Examples
///
/// ```
/// use argbind_params::temporal::parse_naive_datetime;
///
/// let dt = parse_naive_datetime("2017-10-10T10:10:10+02:00").unwrap();
/// assert_eq!(dt.to_string(), "2017-10-10 10:10:10");
///
/// let midnight = parse_naive_datetime("2017-10-10").unwrap();
/// assert_eq!(midnight.to_string(), "2017-10-10 00:00:00");
///
/// assert!(parse_naive_datetime("not a datetime").is_none());
/// ```
pub fn parse_naive_datetime(input: &str) -> Option<NaiveDateTime> {
	let (date_part, time_part) = match input.find(|c| matches!(c, 'T' | 't' | ' ')) {
		Some(idx) => (&input[..idx], Some(&input[idx + 1..])),
		None => (input, None),
	};

	let date = parse_date_part(date_part)?;
	let time = match time_part {
		Some(raw) => parse_time_part(strip_zone(raw)?)?,
		None => NaiveTime::MIN,
	};

	Some(date.and_time(time))
}

/// Parse an ISO-8601 value and keep only its date
///
/// Anything [`parse_naive_datetime`] accepts is accepted here.
pub fn parse_naive_date(input: &str) -> Option<NaiveDate> {
	parse_naive_datetime(input).map(|dt| dt.date())
}

/// `YYYY-MM-DD`
pub fn format_date(date: &NaiveDate) -> String {
	date.format("%Y-%m-%d").to_string()
}

/// `YYYY-MM-DDTHH:MM:SS`, with a fraction only when it is non-zero
pub fn format_datetime(datetime: &NaiveDateTime) -> String {
	datetime.format("%Y-%m-%dT%H:%M:%S%.f").to_string()
}

fn parse_date_part(raw: &str) -> Option<NaiveDate> {
	if raw.is_empty() || !raw.starts_with(|c: char| c.is_ascii_digit()) {
		return None;
	}
	DATE_FORMATS
		.iter()
		.find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

fn parse_time_part(raw: &str) -> Option<NaiveTime> {
	if !raw.starts_with(|c: char| c.is_ascii_digit()) {
		return None;
	}

	// Hour only
	if raw.len() == 2 {
		let hour = raw.parse::<u32>().ok()?;
		return NaiveTime::from_hms_opt(hour, 0, 0);
	}

	// ISO allows a comma as the decimal sign
	let normalized = raw.replace(',', ".");
	TIME_FORMATS
		.iter()
		.find_map(|fmt| NaiveTime::parse_from_str(&normalized, fmt).ok())
}

/// Drop a trailing `Z`, `±HH`, `±HHMM` or `±HH:MM`
///
/// Returns `None` when something that looks like an offset is malformed.
fn strip_zone(time: &str) -> Option<&str> {
	if let Some(rest) = time.strip_suffix(|c| matches!(c, 'Z' | 'z')) {
		return Some(rest);
	}

	let Some(idx) = time.rfind(|c| matches!(c, '+' | '-')) else {
		return Some(time);
	};

	let offset = &time[idx + 1..];
	let digits = offset.bytes().filter(u8::is_ascii_digit).count();
	let well_formed = match offset.len() {
		2 | 4 => digits == offset.len(),
		5 => digits == 4 && offset.as_bytes()[2] == b':',
		_ => false,
	};

	well_formed.then(|| &time[..idx])
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	fn dt(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
		NaiveDate::from_ymd_opt(y, mo, d)
			.unwrap()
			.and_hms_opt(h, mi, s)
			.unwrap()
	}

	#[rstest]
	#[case("2017-10-10T10:10:10", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10t10:10:10", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10 10:10:10", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10", dt(2017, 10, 10, 0, 0, 0))]
	#[case("20171010", dt(2017, 10, 10, 0, 0, 0))]
	#[case("20171010T101010", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10T10:10", dt(2017, 10, 10, 10, 10, 0))]
	#[case("2017-10-10T10", dt(2017, 10, 10, 10, 0, 0))]
	#[case("2017-10-10T10:10:10Z", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10T10:10:10+02:00", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10T10:10:10-0500", dt(2017, 10, 10, 10, 10, 10))]
	#[case("2017-10-10T10:10:10+01", dt(2017, 10, 10, 10, 10, 10))]
	fn test_accepted_datetimes(#[case] input: &str, #[case] expected: NaiveDateTime) {
		assert_eq!(parse_naive_datetime(input), Some(expected));
	}

	#[rstest]
	fn test_fractional_seconds() {
		let parsed = parse_naive_datetime("2017-10-10T10:10:10.123456").unwrap();
		assert_eq!(format_datetime(&parsed), "2017-10-10T10:10:10.123456");

		let comma = parse_naive_datetime("2017-10-10T10:10:10,5").unwrap();
		assert_eq!(format_datetime(&comma), "2017-10-10T10:10:10.500");
	}

	#[rstest]
	#[case("not a datetime")]
	#[case("")]
	#[case("2017-13-01")]
	#[case("2017-02-30")]
	#[case("2017-10-10T25:00:00")]
	#[case("2017-10-10T10:10:10+2")]
	#[case("2017-10-10T")]
	#[case("T10:10:10")]
	fn test_rejected_datetimes(#[case] input: &str) {
		assert_eq!(parse_naive_datetime(input), None);
	}

	#[rstest]
	fn test_date_truncates_time() {
		let date = parse_naive_date("2017-10-19T23:59:59").unwrap();
		assert_eq!(format_date(&date), "2017-10-19");
	}

	#[rstest]
	#[case("2017-10-10T10:10:10")]
	#[case("1999-01-31T00:00:00")]
	#[case("2017-10-10T10:10:10.250")]
	fn test_canonical_datetime_round_trips(#[case] input: &str) {
		let parsed = parse_naive_datetime(input).unwrap();
		assert_eq!(format_datetime(&parsed), input);
	}

	#[rstest]
	#[case("2017-10-10")]
	#[case("2020-02-29")]
	fn test_canonical_date_round_trips(#[case] input: &str) {
		let parsed = parse_naive_date(input).unwrap();
		assert_eq!(format_date(&parsed), input);
	}
}
