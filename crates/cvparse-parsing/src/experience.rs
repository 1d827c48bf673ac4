use chrono::Datelike;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

use crate::config::ParsingConfig;

/// A calendar month: the resolution that informal resume date ranges carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    pub year: i32,
    pub month: u32,
}

impl MonthYear {
    pub fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The current local month/year.
    pub fn now() -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }
}

// One date range per line: `<month year> <separator> <month year | present>`.
// The separator is any single non-digit character or the word "to".
static DATE_RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?P<start>\w+.\d+)\s*(?:\D|to)\s*(?P<end>\w+.\d+|present)").unwrap()
});

/// Sum elapsed months across every date range found in the experience lines.
///
/// Lines without a recognizable range contribute nothing, as do ranges with
/// an unparseable endpoint. Out-of-order ranges contribute negative months
/// to the running sum; the returned total is floored at zero.
/// `today` is what "present" resolves to; pass [`MonthYear::now`] outside
/// of tests.
pub fn total_months(lines: &[String], today: MonthYear) -> i64 {
    total_months_with_config(lines, today, &ParsingConfig::default())
}

/// Config-aware version of [`total_months`].
pub(crate) fn total_months_with_config(
    lines: &[String],
    today: MonthYear,
    config: &ParsingConfig,
) -> i64 {
    let re = config.date_range_re.as_ref().unwrap_or(&DATE_RANGE_RE);

    let mut total: i64 = 0;
    for line in lines {
        let Some(caps) = re.captures(line) else {
            continue;
        };
        let (Some(start), Some(end)) = (caps.name("start"), caps.name("end")) else {
            continue;
        };
        let months = months_between(start.as_str(), end.as_str(), today);
        if months == 0 {
            tracing::debug!(line = %line, "date range contributed no months");
        }
        total += months;
    }
    total.max(0)
}

/// Elapsed months from `start` to `end`, both written as free text.
///
/// Returns 0 when either endpoint fails to parse. The result is negative
/// when the endpoints are out of chronological order; callers decide
/// whether that cancels against other ranges (see [`total_months`]).
pub fn months_between(start: &str, end: &str, today: MonthYear) -> i64 {
    let start = parse_month_year(start);
    let end = if end.eq_ignore_ascii_case("present") {
        Some(today)
    } else {
        parse_month_year(end)
    };

    match (start, end) {
        (Some(s), Some(e)) => {
            i64::from(e.year - s.year) * 12 + (i64::from(e.month) - i64::from(s.month))
        }
        _ => 0,
    }
}

/// Parse `"<month word> <year>"` leniently.
///
/// Month words longer than three characters are truncated to their
/// three-letter abbreviation first, so "January 2019", "Sept 2020", and
/// "jan 2019" all parse. Tokens without both parts yield `None`.
fn parse_month_year(token: &str) -> Option<MonthYear> {
    let mut parts = token.split_whitespace();
    let month_word = parts.next()?;
    let year_word = parts.next()?;

    let abbrev: String = month_word.chars().take(3).collect();
    let month = chrono::Month::from_str(&abbrev.to_lowercase())
        .ok()?
        .number_from_month();
    let year = year_word.parse::<i32>().ok()?;

    Some(MonthYear { year, month })
}
