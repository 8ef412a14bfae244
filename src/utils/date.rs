use chrono::{DateTime, Days, NaiveDate, Utc};

use crate::consts::DATE_FORMAT;
use crate::error::AppError;
use crate::utils::Timezone;

pub(crate) fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let s = s.trim();
    // Try YYYYMMDD
    if s.len() == 8
        && let Ok(d) = NaiveDate::parse_from_str(s, "%Y%m%d")
    {
        return Ok(d);
    }
    // Try YYYY-MM-DD
    if let Ok(d) = NaiveDate::parse_from_str(s, DATE_FORMAT) {
        return Ok(d);
    }
    Err(AppError::InvalidDate {
        input: s.to_string(),
    })
}

/// Accepts absolute dates plus "today" / "yesterday" resolved in `timezone`
pub(crate) fn parse_date_input(s: &str, timezone: Timezone) -> Result<NaiveDate, AppError> {
    parse_date_input_at(s, timezone, Utc::now())
}

fn parse_date_input_at(
    s: &str,
    timezone: Timezone,
    now: DateTime<Utc>,
) -> Result<NaiveDate, AppError> {
    let trimmed = s.trim();
    let today = timezone.date_of(now);
    if trimmed.eq_ignore_ascii_case("today") {
        return Ok(today);
    }
    if trimmed.eq_ignore_ascii_case("yesterday") {
        return today
            .checked_sub_days(Days::new(1))
            .ok_or_else(|| AppError::InvalidDate {
                input: trimmed.to_string(),
            });
    }
    parse_date(trimmed)
}
