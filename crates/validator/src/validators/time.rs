//! Calendar date rules.
//!
//! Accepted text layouts:
//! - RFC 3339 (`2024-05-01T10:00:00Z`, offsets normalized to UTC)
//! - `YYYY-MM-DD`, `YYYY/MM/DD`, `MM/DD/YYYY`
//! - `YYYY-MM-DDTHH:MM[:SS[.fff]]` and the same with a space separator
//!
//! Numeric values are read as epoch milliseconds.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::schema::{RuleParam, ValueMap};
use crate::value::FieldValue;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parses date text in any accepted layout.
pub(crate) fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let text = raw.trim();

    if let Ok(stamp) = DateTime::parse_from_rfc3339(text) {
        return Some(stamp.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })
}

fn from_millis(ms: f64) -> Option<NaiveDateTime> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64).map(|stamp| stamp.naive_utc())
}

fn value_date(value: &FieldValue) -> Option<NaiveDateTime> {
    match value {
        FieldValue::Number(ms) => from_millis(*ms),
        FieldValue::Text(text) => parse_date(text),
        _ => None,
    }
}

fn param_date(param: &RuleParam) -> Option<NaiveDateTime> {
    match param {
        RuleParam::Number(ms) => from_millis(*ms),
        RuleParam::Text(text) => parse_date(text),
        _ => None,
    }
}

// ============================================================================
// RULES
// ============================================================================

/// Value is a valid calendar date.
pub fn date(value: &FieldValue, _param: &RuleParam, _all: &ValueMap) -> bool {
    value_date(value).is_some()
}

/// Value is on or after the bound. Fails if either side does not parse.
pub fn date_min(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    match (value_date(value), param_date(param)) {
        (Some(date), Some(bound)) => date >= bound,
        _ => false,
    }
}

/// Value is on or before the bound. Fails if either side does not parse.
pub fn date_max(value: &FieldValue, param: &RuleParam, _all: &ValueMap) -> bool {
    match (value_date(value), param_date(param)) {
        (Some(date), Some(bound)) => date <= bound,
        _ => false,
    }
}
