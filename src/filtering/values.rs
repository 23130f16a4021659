use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use std::hash::BuildHasher;

/// A raw filter value as it arrived from the request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    Text(&'a str),
    Int(i64),
    Float(f64),
    /// Booleans, nulls, arrays and objects: never a usable flat filter value
    Other,
}

impl<'a> RawValue<'a> {
    #[must_use]
    pub fn from_json(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::String(s) => Self::Text(s),
            JsonValue::Number(n) => n
                .as_i64()
                .map(Self::Int)
                .or_else(|| n.as_f64().map(Self::Float))
                .unwrap_or(Self::Other),
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn as_text(self) -> Option<&'a str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer reading of the value: leading integer of a string, or the
    /// number truncated toward zero.
    #[must_use]
    pub fn to_int(self) -> Option<i64> {
        match self {
            Self::Text(s) => parse_int(s),
            Self::Int(i) => Some(i),
            Self::Float(f) => float_to_int(f.trunc()),
            Self::Other => None,
        }
    }
}

/// Anything a flat filter can read raw per-field values from.
///
/// Implemented for the shapes query strings and JSON bodies usually land in.
pub trait FilterSource {
    fn raw(&self, field: &str) -> Option<RawValue<'_>>;
}

impl<S: BuildHasher> FilterSource for HashMap<String, String, S> {
    fn raw(&self, field: &str) -> Option<RawValue<'_>> {
        self.get(field).map(|v| RawValue::Text(v))
    }
}

impl<S: BuildHasher> FilterSource for HashMap<String, JsonValue, S> {
    fn raw(&self, field: &str) -> Option<RawValue<'_>> {
        self.get(field).map(RawValue::from_json)
    }
}

impl FilterSource for serde_json::Map<String, JsonValue> {
    fn raw(&self, field: &str) -> Option<RawValue<'_>> {
        self.get(field).map(RawValue::from_json)
    }
}

impl<T: FilterSource + ?Sized> FilterSource for &T {
    fn raw(&self, field: &str) -> Option<RawValue<'_>> {
        (**self).raw(field)
    }
}

/// Parse the leading base-10 integer of `s`.
///
/// Leading whitespace and a sign are allowed, and parsing stops at the first
/// non-digit, so `"12abc"` is 12 and `"1.9"` is 1. No digits, or a value
/// outside `i64`, gives `None`.
#[must_use]
pub fn parse_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let sign_len = usize::from(matches!(s.as_bytes().first(), Some(b'-' | b'+')));
    let end = s[sign_len..]
        .bytes()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len() - sign_len);
    if end == 0 {
        return None;
    }
    s[..sign_len + end].parse().ok()
}

/// Integer reading of a JSON value: integral numbers only, including
/// integral floats such as `2.0`. Strings and booleans are not integers.
#[must_use]
pub fn json_integer(value: &JsonValue) -> Option<i64> {
    let number = value.as_number()?;
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0)
            .and_then(float_to_int)
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_int(f: f64) -> Option<i64> {
    (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f as i64)
}

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a date-time in one of the formats clients commonly send.
///
/// Accepts RFC 3339, RFC 2822, ISO-style dates and date-times without an
/// offset (read as UTC), and the JavaScript `Date#toString` form
/// `Fri Oct 16 2026 10:00:00 GMT+0000 (Coordinated Universal Time)`.
/// Values that are not a real calendar date-time give `None`.
#[must_use]
pub fn parse_date(s: &str) -> Option<DateTime<FixedOffset>> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt);
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc().fixed_offset());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|naive| naive.and_utc().fixed_offset());
    }

    // Date#toString: drop the trailing "(zone name)"
    let without_zone_name = s.split_once(" (").map_or(s, |(head, _)| head);
    DateTime::parse_from_str(without_zone_name, "%a %b %d %Y %H:%M:%S GMT%z").ok()
}

/// Date reading of a raw value; numbers are epoch milliseconds.
#[must_use]
pub fn raw_to_date(value: RawValue<'_>) -> Option<DateTime<FixedOffset>> {
    match value {
        RawValue::Text(s) => parse_date(s),
        RawValue::Int(ms) => DateTime::<Utc>::from_timestamp_millis(ms).map(|dt| dt.fixed_offset()),
        RawValue::Float(ms) => float_to_int(ms.trunc())
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .map(|dt| dt.fixed_offset()),
        RawValue::Other => None,
    }
}
