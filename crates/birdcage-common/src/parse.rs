//! Parsers from upstream JSON fragments to the stable domain model.
//!
//! Everything here is a pure function over [`serde_json::Value`]. Coercion
//! rules are uniform: a missing array is empty, a missing count is zero and a
//! missing flag is false (flags use JavaScript-style truthiness, so `0`, `""`
//! and `null` are false too).
//!
//! The four union families ([`user`], [`tweet`], [`list`], [`community`])
//! never fail on a missing fragment or one that lacks its creation date:
//! they return the degraded variant instead. They only fail when a fragment
//! carries a `__typename` outside the set they know about.

use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use smol_str::SmolStr;

use crate::error::ParseError;

mod account;
mod community;
mod cursor;
mod list;
mod media;
mod notification;
mod trend;
mod tweet;
mod user;

pub use account::{follow_requests, settings, typeahead, unread_count};
pub use community::{COMMUNITY_ROLES, community};
pub use cursor::{CURSOR_DIRECTIONS, cursor};
pub use list::list;
pub use media::{media_upload, media_upload_init};
pub use notification::{NOTIFICATION_KINDS, notification};
pub use trend::trend;
pub use tweet::tweet;
pub use user::{user, user_legacy};

#[cfg(test)]
mod tests;

/// Follow `path` from `value`, failing on the first absent or null key.
pub fn at<'a>(value: &'a Value, path: &[&str]) -> Result<&'a Value, ParseError> {
    let mut current = value;
    for (depth, key) in path.iter().enumerate() {
        current = match current.get(key) {
            Some(next) if !next.is_null() => next,
            _ => return Err(ParseError::Missing(path[..=depth].join(".").into())),
        };
    }
    Ok(current)
}

/// Like [`at`], additionally requiring an array.
pub fn array_at<'a>(value: &'a Value, path: &[&str]) -> Result<&'a [Value], ParseError> {
    at(value, path)?
        .as_array()
        .map(Vec::as_slice)
        .ok_or_else(|| ParseError::Type {
            path: path.join(".").into(),
            expected: "array",
        })
}

/// `Some` only for JSON objects.
pub(crate) fn object(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| v.is_object())
}

/// JavaScript truthiness.
pub fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

/// Truthiness of `value[key]`.
pub fn flag(value: &Value, key: &str) -> bool {
    truthy(value.get(key))
}

/// A count that may be a number or a numeric string; zero otherwise.
pub fn count(value: Option<&Value>) -> u64 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().map(|f| f.max(0.0) as u64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

/// A string value; numbers are rendered, everything else is `None`.
pub fn string(value: Option<&Value>) -> Option<SmolStr> {
    match value? {
        Value::String(s) => Some(SmolStr::new(s)),
        Value::Number(n) => Some(SmolStr::new(n.to_string())),
        _ => None,
    }
}

/// A non-empty owned string.
pub fn text(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// The elements of an array, or nothing.
pub fn items(value: Option<&Value>) -> &[Value] {
    value
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

const LEGACY_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// A timestamp in any of the formats upstream uses: the legacy
/// `Wed Oct 10 20:19:24 +0000 2018` form, RFC 3339, or epoch milliseconds
/// as a number or numeric string.
pub fn timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    match value? {
        Value::Number(n) => millis(n.as_i64()?),
        Value::String(s) => {
            if let Ok(ms) = s.parse::<i64>() {
                return millis(ms);
            }
            DateTime::parse_from_str(s, LEGACY_DATE_FORMAT)
                .or_else(|_| DateTime::parse_from_rfc3339(s))
                .ok()
                .map(|dt| dt.with_timezone(&Utc))
        }
        _ => None,
    }
}

fn millis(ms: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(ms).single()
}

/// The `__typename` of a fragment.
pub(crate) fn typename(value: &Value) -> Option<&str> {
    value.get("__typename").and_then(Value::as_str)
}

pub(crate) fn unexpected(family: &'static str, typename: &str) -> ParseError {
    ParseError::UnexpectedTypename {
        family,
        typename: typename.into(),
    }
}
