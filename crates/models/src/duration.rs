//! Durations in the Prometheus text format (`1h30m`, `90d`, `0s`), as used by
//! rule and notification-policy wire shapes, plus serde adapters for them.

use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

const MILLIS_PER_SECOND: u64 = 1000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u64 = 24 * MILLIS_PER_HOUR;
const MILLIS_PER_WEEK: u64 = 7 * MILLIS_PER_DAY;
const MILLIS_PER_YEAR: u64 = 365 * MILLIS_PER_DAY;

lazy_static! {
    static ref DURATION_RE: Regex = Regex::new(
        r"^(([0-9]+)y)?(([0-9]+)w)?(([0-9]+)d)?(([0-9]+)h)?(([0-9]+)m)?(([0-9]+)s)?(([0-9]+)ms)?$"
    )
    .unwrap();
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty duration string")]
    Empty,
    #[error("not a valid duration string: {0:?}")]
    Invalid(String),
    #[error("duration out of range: {0:?}")]
    Overflow(String),
}

/// Parse a Prometheus-style duration such as `5m` or `1h30m`.
/// A bare `0` is accepted as zero.
pub fn parse(s: &str) -> Result<Duration, ParseError> {
    match s {
        "" => return Err(ParseError::Empty),
        "0" => return Ok(Duration::ZERO),
        _ => (),
    }
    let Some(captures) = DURATION_RE.captures(s) else {
        return Err(ParseError::Invalid(s.to_string()));
    };

    let units = [
        (2, MILLIS_PER_YEAR),
        (4, MILLIS_PER_WEEK),
        (6, MILLIS_PER_DAY),
        (8, MILLIS_PER_HOUR),
        (10, MILLIS_PER_MINUTE),
        (12, MILLIS_PER_SECOND),
        (14, 1),
    ];

    let mut millis: u64 = 0;
    for (group, mult) in units {
        let Some(m) = captures.get(group) else {
            continue;
        };
        let n: u64 = m
            .as_str()
            .parse()
            .map_err(|_| ParseError::Overflow(s.to_string()))?;

        millis = n
            .checked_mul(mult)
            .and_then(|v| millis.checked_add(v))
            .ok_or_else(|| ParseError::Overflow(s.to_string()))?;
    }
    Ok(Duration::from_millis(millis))
}

/// Format a duration in the Prometheus text format. Precision is milliseconds.
/// Years and weeks are only used when they divide the remainder exactly,
/// so that `90d` is preferred over `12w6d`.
pub fn format(d: Duration) -> String {
    let mut ms = d.as_millis() as u64;
    if ms == 0 {
        return "0s".to_string();
    }

    let mut out = String::new();
    let mut unit = |name: &str, mult: u64, exact: bool| {
        if exact && ms % mult != 0 {
            return;
        }
        let v = ms / mult;
        if v > 0 {
            out.push_str(&v.to_string());
            out.push_str(name);
            ms -= v * mult;
        }
    };
    unit("y", MILLIS_PER_YEAR, true);
    unit("w", MILLIS_PER_WEEK, true);
    unit("d", MILLIS_PER_DAY, false);
    unit("h", MILLIS_PER_HOUR, false);
    unit("m", MILLIS_PER_MINUTE, false);
    unit("s", MILLIS_PER_SECOND, false);
    unit("ms", 1, false);

    out
}

/// Serde adapter for a `Duration` encoded as a Prometheus duration string.
pub mod prometheus {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::format(*d))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let s = String::deserialize(d)?;
        super::parse(&s).map_err(D::Error::custom)
    }

    /// The same encoding, for optional fields.
    pub mod option {
        use serde::{de::Error, Deserialize, Deserializer, Serializer};
        use std::time::Duration;

        pub fn serialize<S: Serializer>(d: &Option<Duration>, s: S) -> Result<S::Ok, S::Error> {
            match d {
                Some(d) => s.serialize_str(&super::super::format(*d)),
                None => s.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Duration>, D::Error> {
            match Option::<String>::deserialize(d)? {
                Some(s) => super::super::parse(&s).map(Some).map_err(D::Error::custom),
                None => Ok(None),
            }
        }
    }
}

/// Serde adapter for a `Duration` encoded as an integer count of seconds.
pub mod seconds {
    use serde::{de::Error, Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_secs())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let secs = i64::deserialize(d)?;
        if secs < 0 {
            return Err(D::Error::custom(format!(
                "duration must not be negative (got {secs} seconds)"
            )));
        }
        Ok(Duration::from_secs(secs as u64))
    }
}

pub fn duration_schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    serde_json::from_value(serde_json::json!({
        "type": "string",
        "pattern": DURATION_RE.as_str(),
    }))
    .unwrap()
}

pub fn option_duration_schema(
    _: &mut schemars::gen::SchemaGenerator,
) -> schemars::schema::Schema {
    serde_json::from_value(serde_json::json!({
        "type": ["string", "null"],
        "pattern": DURATION_RE.as_str(),
    }))
    .unwrap()
}
