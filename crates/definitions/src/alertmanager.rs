use models::{duration, Provenance, RawValue};
use schemars::JsonSchema;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::time::Duration;

/// A node of the notification policy tree.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct Route {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,
    #[serde(default, rename = "group_by", skip_serializing_if = "Vec::is_empty")]
    pub group_by_str: Vec<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub r#match: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_re: BTreeMap<String, String>,
    /// Matchers in their text form, such as `severity=~"page|critical"`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<Matcher>,
    #[serde(default, skip_serializing_if = "ObjectMatchers::is_empty")]
    pub object_matchers: ObjectMatchers,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mute_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub r#continue: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<Route>,
    #[serde(
        default,
        with = "duration::prometheus::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "models::option_duration_schema")]
    pub group_wait: Option<Duration>,
    #[serde(
        default,
        with = "duration::prometheus::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "models::option_duration_schema")]
    pub group_interval: Option<Duration>,
    #[serde(
        default,
        with = "duration::prometheus::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "models::option_duration_schema")]
    pub repeat_interval: Option<Duration>,
    #[serde(default, skip_serializing_if = "Provenance::is_none")]
    pub provenance: Provenance,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchType {
    Equal,
    NotEqual,
    Regexp,
    NotRegexp,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Equal => "=",
            MatchType::NotEqual => "!=",
            MatchType::Regexp => "=~",
            MatchType::NotRegexp => "!~",
        }
    }

    pub fn from_str(s: &str) -> Option<MatchType> {
        match s {
            "=" => Some(MatchType::Equal),
            "!=" => Some(MatchType::NotEqual),
            "=~" => Some(MatchType::Regexp),
            "!~" => Some(MatchType::NotRegexp),
            _ => None,
        }
    }
}

impl std::fmt::Display for MatchType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A label matcher of a notification policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    pub name: String,
    pub match_type: MatchType,
    pub value: String,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MatcherParseError {
    #[error("matcher {0:?} has no operator")]
    NoOperator(String),
    #[error("matcher {0:?} has an empty label name")]
    EmptyName(String),
    #[error("matcher {0:?} has a malformed quoted value")]
    BadQuoting(String),
    #[error("matcher operator {0:?} is not one of =, !=, =~, !~")]
    BadOperator(String),
}

impl Matcher {
    pub fn new(name: impl Into<String>, match_type: MatchType, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            match_type,
            value: value.into(),
        }
    }

    /// Parse the text form of a matcher, like `team="infra"` or `env!~dev|test`.
    /// Values may be double-quoted.
    pub fn parse(s: &str) -> Result<Self, MatcherParseError> {
        let Some(op_start) = s.find(|c: char| c == '=' || c == '!') else {
            return Err(MatcherParseError::NoOperator(s.to_string()));
        };
        let (name, rest) = s.split_at(op_start);
        let name = name.trim();
        if name.is_empty() {
            return Err(MatcherParseError::EmptyName(s.to_string()));
        }

        let (match_type, value) = if let Some(v) = rest.strip_prefix("=~") {
            (MatchType::Regexp, v)
        } else if let Some(v) = rest.strip_prefix("!~") {
            (MatchType::NotRegexp, v)
        } else if let Some(v) = rest.strip_prefix("!=") {
            (MatchType::NotEqual, v)
        } else if let Some(v) = rest.strip_prefix('=') {
            (MatchType::Equal, v)
        } else {
            return Err(MatcherParseError::NoOperator(s.to_string()));
        };

        let value = value.trim();
        let value = if value.starts_with('"') {
            serde_json::from_str::<String>(value)
                .map_err(|_| MatcherParseError::BadQuoting(s.to_string()))?
        } else {
            value.to_string()
        };

        Ok(Self {
            name: name.to_string(),
            match_type,
            value,
        })
    }
}

impl std::fmt::Display for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Quoting a string as JSON is infallible.
        let quoted = serde_json::to_string(&self.value).map_err(|_| std::fmt::Error)?;
        write!(f, "{}{}{}", self.name, self.match_type, quoted)
    }
}

impl Serialize for Matcher {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Matcher {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let s = String::deserialize(d)?;
        Matcher::parse(&s).map_err(D::Error::custom)
    }
}

impl JsonSchema for Matcher {
    fn schema_name() -> String {
        "Matcher".to_string()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(gen)
    }
}

/// Matchers in their structured form, encoded as `[name, operator, value]` triples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ObjectMatchers(pub Vec<Matcher>);

impl ObjectMatchers {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::ops::Deref for ObjectMatchers {
    type Target = [Matcher];
    fn deref(&self) -> &[Matcher] {
        &self.0
    }
}

impl Serialize for ObjectMatchers {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(
            self.0
                .iter()
                .map(|m| [m.name.as_str(), m.match_type.as_str(), m.value.as_str()]),
        )
    }
}

impl<'de> Deserialize<'de> for ObjectMatchers {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        let triples = Vec::<(String, String, String)>::deserialize(d)?;
        let mut out = Vec::with_capacity(triples.len());

        for (name, op, value) in triples {
            let match_type = MatchType::from_str(&op)
                .ok_or_else(|| D::Error::custom(MatcherParseError::BadOperator(op)))?;
            out.push(Matcher {
                name,
                match_type,
                value,
            });
        }
        Ok(Self(out))
    }
}

impl JsonSchema for ObjectMatchers {
    fn schema_name() -> String {
        "ObjectMatchers".to_string()
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        <Vec<[String; 3]>>::json_schema(gen)
    }
}

/// A named set of time intervals, during which notifications are muted
/// (or, when used as active intervals, outside of which they're muted).
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct MuteTimeInterval {
    pub name: String,
    #[serde(default)]
    pub time_intervals: Vec<TimeInterval>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Provenance::is_none")]
    pub provenance: Provenance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct TimeInterval {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub times: Vec<TimeRange>,
    /// Weekday names or ranges, like `monday:friday`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub weekdays: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub days_of_month: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub months: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub years: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct TimeRange {
    /// Start of the range, as `HH:MM`.
    pub start_time: String,
    /// End of the range, as `HH:MM`.
    pub end_time: String,
}

/// A single integration of a contact point, as managed through the provisioning API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedContactPoint {
    #[serde(default)]
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    #[serde(default)]
    pub settings: serde_json::Value,
    #[serde(default)]
    pub disable_resolve_message: bool,
    #[serde(default, skip_serializing_if = "Provenance::is_none")]
    pub provenance: Provenance,
}

/// An integration of a receiver, as submitted to the Alertmanager configuration API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PostableGrafanaReceiver {
    #[serde(default)]
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    #[serde(default)]
    pub disable_resolve_message: bool,
    #[serde(default)]
    pub settings: RawValue,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub secure_settings: BTreeMap<String, String>,
}

/// An integration of a receiver, as returned by the Alertmanager configuration API.
/// Secure settings are never returned; `secure_fields` names those which are set.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GettableGrafanaReceiver {
    pub uid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    pub disable_resolve_message: bool,
    pub secure_fields: BTreeMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<RawValue>,
    #[serde(default, skip_serializing_if = "Provenance::is_none")]
    pub provenance: Provenance,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct GettableApiReceiver {
    pub name: String,
    #[serde(default)]
    pub grafana_managed_receiver_configs: Vec<GettableGrafanaReceiver>,
}
