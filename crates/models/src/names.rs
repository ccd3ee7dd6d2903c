use lazy_static::lazy_static;
use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{from_value, json};
use validator::{Validate, ValidationError, ValidationErrors};

// Prometheus metric names: a letter, underscore, or colon, followed by
// any number of letters, digits, underscores, or colons.
const METRIC_NAME: &'static str = r"[a-zA-Z_:][a-zA-Z0-9_:]*";

lazy_static! {
    static ref METRIC_NAME_RE: Regex = Regex::new(&["^", METRIC_NAME, "$"].concat()).unwrap();
}

/// Metric names of recording rules, in the Prometheus metric name syntax.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, JsonSchema, Eq, PartialOrd, Ord, Hash)]
#[schemars(example = "MetricName::example")]
pub struct MetricName(#[schemars(schema_with = "MetricName::schema")] String);

impl MetricName {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
    /// Checks that this is a valid Prometheus metric name.
    pub fn check(&self) -> Result<(), crate::Error> {
        self.validate().map_err(|_| crate::Error::MetricName {
            name: self.0.clone(),
        })
    }
    pub fn example() -> Self {
        Self("job:http_requests:rate5m".into())
    }

    fn schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        from_value(json!({
            "type": "string",
            "pattern": (["^", METRIC_NAME, "$"].concat()),
        }))
        .unwrap()
    }
}

impl std::ops::Deref for MetricName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MetricName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Validate for MetricName {
    fn validate(&self) -> Result<(), ValidationErrors> {
        if METRIC_NAME_RE.is_match(&self.0) {
            return Ok(());
        }
        let mut errors = ValidationErrors::new();
        errors.add(
            "",
            ValidationError {
                code: "regex mismatch".into(),
                message: None,
                params: [
                    ("pattern".into(), json!(METRIC_NAME)),
                    ("value".into(), json!(self.0)),
                ]
                .into_iter()
                .collect(),
            },
        );
        Err(errors)
    }
}
