use chrono::{DateTime, Utc};
use models::{duration, Provenance, RawValue};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// An alert rule as managed through the provisioning API.
/// Unlike export shapes, every field is always present.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct ProvisionedAlertRule {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub uid: String,
    #[serde(default, rename = "orgID")]
    pub org_id: i64,
    #[serde(rename = "folderUID")]
    pub folder_uid: String,
    #[serde(rename = "ruleGroup")]
    pub rule_group: String,
    pub title: String,
    #[serde(default)]
    pub condition: String,
    pub data: Vec<AlertQuery>,
    #[serde(default)]
    #[schemars(schema_with = "crate::datetime_schema")]
    pub updated: DateTime<Utc>,
    /// One of "Alerting", "NoData", "OK" or "KeepLast".
    #[serde(default, rename = "noDataState")]
    pub no_data_state: String,
    /// One of "Alerting", "Error", "OK" or "KeepLast".
    #[serde(default, rename = "execErrState")]
    pub exec_err_state: String,
    #[serde(default, rename = "for", with = "duration::prometheus")]
    #[schemars(schema_with = "models::duration_schema")]
    pub for_: Duration,
    #[serde(default, with = "duration::prometheus")]
    #[schemars(schema_with = "models::duration_schema")]
    pub keep_firing_for: Duration,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Provenance::is_none")]
    pub provenance: Provenance,
    #[serde(default, rename = "isPaused")]
    pub is_paused: bool,
    #[serde(default)]
    pub notification_settings: Option<AlertRuleNotificationSettings>,
    #[serde(default)]
    pub record: Option<Record>,
    #[serde(
        default,
        rename = "missingSeriesEvalsToResolve",
        skip_serializing_if = "Option::is_none"
    )]
    pub missing_series_evals_to_resolve: Option<i64>,
}

/// A query or expression of a rule.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertQuery {
    pub ref_id: String,
    #[serde(default)]
    pub query_type: String,
    #[serde(default)]
    pub relative_time_range: RelativeTimeRange,
    #[serde(default)]
    pub datasource_uid: String,
    /// JSON query model, which is specific to the datasource.
    #[serde(default)]
    pub model: RawValue,
}

/// Query time range, as seconds before the time of evaluation.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct RelativeTimeRange {
    #[serde(with = "duration::seconds")]
    #[schemars(with = "u64")]
    pub from: Duration,
    #[serde(with = "duration::seconds")]
    #[schemars(with = "u64")]
    pub to: Duration,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct AlertRuleNotificationSettings {
    /// Name of the receiver which is sent notifications.
    pub receiver: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
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
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mute_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_time_intervals: Vec<String>,
}

/// Record configures a recording rule.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct Record {
    /// Name of the recorded metric.
    pub metric: String,
    /// RefID of the query or expression to record.
    pub from: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_datasource_uid: String,
}

/// A rule group as managed through the provisioning API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct AlertRuleGroup {
    pub title: String,
    #[serde(rename = "folderUid")]
    pub folder_uid: String,
    /// Evaluation interval, in seconds.
    pub interval: i64,
    pub rules: Vec<ProvisionedAlertRule>,
}
