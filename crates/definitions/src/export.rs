use crate::{Matcher, ObjectMatchers, TimeInterval};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Version of the export file format.
pub const EXPORT_API_VERSION: i64 = 1;

/// AlertingFileExport is the file-provisioning representation of alerting resources.
/// Empty sections are omitted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct AlertingFileExport {
    #[serde(rename = "apiVersion")]
    pub api_version: i64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<AlertRuleGroupExport>,
    #[serde(default, rename = "contactPoints", skip_serializing_if = "Vec::is_empty")]
    pub contact_points: Vec<ContactPointExport>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policies: Vec<NotificationPolicyExport>,
    #[serde(default, rename = "muteTimes", skip_serializing_if = "Vec::is_empty")]
    pub mute_timings: Vec<MuteTimeIntervalExport>,
}

impl AlertingFileExport {
    /// Build a root JSON schema of the export file format.
    pub fn root_json_schema() -> schemars::schema::RootSchema {
        let settings = schemars::gen::SchemaSettings::draft2019_09();
        let generator = schemars::gen::SchemaGenerator::new(settings);
        generator.into_root_schema_for::<Self>()
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleGroupExport {
    pub org_id: i64,
    pub name: String,
    /// Full path of the folder which contains the group.
    pub folder: String,
    /// Evaluation interval as a duration string, like "1m".
    pub interval: String,
    /// Evaluation interval in seconds. Not serialized.
    #[serde(skip)]
    pub interval_seconds: i64,
    pub rules: Vec<AlertRuleExport>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleExport {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub uid: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    pub data: Vec<AlertQueryExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dashboard_uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_data_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exec_err_state: Option<String>,
    /// Pending period as a duration string, present only when positive.
    #[serde(default, rename = "for", skip_serializing_if = "Option::is_none")]
    pub for_: Option<String>,
    /// Pending period of the rule. Not serialized.
    #[serde(skip)]
    pub for_duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keep_firing_for: Option<String>,
    #[serde(skip)]
    pub keep_firing_for_duration: Duration,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotations: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub is_paused: bool,
    #[serde(default, rename = "notification_settings", skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<AlertRuleNotificationSettingsExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record: Option<AlertRuleRecordExport>,
    #[serde(
        default,
        rename = "missing_series_evals_to_resolve",
        skip_serializing_if = "Option::is_none"
    )]
    pub missing_series_evals_to_resolve: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertQueryExport {
    pub ref_id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub query_type: String,
    #[serde(default)]
    pub relative_time_range: RelativeTimeRangeExport,
    pub datasource_uid: String,
    /// Query model, decoded so that it's emitted as structured YAML or JSON.
    pub model: serde_json::Map<String, serde_json::Value>,
    /// Query model as a compact JSON string, for HCL. Not serialized.
    #[serde(skip)]
    pub model_string: String,
}

/// Query time range, in seconds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct RelativeTimeRangeExport {
    #[serde(rename = "from")]
    pub from_seconds: i64,
    #[serde(rename = "to")]
    pub to_seconds: i64,
}

/// Notification settings of a rule, with durations as strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct AlertRuleNotificationSettingsExport {
    pub receiver: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub group_by: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_wait: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mute_time_intervals: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub active_time_intervals: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AlertRuleRecordExport {
    pub metric: String,
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_datasource_uid: Option<String>,
}

/// A contact point, with each of its integrations as a receiver.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactPointExport {
    pub org_id: i64,
    pub name: String,
    pub receivers: Vec<ReceiverExport>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ReceiverExport {
    pub uid: String,
    #[serde(rename = "type")]
    pub integration_type: String,
    /// Settings as a JSON document, emitted as structured YAML or JSON.
    pub settings: serde_json::Value,
    #[serde(default)]
    pub disable_resolve_message: bool,
}

/// The notification policy tree of an organization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct NotificationPolicyExport {
    #[serde(rename = "orgId")]
    pub org_id: i64,
    #[serde(flatten)]
    pub policy: RouteExport,
}

/// A notification policy, with empty fields omitted and durations as strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct RouteExport {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub receiver: String,
    #[serde(default, rename = "group_by", skip_serializing_if = "Option::is_none")]
    pub group_by_str: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub r#match: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub match_re: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matchers: Vec<Matcher>,
    #[serde(default, skip_serializing_if = "ObjectMatchers::is_empty")]
    pub object_matchers: ObjectMatchers,
    /// Object matchers as HCL blocks. Not serialized.
    #[serde(skip)]
    pub object_matchers_slice: Vec<MatcherExport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mute_time_intervals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_time_intervals: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r#continue: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub routes: Option<Vec<RouteExport>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_wait: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_interval: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_interval: Option<String>,
}

/// A matcher in the block form used by HCL exports.
#[derive(Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct MatcherExport {
    pub label: String,
    pub r#match: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, JsonSchema)]
pub struct MuteTimeIntervalExport {
    #[serde(rename = "orgId")]
    pub org_id: i64,
    pub name: String,
    #[serde(default)]
    pub time_intervals: Vec<TimeInterval>,
}
