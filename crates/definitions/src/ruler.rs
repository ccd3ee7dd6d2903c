use crate::{AlertQuery, AlertRuleNotificationSettings, Record};
use models::duration;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// A rule group submitted to the ruler API.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PostableRuleGroupConfig {
    pub name: String,
    /// Evaluation interval of the group. Zero selects the configured default.
    #[serde(default, with = "duration::prometheus")]
    #[schemars(schema_with = "models::duration_schema")]
    pub interval: Duration,
    #[serde(default)]
    pub rules: Vec<PostableExtendedRuleNode>,
}

/// A rule of a PostableRuleGroupConfig.
/// Only Grafana-managed rules, having `grafana_alert`, are accepted.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PostableExtendedRuleNode {
    #[serde(
        default,
        rename = "for",
        with = "duration::prometheus::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "models::option_duration_schema")]
    pub for_: Option<Duration>,
    #[serde(
        default,
        with = "duration::prometheus::option",
        skip_serializing_if = "Option::is_none"
    )]
    #[schemars(schema_with = "models::option_duration_schema")]
    pub keep_firing_for: Option<Duration>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grafana_alert: Option<PostableGrafanaRule>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, JsonSchema)]
pub struct PostableGrafanaRule {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub condition: String,
    #[serde(default)]
    pub data: Vec<AlertQuery>,
    /// UID of an existing rule which this rule updates. Empty for new rules.
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub no_data_state: String,
    #[serde(default)]
    pub exec_err_state: String,
    #[serde(default)]
    pub is_paused: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_settings: Option<AlertRuleNotificationSettings>,
    #[serde(default)]
    pub record: Option<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AlertRuleMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing_series_evals_to_resolve: Option<i64>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct AlertRuleMetadata {
    #[serde(default)]
    pub editor_settings: AlertRuleEditorSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, JsonSchema)]
pub struct AlertRuleEditorSettings {
    #[serde(default)]
    pub simplified_query_and_expressions_section: bool,
    #[serde(default)]
    pub simplified_notifications_section: bool,
}
