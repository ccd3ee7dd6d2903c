//! Wire shapes of the alerting HTTP APIs and of exported configuration files.
//! These types own no behavior beyond (de)serialization;
//! conversions to and from the domain live in the `compat` crate.

mod alertmanager;
mod export;
mod provisioning;
mod ruler;

pub use alertmanager::{
    EmbeddedContactPoint, GettableApiReceiver, GettableGrafanaReceiver, MatchType, Matcher,
    MatcherParseError, MuteTimeInterval, ObjectMatchers, PostableGrafanaReceiver, Route,
    TimeInterval, TimeRange,
};
pub use export::{
    AlertQueryExport, AlertRuleExport, AlertRuleGroupExport, AlertRuleNotificationSettingsExport,
    AlertRuleRecordExport, AlertingFileExport, ContactPointExport, MatcherExport,
    MuteTimeIntervalExport, NotificationPolicyExport, ReceiverExport, RelativeTimeRangeExport,
    RouteExport, EXPORT_API_VERSION,
};
pub use provisioning::{
    AlertQuery, AlertRuleGroup, AlertRuleNotificationSettings, ProvisionedAlertRule, Record,
    RelativeTimeRange,
};
pub use ruler::{
    AlertRuleEditorSettings, AlertRuleMetadata, PostableExtendedRuleNode, PostableGrafanaRule,
    PostableRuleGroupConfig,
};

fn is_false(b: &bool) -> bool {
    !*b
}

fn datetime_schema(_: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
    serde_json::from_value(serde_json::json!({
        "type": "string",
        "format": "date-time",
    }))
    .unwrap()
}
