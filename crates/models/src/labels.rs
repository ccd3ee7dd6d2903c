// Label and annotation keys which carry meaning to the alerting system.

// Labels attached by the system to every alert of a rule.
pub const ALERT_NAME: &str = "alertname";
pub const FOLDER_TITLE: &str = "grafana_folder";
pub const ALERT_RULE_UID: &str = "__alert_rule_uid__";
pub const NAMESPACE_UID: &str = "__alert_rule_namespace_uid__";
pub const AUTOGENERATED_ROUTE: &str = "__grafana_autogenerated__";
pub const AUTOGENERATED_ROUTE_RECEIVER_NAME: &str = "__grafana_receiver__";
pub const AUTOGENERATED_ROUTE_SETTINGS_HASH: &str = "__grafana_route_settings_hash__";

// Group-by token meaning "group by every label".
pub const GROUP_BY_ALL: &str = "...";

// Annotations linking a rule to a dashboard panel.
pub const DASHBOARD_UID_ANNOTATION: &str = "__dashboardUid__";
pub const PANEL_ID_ANNOTATION: &str = "__panelId__";

/// Labels which users may not define on a rule, as they're written by the system.
pub fn reserved() -> Vec<String> {
    [
        ALERT_RULE_UID,
        NAMESPACE_UID,
        AUTOGENERATED_ROUTE,
        AUTOGENERATED_ROUTE_RECEIVER_NAME,
        AUTOGENERATED_ROUTE_SETTINGS_HASH,
    ]
    .into_iter()
    .map(str::to_string)
    .collect()
}
