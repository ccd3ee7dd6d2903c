use crate::{
    alert_queries_from_api_alert_queries, api_alert_queries_from_alert_queries,
    api_notification_settings_from_notification_settings, api_record_from_model_record,
    model_record_from_api_record, notification_settings_from_api, Error,
};
use models::{MissingSeriesEvalsToResolve, Provenance};

/// Map a provisioned rule into the domain.
/// State names are parsed strictly, with empty names meaning "not set".
/// If the rule records a metric, fields which only apply to alerting rules are cleared.
pub fn alert_rule_from_provisioned_alert_rule(
    a: &definitions::ProvisionedAlertRule,
) -> Result<models::AlertRule, Error> {
    let mut rule = models::AlertRule {
        id: a.id,
        uid: a.uid.clone(),
        org_id: a.org_id,
        namespace_uid: a.folder_uid.clone(),
        rule_group: a.rule_group.clone(),
        title: a.title.clone(),
        condition: a.condition.clone(),
        data: alert_queries_from_api_alert_queries(&a.data),
        updated: a.updated,
        no_data_state: models::no_data_state_from_wire(&a.no_data_state)?,
        exec_err_state: models::exec_err_state_from_wire(&a.exec_err_state)?,
        for_: a.for_,
        keep_firing_for: a.keep_firing_for,
        annotations: a.annotations.clone(),
        labels: a.labels.clone(),
        is_paused: a.is_paused,
        notification_settings: notification_settings_from_api(a.notification_settings.as_ref()),
        record: model_record_from_api_record(a.record.as_ref()),
        missing_series_evals_to_resolve: MissingSeriesEvalsToResolve::from_wire(
            a.missing_series_evals_to_resolve,
        ),
        ..Default::default()
    };

    if rule.record.is_some() {
        rule.clear_alerting_fields();
    }
    Ok(rule)
}

pub fn provisioned_alert_rule_from_alert_rule(
    rule: &models::AlertRule,
    provenance: Provenance,
) -> definitions::ProvisionedAlertRule {
    definitions::ProvisionedAlertRule {
        id: rule.id,
        uid: rule.uid.clone(),
        org_id: rule.org_id,
        folder_uid: rule.namespace_uid.clone(),
        rule_group: rule.rule_group.clone(),
        title: rule.title.clone(),
        condition: rule.condition.clone(),
        data: api_alert_queries_from_alert_queries(&rule.data),
        updated: rule.updated,
        no_data_state: state_name(rule.no_data_state.as_ref()),
        exec_err_state: state_name(rule.exec_err_state.as_ref()),
        for_: rule.for_,
        keep_firing_for: rule.keep_firing_for,
        annotations: rule.annotations.clone(),
        labels: rule.labels.clone(),
        provenance,
        is_paused: rule.is_paused,
        notification_settings: api_notification_settings_from_notification_settings(
            &rule.notification_settings,
        ),
        record: api_record_from_model_record(rule.record.as_ref()),
        missing_series_evals_to_resolve: rule.missing_series_evals_to_resolve.to_wire(),
    }
}

pub fn alert_rule_group_from_api_alert_rule_group(
    a: &definitions::AlertRuleGroup,
) -> Result<models::AlertRuleGroup, Error> {
    let rules = a
        .rules
        .iter()
        .map(alert_rule_from_provisioned_alert_rule)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(models::AlertRuleGroup {
        title: a.title.clone(),
        folder_uid: a.folder_uid.clone(),
        interval_seconds: a.interval,
        provenance: Provenance::None,
        rules,
    })
}

pub fn api_alert_rule_group_from_alert_rule_group(
    d: &models::AlertRuleGroup,
) -> definitions::AlertRuleGroup {
    definitions::AlertRuleGroup {
        title: d.title.clone(),
        folder_uid: d.folder_uid.clone(),
        interval: d.interval_seconds,
        rules: d
            .rules
            .iter()
            .map(|rule| provisioned_alert_rule_from_alert_rule(rule, d.provenance))
            .collect(),
    }
}

/// Project a validated rule back into the ruler input which produces it.
/// Inputs which were omitted from a patch remain omitted.
pub fn postable_rule_node_from_alert_rule(
    r: &models::AlertRuleWithOptionals,
) -> definitions::PostableExtendedRuleNode {
    let rule = &r.rule;

    let missing_series_evals_to_resolve = match rule.missing_series_evals_to_resolve {
        MissingSeriesEvalsToResolve::Unset | MissingSeriesEvalsToResolve::PreserveExisting => None,
        MissingSeriesEvalsToResolve::ResetToDefault => Some(0),
        MissingSeriesEvalsToResolve::Value(n) => Some(n),
    };
    let metadata = r.has_editor_settings.then(|| definitions::AlertRuleMetadata {
        editor_settings: definitions::AlertRuleEditorSettings {
            simplified_query_and_expressions_section: rule
                .metadata
                .editor_settings
                .simplified_query_and_expressions_section,
            simplified_notifications_section: rule
                .metadata
                .editor_settings
                .simplified_notifications_section,
        },
    });

    definitions::PostableExtendedRuleNode {
        for_: r.has_for.then(|| rule.for_),
        keep_firing_for: r.has_keep_firing_for.then(|| rule.keep_firing_for),
        labels: rule.labels.clone(),
        annotations: rule.annotations.clone(),
        grafana_alert: Some(definitions::PostableGrafanaRule {
            title: rule.title.clone(),
            condition: rule.condition.clone(),
            data: api_alert_queries_from_alert_queries(&rule.data),
            uid: rule.uid.clone(),
            no_data_state: state_name(rule.no_data_state.as_ref()),
            exec_err_state: state_name(rule.exec_err_state.as_ref()),
            is_paused: r.has_pause.then(|| rule.is_paused),
            notification_settings: api_notification_settings_from_notification_settings(
                &rule.notification_settings,
            ),
            record: api_record_from_model_record(rule.record.as_ref()),
            metadata,
            missing_series_evals_to_resolve,
        }),
    }
}

pub(crate) fn state_name<S: std::fmt::Display>(state: Option<&S>) -> String {
    state.map(ToString::to_string).unwrap_or_default()
}

#[cfg(test)]
pub(crate) mod test {
    use super::*;
    use models::{ExecutionErrorState, NoDataState, RawValue};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    pub(crate) fn alerting_rule() -> models::AlertRule {
        models::AlertRule {
            id: 7,
            uid: "cpu-high".to_string(),
            org_id: 1,
            namespace_uid: "infra".to_string(),
            rule_group: "hosts".to_string(),
            title: "CPU is high".to_string(),
            condition: "B".to_string(),
            data: vec![
                models::AlertQuery {
                    ref_id: "A".to_string(),
                    relative_time_range: models::RelativeTimeRange {
                        from: Duration::from_secs(600),
                        to: Duration::ZERO,
                    },
                    datasource_uid: "prom".to_string(),
                    model: RawValue::from_str(r#"{"expr":"avg(cpu)"}"#).unwrap(),
                    ..Default::default()
                },
                models::AlertQuery {
                    ref_id: "B".to_string(),
                    datasource_uid: "__expr__".to_string(),
                    model: RawValue::from_str(r#"{"expression":"A","type":"threshold"}"#)
                        .unwrap(),
                    ..Default::default()
                },
            ],
            updated: chrono::DateTime::parse_from_rfc3339("2024-05-01T12:00:00Z")
                .unwrap()
                .into(),
            no_data_state: Some(NoDataState::KeepLast),
            exec_err_state: Some(ExecutionErrorState::Error),
            for_: Duration::from_secs(300),
            keep_firing_for: Duration::from_secs(60),
            annotations: [("summary".to_string(), "cpu over 90%".to_string())].into(),
            labels: [("team".to_string(), "infra".to_string())].into(),
            is_paused: true,
            notification_settings: vec![models::NotificationSettings {
                receiver: "ops".to_string(),
                ..Default::default()
            }],
            missing_series_evals_to_resolve: MissingSeriesEvalsToResolve::Value(3),
            ..Default::default()
        }
    }

    #[test]
    fn test_round_trip_through_provisioning() {
        let rule = alerting_rule();
        let dto = provisioned_alert_rule_from_alert_rule(&rule, Provenance::File);

        assert_eq!(dto.provenance, Provenance::File);
        assert_eq!(dto.folder_uid, "infra");
        assert_eq!(dto.no_data_state, "KeepLast");
        assert_eq!(dto.missing_series_evals_to_resolve, Some(3));

        assert_eq!(alert_rule_from_provisioned_alert_rule(&dto).unwrap(), rule);
    }

    #[test]
    fn test_recording_rule_clears_alerting_fields() {
        let mut dto = provisioned_alert_rule_from_alert_rule(&alerting_rule(), Provenance::None);
        dto.record = Some(definitions::Record {
            metric: "job:cpu:avg".to_string(),
            from: "A".to_string(),
            target_datasource_uid: String::new(),
        });

        let rule = alert_rule_from_provisioned_alert_rule(&dto).unwrap();
        assert_eq!(rule.rule_type(), models::RuleType::Recording);
        assert_eq!(rule.condition, "");
        assert_eq!(rule.no_data_state, None);
        assert_eq!(rule.exec_err_state, None);
        assert_eq!(rule.for_, Duration::ZERO);
        assert_eq!(rule.keep_firing_for, Duration::ZERO);
        assert!(rule.notification_settings.is_empty());
    }

    #[test]
    fn test_unknown_states_fail() {
        let mut dto = provisioned_alert_rule_from_alert_rule(&alerting_rule(), Provenance::None);
        dto.exec_err_state = "Exploded".to_string();

        let err = alert_rule_from_provisioned_alert_rule(&dto).unwrap_err();
        insta::assert_snapshot!(err, @"unknown Error state option Exploded");

        dto.exec_err_state = String::new();
        dto.no_data_state = String::new();
        let rule = alert_rule_from_provisioned_alert_rule(&dto).unwrap();
        assert_eq!((rule.no_data_state, rule.exec_err_state), (None, None));
    }

    #[test]
    fn test_group_conversions() {
        let group = models::AlertRuleGroup {
            title: "hosts".to_string(),
            folder_uid: "infra".to_string(),
            interval_seconds: 60,
            provenance: Provenance::Api,
            rules: vec![alerting_rule()],
        };
        let api = api_alert_rule_group_from_alert_rule_group(&group);
        assert_eq!(api.interval, 60);
        assert_eq!(api.rules[0].provenance, Provenance::Api);

        let back = alert_rule_group_from_api_alert_rule_group(&api).unwrap();
        assert_eq!(back.rules, group.rules);
        assert_eq!(back.provenance, Provenance::None);
    }

    #[test]
    fn test_postable_node_keeps_omissions() {
        let node = postable_rule_node_from_alert_rule(&models::AlertRuleWithOptionals {
            rule: models::AlertRule {
                missing_series_evals_to_resolve: MissingSeriesEvalsToResolve::PreserveExisting,
                ..alerting_rule()
            },
            has_pause: false,
            has_editor_settings: false,
            has_for: true,
            has_keep_firing_for: false,
        });
        assert_eq!(node.for_, Some(Duration::from_secs(300)));
        assert_eq!(node.keep_firing_for, None);

        let alert = node.grafana_alert.unwrap();
        assert_eq!(alert.is_paused, None);
        assert_eq!(alert.metadata, None);
        assert_eq!(alert.missing_series_evals_to_resolve, None);
        assert_eq!(alert.exec_err_state, "Error");
    }
}
