use crate::{validate_condition, validate_interval, validate_labels, Error};
use definitions::{PostableExtendedRuleNode, PostableGrafanaRule};
use models::{
    AlertRule, AlertRuleMetadata, EditorSettings, ExecutionErrorState, MetricName,
    MissingSeriesEvalsToResolve, NoDataState, RuleLimits,
};
use std::time::Duration;

/// Validate a rule of a group and build its domain representation.
///
/// A rule having a UID updates an existing rule. Its title, states, condition
/// and queries may then be omitted, which leaves the stored values unchanged.
pub fn validate_rule_node(
    node: &PostableExtendedRuleNode,
    group_name: &str,
    interval: Duration,
    org_id: i64,
    namespace_uid: &str,
    limits: &RuleLimits,
) -> Result<AlertRule, Error> {
    let interval_seconds = validate_interval(interval, limits.base_interval)?;

    let Some(alert) = &node.grafana_alert else {
        return Err(Error::NotGrafanaManaged);
    };
    let can_patch = !alert.uid.is_empty();

    if alert.title.is_empty() && !can_patch {
        return Err(Error::TitleEmpty);
    }
    if alert.title.chars().count() > limits.max_title_length {
        return Err(Error::TitleTooLong {
            max: limits.max_title_length,
        });
    }

    let mut rule = AlertRule {
        org_id,
        uid: alert.uid.clone(),
        title: alert.title.clone(),
        data: compat::alert_queries_from_api_alert_queries(&alert.data),
        interval_seconds,
        namespace_uid: namespace_uid.to_string(),
        rule_group: group_name.to_string(),
        ..Default::default()
    };

    if alert.record.is_some() {
        if has_alerting_fields(node, alert) {
            return Err(Error::AlertingAndRecording);
        }
        validate_recording_rule_fields(&mut rule, alert, limits, can_patch)?;
    } else {
        validate_alerting_rule_fields(&mut rule, node, alert, can_patch)?;
    }

    validate_labels(&node.labels, limits)?;
    rule.annotations = node.annotations.clone();
    rule.labels = node.labels.clone();
    rule.set_dashboard_and_panel_from_annotations()?;

    Ok(rule)
}

// Fields which only apply to alerting rules.
fn has_alerting_fields(node: &PostableExtendedRuleNode, alert: &PostableGrafanaRule) -> bool {
    !alert.condition.is_empty()
        || !alert.no_data_state.is_empty()
        || !alert.exec_err_state.is_empty()
        || alert.notification_settings.is_some()
        || node.for_.is_some()
        || node.keep_firing_for.is_some()
}

fn validate_alerting_rule_fields(
    rule: &mut AlertRule,
    node: &PostableExtendedRuleNode,
    alert: &PostableGrafanaRule,
    can_patch: bool,
) -> Result<(), Error> {
    rule.no_data_state = match (alert.no_data_state.as_str(), can_patch) {
        ("", true) => None,
        ("", false) => Some(NoDataState::default()),
        (state, _) => Some(NoDataState::from_str(state)?),
    };
    rule.exec_err_state = match (alert.exec_err_state.as_str(), can_patch) {
        ("", true) => None,
        ("", false) => Some(ExecutionErrorState::default()),
        (state, _) => Some(ExecutionErrorState::from_str(state)?),
    };

    rule.condition = alert.condition.clone();
    validate_condition(&rule.condition, &rule.data, can_patch)?;

    if let Some(settings) = &alert.notification_settings {
        let settings = compat::notification_settings_from_api(Some(settings));
        for s in &settings {
            s.validate().map_err(Error::NotificationSettings)?;
        }
        rule.notification_settings = settings;
    }

    if let Some(metadata) = &alert.metadata {
        rule.metadata = AlertRuleMetadata {
            editor_settings: EditorSettings {
                simplified_query_and_expressions_section: metadata
                    .editor_settings
                    .simplified_query_and_expressions_section,
                simplified_notifications_section: metadata
                    .editor_settings
                    .simplified_notifications_section,
            },
        };
    }

    // Omitted durations are zero. On a patch, the caller keeps the stored
    // values instead, as the rule's `has_for` and `has_keep_firing_for` are unset.
    rule.for_ = node.for_.unwrap_or_default();
    rule.keep_firing_for = node.keep_firing_for.unwrap_or_default();

    rule.missing_series_evals_to_resolve = match alert.missing_series_evals_to_resolve {
        Some(value) if value < 0 => return Err(Error::NegativeMissingSeriesEvals { value }),
        Some(0) => MissingSeriesEvalsToResolve::ResetToDefault,
        Some(value) => MissingSeriesEvalsToResolve::Value(value),
        None if can_patch => MissingSeriesEvalsToResolve::PreserveExisting,
        None => MissingSeriesEvalsToResolve::Unset,
    };

    Ok(())
}

fn validate_recording_rule_fields(
    rule: &mut AlertRule,
    alert: &PostableGrafanaRule,
    limits: &RuleLimits,
    can_patch: bool,
) -> Result<(), Error> {
    if !limits.recording_rules_allowed {
        return Err(Error::RecordingRulesDisabled);
    }
    let Some(record) = &alert.record else {
        return Ok(());
    };

    validate_condition(&record.from, &rule.data, can_patch)?;

    MetricName::new(record.metric.as_str())
        .check()
        .map_err(|source| Error::InvalidMetricName { source })?;

    rule.record = compat::model_record_from_api_record(Some(record));
    rule.clear_alerting_fields();
    rule.missing_series_evals_to_resolve = MissingSeriesEvalsToResolve::Unset;

    Ok(())
}
