use crate::{
    alert_query_export_from_alert_query, notification_settings_export_from_notification_settings,
    omit_default, record_export_from_model_record, rules::state_name, Error,
};
use definitions::{AlertRuleExport, AlertRuleGroupExport, AlertingFileExport, EXPORT_API_VERSION};
use models::duration;
use std::time::Duration;

/// Project a rule into its export shape, omitting unset and zero-valued fields.
pub fn alert_rule_export_from_alert_rule(rule: &models::AlertRule) -> Result<AlertRuleExport, Error> {
    let data = rule
        .data
        .iter()
        .map(alert_query_export_from_alert_query)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AlertRuleExport {
        uid: rule.uid.clone(),
        title: rule.title.clone(),
        condition: omit_default(rule.condition.clone()),
        data,
        dashboard_uid: rule.dashboard_uid.clone(),
        panel_id: rule.panel_id,
        no_data_state: omit_default(state_name(rule.no_data_state.as_ref())),
        exec_err_state: omit_default(state_name(rule.exec_err_state.as_ref())),
        for_: positive_duration_string(rule.for_),
        for_duration: rule.for_,
        keep_firing_for: positive_duration_string(rule.keep_firing_for),
        keep_firing_for_duration: rule.keep_firing_for,
        annotations: omit_default(rule.annotations.clone()),
        labels: omit_default(rule.labels.clone()),
        is_paused: rule.is_paused,
        notification_settings: notification_settings_export_from_notification_settings(
            &rule.notification_settings,
        ),
        record: record_export_from_model_record(rule.record.as_ref()),
        missing_series_evals_to_resolve: rule.missing_series_evals_to_resolve.value(),
    })
}

pub fn alert_rule_group_export_from_alert_rule_group_with_folder_fullpath(
    d: &models::AlertRuleGroupWithFolderFullpath,
) -> Result<AlertRuleGroupExport, Error> {
    let rules = d
        .group
        .rules
        .iter()
        .map(alert_rule_export_from_alert_rule)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AlertRuleGroupExport {
        org_id: d.org_id,
        name: d.group.title.clone(),
        folder: d.folder_fullpath.clone(),
        interval: duration::format(Duration::from_secs(d.group.interval_seconds.max(0) as u64)),
        interval_seconds: d.group.interval_seconds,
        rules,
    })
}

pub fn alerting_file_export_from_alert_rule_groups(
    groups: &[models::AlertRuleGroupWithFolderFullpath],
) -> Result<AlertingFileExport, Error> {
    let groups = groups
        .iter()
        .map(alert_rule_group_export_from_alert_rule_group_with_folder_fullpath)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(groups = groups.len(), "exported alert rule groups");

    Ok(AlertingFileExport {
        api_version: EXPORT_API_VERSION,
        groups,
        ..Default::default()
    })
}

fn positive_duration_string(d: Duration) -> Option<String> {
    if d.is_zero() {
        None
    } else {
        Some(duration::format(d))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::rules::test::alerting_rule;
    use models::{MissingSeriesEvalsToResolve, RawValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_alerting_rule_export() {
        let mut rule = alerting_rule();
        rule.dashboard_uid = Some("dash".to_string());
        rule.panel_id = Some(4);

        let export = alert_rule_export_from_alert_rule(&rule).unwrap();
        assert_eq!(export.data[0].model_string, r#"{"expr":"avg(cpu)"}"#);
        assert_eq!(export.for_duration, Duration::from_secs(300));
        assert_eq!(export.keep_firing_for_duration, Duration::from_secs(60));

        insta::assert_json_snapshot!(export, @r###"
        {
          "uid": "cpu-high",
          "title": "CPU is high",
          "condition": "B",
          "data": [
            {
              "refId": "A",
              "relativeTimeRange": {
                "from": 600,
                "to": 0
              },
              "datasourceUid": "prom",
              "model": {
                "expr": "avg(cpu)"
              }
            },
            {
              "refId": "B",
              "relativeTimeRange": {
                "from": 0,
                "to": 0
              },
              "datasourceUid": "__expr__",
              "model": {
                "expression": "A",
                "type": "threshold"
              }
            }
          ],
          "dashboardUid": "dash",
          "panelId": 4,
          "noDataState": "KeepLast",
          "execErrState": "Error",
          "for": "5m",
          "keepFiringFor": "1m",
          "annotations": {
            "summary": "cpu over 90%"
          },
          "labels": {
            "team": "infra"
          },
          "isPaused": true,
          "notification_settings": {
            "receiver": "ops"
          },
          "missing_series_evals_to_resolve": 3
        }
        "###);
    }

    #[test]
    fn test_empty_fields_are_omitted() {
        let rule = models::AlertRule {
            uid: "rec".to_string(),
            title: "Recorded".to_string(),
            data: vec![models::AlertQuery {
                ref_id: "A".to_string(),
                model: RawValue::from_str(r#"{"expr":"sum(up)"}"#).unwrap(),
                ..Default::default()
            }],
            record: Some(models::Record {
                metric: models::MetricName::new("job:up:sum"),
                from: "A".to_string(),
                target_datasource_uid: "mimir".to_string(),
            }),
            missing_series_evals_to_resolve: MissingSeriesEvalsToResolve::PreserveExisting,
            ..Default::default()
        };
        let export = alert_rule_export_from_alert_rule(&rule).unwrap();

        insta::assert_json_snapshot!(export, @r###"
        {
          "uid": "rec",
          "title": "Recorded",
          "data": [
            {
              "refId": "A",
              "relativeTimeRange": {
                "from": 0,
                "to": 0
              },
              "datasourceUid": "",
              "model": {
                "expr": "sum(up)"
              }
            }
          ],
          "isPaused": false,
          "record": {
            "metric": "job:up:sum",
            "from": "A",
            "targetDatasourceUid": "mimir"
          }
        }
        "###);
    }

    #[test]
    fn test_file_export_of_groups() {
        let groups = vec![models::AlertRuleGroupWithFolderFullpath {
            org_id: 1,
            group: models::AlertRuleGroup {
                title: "hosts".to_string(),
                folder_uid: "infra".to_string(),
                interval_seconds: 90,
                rules: vec![alerting_rule()],
                ..Default::default()
            },
            folder_fullpath: "Infrastructure/Hosts".to_string(),
        }];
        let export = alerting_file_export_from_alert_rule_groups(&groups).unwrap();

        assert_eq!(export.api_version, 1);
        assert_eq!(export.groups[0].interval, "1m30s");
        assert_eq!(export.groups[0].interval_seconds, 90);
        assert_eq!(export.groups[0].folder, "Infrastructure/Hosts");

        let yaml = serde_yaml::to_string(&export).unwrap();
        assert!(yaml.contains("folder: Infrastructure/Hosts"));
        assert!(!yaml.contains("contactPoints"));
    }

    #[test]
    fn test_bad_model_fails_export() {
        let mut rule = alerting_rule();
        rule.data[1].model = RawValue::from_str("\"threshold\"").unwrap();

        let err = alert_rule_export_from_alert_rule(&rule).unwrap_err();
        insta::assert_snapshot!(err, @"model of query B must be a JSON object");
    }
}
