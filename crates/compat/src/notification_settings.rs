use models::duration;

pub fn notification_settings_from_api(
    ns: Option<&definitions::AlertRuleNotificationSettings>,
) -> Vec<models::NotificationSettings> {
    let Some(ns) = ns else {
        return Vec::new();
    };
    vec![models::NotificationSettings {
        receiver: ns.receiver.clone(),
        group_by: ns.group_by.clone(),
        group_wait: ns.group_wait,
        group_interval: ns.group_interval,
        repeat_interval: ns.repeat_interval,
        mute_time_intervals: ns.mute_time_intervals.clone(),
        active_time_intervals: ns.active_time_intervals.clone(),
    }]
}

/// Only the first of the rule's settings is representable on the wire.
pub fn api_notification_settings_from_notification_settings(
    ns: &[models::NotificationSettings],
) -> Option<definitions::AlertRuleNotificationSettings> {
    let m = ns.first()?;
    Some(definitions::AlertRuleNotificationSettings {
        receiver: m.receiver.clone(),
        group_by: m.group_by.clone(),
        group_wait: m.group_wait,
        group_interval: m.group_interval,
        repeat_interval: m.repeat_interval,
        mute_time_intervals: m.mute_time_intervals.clone(),
        active_time_intervals: m.active_time_intervals.clone(),
    })
}

pub fn notification_settings_export_from_notification_settings(
    ns: &[models::NotificationSettings],
) -> Option<definitions::AlertRuleNotificationSettingsExport> {
    let m = ns.first()?;
    Some(definitions::AlertRuleNotificationSettingsExport {
        receiver: m.receiver.clone(),
        group_by: m.group_by.clone(),
        group_wait: m.group_wait.map(duration::format),
        group_interval: m.group_interval.map(duration::format),
        repeat_interval: m.repeat_interval.map(duration::format),
        mute_time_intervals: m.mute_time_intervals.clone(),
        active_time_intervals: m.active_time_intervals.clone(),
    })
}

pub fn model_record_from_api_record(r: Option<&definitions::Record>) -> Option<models::Record> {
    r.map(|r| models::Record {
        metric: models::MetricName::new(r.metric.as_str()),
        from: r.from.clone(),
        target_datasource_uid: r.target_datasource_uid.clone(),
    })
}

pub fn api_record_from_model_record(r: Option<&models::Record>) -> Option<definitions::Record> {
    r.map(|r| definitions::Record {
        metric: r.metric.to_string(),
        from: r.from.clone(),
        target_datasource_uid: r.target_datasource_uid.clone(),
    })
}

pub fn record_export_from_model_record(
    r: Option<&models::Record>,
) -> Option<definitions::AlertRuleRecordExport> {
    r.map(|r| definitions::AlertRuleRecordExport {
        metric: r.metric.to_string(),
        from: r.from.clone(),
        target_datasource_uid: crate::omit_default(r.target_datasource_uid.clone()),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_settings_conversions() {
        let api = definitions::AlertRuleNotificationSettings {
            receiver: "ops".to_string(),
            group_by: vec!["alertname".into(), "grafana_folder".into()],
            group_wait: Some(Duration::from_secs(30)),
            repeat_interval: Some(Duration::from_secs(4 * 3600)),
            mute_time_intervals: vec!["weekends".into()],
            ..Default::default()
        };
        let domain = notification_settings_from_api(Some(&api));
        assert_eq!(domain.len(), 1);
        assert_eq!(
            api_notification_settings_from_notification_settings(&domain),
            Some(api)
        );

        insta::assert_json_snapshot!(
            notification_settings_export_from_notification_settings(&domain),
            @r###"
        {
          "receiver": "ops",
          "group_by": [
            "alertname",
            "grafana_folder"
          ],
          "group_wait": "30s",
          "repeat_interval": "4h",
          "mute_time_intervals": [
            "weekends"
          ]
        }
        "###
        );

        assert!(notification_settings_from_api(None).is_empty());
        assert_eq!(api_notification_settings_from_notification_settings(&[]), None);
    }

    #[test]
    fn test_record_conversions() {
        let api = definitions::Record {
            metric: "job:up:sum".to_string(),
            from: "A".to_string(),
            target_datasource_uid: String::new(),
        };
        let domain = model_record_from_api_record(Some(&api));
        assert_eq!(api_record_from_model_record(domain.as_ref()), Some(api));

        let export = record_export_from_model_record(domain.as_ref()).unwrap();
        assert_eq!(export.target_datasource_uid, None);
        assert_eq!(model_record_from_api_record(None), None);
    }
}
