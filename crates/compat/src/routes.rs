use crate::{nil_if_empty, omit_default};
use definitions::{
    AlertingFileExport, MatcherExport, NotificationPolicyExport, Route, RouteExport,
    EXPORT_API_VERSION,
};
use models::duration;

/// Export the notification policy tree of an organization.
pub fn alerting_file_export_from_route(org_id: i64, route: &Route) -> AlertingFileExport {
    AlertingFileExport {
        api_version: EXPORT_API_VERSION,
        policies: vec![NotificationPolicyExport {
            org_id,
            policy: route_export_from_route(route),
        }],
        ..Default::default()
    }
}

/// Project a route and, depth-first, all of its children.
/// Object matchers are carried in both their triple form and as HCL blocks.
pub fn route_export_from_route(route: &Route) -> RouteExport {
    let object_matchers_slice = route
        .object_matchers
        .iter()
        .map(|m| MatcherExport {
            label: m.name.clone(),
            r#match: m.match_type.to_string(),
            value: m.value.clone(),
        })
        .collect();

    RouteExport {
        receiver: route.receiver.clone(),
        group_by_str: nil_if_empty(route.group_by_str.clone()),
        r#match: route.r#match.clone(),
        match_re: route.match_re.clone(),
        matchers: route.matchers.clone(),
        object_matchers: route.object_matchers.clone(),
        object_matchers_slice,
        mute_time_intervals: nil_if_empty(route.mute_time_intervals.clone()),
        active_time_intervals: nil_if_empty(route.active_time_intervals.clone()),
        r#continue: omit_default(route.r#continue),
        routes: nil_if_empty(route.routes.iter().map(route_export_from_route).collect()),
        group_wait: route.group_wait.map(duration::format),
        group_interval: route.group_interval.map(duration::format),
        repeat_interval: route.repeat_interval.map(duration::format),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use definitions::{MatchType, Matcher, ObjectMatchers};
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn policy_tree() -> Route {
        Route {
            receiver: "default".to_string(),
            group_by_str: vec!["alertname".to_string(), "grafana_folder".to_string()],
            group_wait: Some(Duration::from_secs(30)),
            repeat_interval: Some(Duration::from_secs(4 * 3600)),
            routes: vec![
                Route {
                    receiver: "pager".to_string(),
                    object_matchers: ObjectMatchers(vec![
                        Matcher::new("severity", MatchType::Regexp, "page|critical"),
                        Matcher::new("team", MatchType::Equal, "infra"),
                    ]),
                    r#continue: true,
                    routes: vec![Route {
                        receiver: "night-pager".to_string(),
                        active_time_intervals: vec!["nights".to_string()],
                        ..Default::default()
                    }],
                    ..Default::default()
                },
                Route {
                    receiver: "dev".to_string(),
                    matchers: vec![Matcher::new("env", MatchType::NotEqual, "prod")],
                    mute_time_intervals: vec!["weekends".to_string()],
                    group_interval: Some(Duration::from_secs(300)),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_route_export_shape() {
        let export = alerting_file_export_from_route(2, &policy_tree());

        insta::assert_json_snapshot!(export, @r###"
        {
          "apiVersion": 1,
          "policies": [
            {
              "orgId": 2,
              "receiver": "default",
              "group_by": [
                "alertname",
                "grafana_folder"
              ],
              "routes": [
                {
                  "receiver": "pager",
                  "object_matchers": [
                    [
                      "severity",
                      "=~",
                      "page|critical"
                    ],
                    [
                      "team",
                      "=",
                      "infra"
                    ]
                  ],
                  "continue": true,
                  "routes": [
                    {
                      "receiver": "night-pager",
                      "active_time_intervals": [
                        "nights"
                      ]
                    }
                  ]
                },
                {
                  "receiver": "dev",
                  "matchers": [
                    "env!=\"prod\""
                  ],
                  "mute_time_intervals": [
                    "weekends"
                  ],
                  "group_interval": "5m"
                }
              ],
              "group_wait": "30s",
              "repeat_interval": "4h"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_object_matchers_slice() {
        let export = route_export_from_route(&policy_tree());
        let pager = &export.routes.as_ref().unwrap()[0];

        assert_eq!(
            pager.object_matchers_slice,
            vec![
                MatcherExport {
                    label: "severity".to_string(),
                    r#match: "=~".to_string(),
                    value: "page|critical".to_string(),
                },
                MatcherExport {
                    label: "team".to_string(),
                    r#match: "=".to_string(),
                    value: "infra".to_string(),
                },
            ]
        );
        assert_eq!(pager.group_by_str, None);
        assert_eq!(pager.r#continue, Some(true));
        assert_eq!(export.r#continue, None);
        assert!(export.object_matchers_slice.is_empty());
    }
}
