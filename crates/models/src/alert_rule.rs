use crate::{labels, Error, ExecutionErrorState, MetricName, NoDataState, NotificationSettings, RawValue};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use std::time::Duration;

/// Number of consecutive evaluations without a series after which its alert
/// is resolved, when a rule doesn't specify otherwise.
pub const DEFAULT_MISSING_SERIES_EVALS_TO_RESOLVE: i64 = 2;

/// AlertRule is the stored definition of an alerting or recording rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRule {
    pub id: i64,
    pub org_id: i64,
    pub uid: String,
    pub title: String,
    /// RefID of the query or expression whose result decides whether the rule fires.
    /// Empty for recording rules.
    pub condition: String,
    pub data: Vec<AlertQuery>,
    pub updated: DateTime<Utc>,
    pub interval_seconds: i64,
    pub version: i64,
    /// UID of the folder which contains the rule.
    pub namespace_uid: String,
    pub dashboard_uid: Option<String>,
    pub panel_id: Option<i64>,
    pub rule_group: String,
    /// 1-based position of the rule within its group.
    pub rule_group_index: i64,
    pub record: Option<Record>,
    /// None when not set, which on a patch means "keep the stored state".
    pub no_data_state: Option<NoDataState>,
    pub exec_err_state: Option<ExecutionErrorState>,
    pub for_: Duration,
    pub keep_firing_for: Duration,
    pub annotations: BTreeMap<String, String>,
    pub labels: BTreeMap<String, String>,
    pub is_paused: bool,
    /// At most one element is currently supported.
    pub notification_settings: Vec<NotificationSettings>,
    pub metadata: AlertRuleMetadata,
    pub missing_series_evals_to_resolve: MissingSeriesEvalsToResolve,
}

/// A query or expression evaluated as part of a rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertQuery {
    pub ref_id: String,
    pub query_type: String,
    pub relative_time_range: RelativeTimeRange,
    pub datasource_uid: String,
    /// Datasource-specific query definition.
    pub model: RawValue,
}

/// Time range of a query, as offsets before the evaluation time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RelativeTimeRange {
    pub from: Duration,
    pub to: Duration,
}

/// Record makes a rule a recording rule, which writes the result
/// of a query as a new metric.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub metric: MetricName,
    /// RefID of the query or expression which produces the recorded value.
    pub from: String,
    /// Empty if the rule writes to the default datasource.
    pub target_datasource_uid: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleType {
    Alerting,
    Recording,
}

impl std::fmt::Display for RuleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RuleType::Alerting => "alerting",
            RuleType::Recording => "recording",
        })
    }
}

/// Hints for how the rule editor presents the rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertRuleMetadata {
    pub editor_settings: EditorSettings,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorSettings {
    pub simplified_query_and_expressions_section: bool,
    pub simplified_notifications_section: bool,
}

/// Setting for the number of missing evaluations after which a series is resolved.
/// The wire format encodes this as an optional integer, with `-1` standing in
/// for "preserve the stored value".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingSeriesEvalsToResolve {
    /// Not specified on a new rule.
    #[default]
    Unset,
    /// Explicitly cleared, so the system default applies.
    ResetToDefault,
    /// Not specified on a patch of an existing rule.
    PreserveExisting,
    Value(i64),
}

const PRESERVE_EXISTING_SENTINEL: i64 = -1;

impl MissingSeriesEvalsToResolve {
    pub fn from_wire(value: Option<i64>) -> Self {
        match value {
            None => Self::Unset,
            Some(PRESERVE_EXISTING_SENTINEL) => Self::PreserveExisting,
            Some(n) => Self::Value(n),
        }
    }

    pub fn to_wire(&self) -> Option<i64> {
        match self {
            Self::Unset | Self::ResetToDefault => None,
            Self::PreserveExisting => Some(PRESERVE_EXISTING_SENTINEL),
            Self::Value(n) => Some(*n),
        }
    }

    /// The concrete configured value, if there is one.
    pub fn value(&self) -> Option<i64> {
        match self {
            Self::Value(n) => Some(*n),
            _ => None,
        }
    }
}

impl AlertRule {
    pub fn rule_type(&self) -> RuleType {
        if self.record.is_some() {
            RuleType::Recording
        } else {
            RuleType::Alerting
        }
    }

    pub fn missing_series_evals_to_resolve_or_default(&self) -> i64 {
        self.missing_series_evals_to_resolve
            .value()
            .unwrap_or(DEFAULT_MISSING_SERIES_EVALS_TO_RESOLVE)
    }

    /// Clear every field which only applies to alerting rules.
    pub fn clear_alerting_fields(&mut self) {
        self.condition = String::new();
        self.no_data_state = None;
        self.exec_err_state = None;
        self.for_ = Duration::ZERO;
        self.keep_firing_for = Duration::ZERO;
        self.notification_settings = Vec::new();
    }

    /// Populate the dashboard and panel linkage of the rule from its annotations.
    /// Both annotations must be present, or neither.
    pub fn set_dashboard_and_panel_from_annotations(&mut self) -> Result<(), Error> {
        let dashboard_uid = self
            .annotations
            .get(labels::DASHBOARD_UID_ANNOTATION)
            .map(String::as_str)
            .unwrap_or_default();
        let panel_id = self
            .annotations
            .get(labels::PANEL_ID_ANNOTATION)
            .map(String::as_str)
            .unwrap_or_default();

        match (dashboard_uid.is_empty(), panel_id.is_empty()) {
            (true, true) => Ok(()),
            (false, false) => {
                let parsed: i64 = panel_id.parse().map_err(|_| Error::InvalidPanelId {
                    annotation: labels::PANEL_ID_ANNOTATION,
                    value: panel_id.to_string(),
                })?;
                self.dashboard_uid = Some(dashboard_uid.to_string());
                self.panel_id = Some(parsed);
                Ok(())
            }
            _ => Err(Error::DashboardPanelMismatch {
                dashboard: labels::DASHBOARD_UID_ANNOTATION,
                panel: labels::PANEL_ID_ANNOTATION,
            }),
        }
    }
}

/// AlertRuleWithOptionals is a validated rule along with markers of which
/// optional inputs were actually supplied. Unsupplied inputs of a patch
/// leave the stored values unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRuleWithOptionals {
    pub rule: AlertRule,
    pub has_pause: bool,
    pub has_editor_settings: bool,
    pub has_for: bool,
    pub has_keep_firing_for: bool,
}

/// A group of rules which share a folder and evaluation interval.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRuleGroup {
    pub title: String,
    pub folder_uid: String,
    pub interval_seconds: i64,
    pub provenance: crate::Provenance,
    pub rules: Vec<AlertRule>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlertRuleGroupWithFolderFullpath {
    pub org_id: i64,
    pub group: AlertRuleGroup,
    /// Slash-separated titles of the folder and its parents.
    pub folder_fullpath: String,
}

#[cfg(test)]
mod test {
    use super::*;

    fn annotated(pairs: &[(&str, &str)]) -> AlertRule {
        AlertRule {
            annotations: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_dashboard_and_panel_linkage() {
        let mut rule = annotated(&[("summary", "cpu is high")]);
        rule.set_dashboard_and_panel_from_annotations().unwrap();
        assert_eq!((rule.dashboard_uid, rule.panel_id), (None, None));

        let mut rule = annotated(&[("__dashboardUid__", "abc123"), ("__panelId__", "42")]);
        rule.set_dashboard_and_panel_from_annotations().unwrap();
        assert_eq!(
            (rule.dashboard_uid.as_deref(), rule.panel_id),
            (Some("abc123"), Some(42))
        );
    }

    #[test]
    fn test_dashboard_and_panel_linkage_errors() {
        let err = annotated(&[("__dashboardUid__", "abc123")])
            .set_dashboard_and_panel_from_annotations()
            .unwrap_err();
        insta::assert_snapshot!(err, @"both annotations __dashboardUid__ and __panelId__ must be specified");
        assert!(err.is_failed_validation());

        let err = annotated(&[("__dashboardUid__", ""), ("__panelId__", "7")])
            .set_dashboard_and_panel_from_annotations()
            .unwrap_err();
        assert!(matches!(err, Error::DashboardPanelMismatch { .. }));

        let err = annotated(&[("__dashboardUid__", "abc123"), ("__panelId__", "seven")])
            .set_dashboard_and_panel_from_annotations()
            .unwrap_err();
        insta::assert_snapshot!(err, @"annotation __panelId__ must be a valid integer Panel ID");
    }

    #[test]
    fn test_missing_series_wire_encoding() {
        use MissingSeriesEvalsToResolve::*;

        for (wire, expect) in [
            (None, Unset),
            (Some(-1), PreserveExisting),
            (Some(0), Value(0)),
            (Some(5), Value(5)),
        ] {
            assert_eq!(MissingSeriesEvalsToResolve::from_wire(wire), expect);
            assert_eq!(expect.to_wire(), wire);
        }
        assert_eq!(ResetToDefault.to_wire(), None);
    }

    #[test]
    fn test_rule_type_and_defaults() {
        let mut rule = AlertRule::default();
        assert_eq!(rule.rule_type(), RuleType::Alerting);
        assert_eq!(rule.missing_series_evals_to_resolve_or_default(), 2);

        rule.missing_series_evals_to_resolve = MissingSeriesEvalsToResolve::Value(4);
        assert_eq!(rule.missing_series_evals_to_resolve_or_default(), 4);

        rule.condition = "B".to_string();
        rule.for_ = Duration::from_secs(60);
        rule.no_data_state = Some(NoDataState::NoData);
        rule.notification_settings = vec![NotificationSettings::default()];
        rule.record = Some(Record {
            metric: MetricName::new("job:up:sum"),
            from: "A".to_string(),
            target_datasource_uid: String::new(),
        });
        rule.clear_alerting_fields();

        assert_eq!(rule.rule_type(), RuleType::Recording);
        assert_eq!(rule.condition, "");
        assert_eq!(rule.no_data_state, None);
        assert_eq!(rule.for_, Duration::ZERO);
        assert!(rule.notification_settings.is_empty());
    }
}
