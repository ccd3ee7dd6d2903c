mod alert_rule;
pub mod duration;
mod errors;
pub mod labels;
mod limits;
mod names;
mod notifications;
mod provenance;
mod raw_value;
mod receivers;
mod states;

pub use alert_rule::{
    AlertQuery, AlertRule, AlertRuleGroup, AlertRuleGroupWithFolderFullpath, AlertRuleMetadata,
    AlertRuleWithOptionals, EditorSettings, MissingSeriesEvalsToResolve, Record,
    RelativeTimeRange, RuleType, DEFAULT_MISSING_SERIES_EVALS_TO_RESOLVE,
};
pub use errors::Error;
pub use limits::{RuleLimits, DEFAULT_MAX_RULE_GROUP_NAME_LENGTH, DEFAULT_MAX_TITLE_LENGTH};
pub use names::MetricName;
pub use notifications::NotificationSettings;
pub use provenance::Provenance;
pub use raw_value::RawValue;
pub use receivers::{Integration, Receiver};
pub use states::{exec_err_state_from_wire, no_data_state_from_wire, ExecutionErrorState, NoDataState};

// Schema helpers for use in #[schemars(schema_with = "...")] attributes of wire types.
pub use duration::{duration_schema, option_duration_schema};
