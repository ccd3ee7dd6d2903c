use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Limits and defaults applied when validating alert rule groups.
/// RuleLimits is typically loaded from the host's configuration;
/// every field has a default.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct RuleLimits {
    /// # Evaluation interval of groups which don't specify one.
    #[serde(with = "humantime_serde")]
    pub default_rule_evaluation_interval: Duration,
    /// # Granularity of evaluation intervals.
    /// Every rule group interval must be a whole multiple of it.
    #[serde(with = "humantime_serde")]
    pub base_interval: Duration,
    /// # Maximum length of a rule title, in characters.
    pub max_title_length: usize,
    /// # Maximum length of a rule group name, in characters.
    pub max_rule_group_name_length: usize,
    /// # Whether recording rules may be created.
    pub recording_rules_allowed: bool,
    /// # Labels which users may not set on a rule.
    pub reserved_labels: Vec<String>,
}

pub const DEFAULT_MAX_TITLE_LENGTH: usize = 190;
pub const DEFAULT_MAX_RULE_GROUP_NAME_LENGTH: usize = 190;

impl Default for RuleLimits {
    fn default() -> Self {
        Self {
            default_rule_evaluation_interval: Duration::from_secs(60),
            base_interval: Duration::from_secs(10),
            max_title_length: DEFAULT_MAX_TITLE_LENGTH,
            max_rule_group_name_length: DEFAULT_MAX_RULE_GROUP_NAME_LENGTH,
            recording_rules_allowed: true,
            reserved_labels: crate::labels::reserved(),
        }
    }
}

impl RuleLimits {
    pub fn is_reserved_label(&self, label: &str) -> bool {
        self.reserved_labels.iter().any(|l| l == label)
    }
}
