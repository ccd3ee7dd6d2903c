use crate::{validate_rule_node, Error};
use definitions::PostableRuleGroupConfig;
use models::{AlertRuleWithOptionals, RuleLimits};
use std::collections::hash_map::{Entry, HashMap};

/// Validate a submitted rule group, producing its rules in declared order.
///
/// The group name and interval are checked first, and failures there are
/// returned immediately. Failures of individual rules are collected, and are
/// returned together as Error::Rules.
pub fn validate_rule_group(
    config: &PostableRuleGroupConfig,
    org_id: i64,
    namespace_uid: &str,
    limits: &RuleLimits,
) -> Result<Vec<AlertRuleWithOptionals>, Error> {
    if config.name.is_empty() {
        return Err(Error::GroupNameEmpty);
    }
    if config.name.chars().count() > limits.max_rule_group_name_length {
        return Err(Error::GroupNameTooLong {
            max: limits.max_rule_group_name_length,
        });
    }

    let interval = if config.interval.is_zero() {
        limits.default_rule_evaluation_interval
    } else {
        let seconds = config.interval.as_secs() as i64;
        let base = limits.base_interval.as_secs() as i64;

        if seconds == 0 || (base != 0 && seconds % base != 0) {
            return Err(Error::GroupInterval { seconds, base });
        }
        config.interval
    };

    let mut out = Vec::with_capacity(config.rules.len());
    let mut errors = Vec::new();
    let mut uids: HashMap<&str, usize> = HashMap::new();

    for (index, node) in config.rules.iter().enumerate() {
        let validated = validate_rule_node(
            node,
            &config.name,
            interval,
            org_id,
            namespace_uid,
            limits,
        );

        // UIDs are tracked even for rules which fail validation.
        // Duplicates are reported against the first use.
        let mut duplicate = None;
        if let Some(alert) = node.grafana_alert.as_ref().filter(|a| !a.uid.is_empty()) {
            match uids.entry(alert.uid.as_str()) {
                Entry::Occupied(entry) => {
                    duplicate = Some(Error::DuplicateUid {
                        index,
                        uid: alert.uid.clone(),
                        existing: *entry.get(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(index);
                }
            }
        }

        let mut rule = match (validated, duplicate) {
            (Ok(rule), None) => rule,
            (validated, duplicate) => {
                if let Err(err) = validated {
                    errors.push(Error::Rule {
                        index,
                        source: Box::new(err),
                    });
                }
                errors.extend(duplicate);
                continue;
            }
        };

        let alert = node.grafana_alert.as_ref();
        let is_alerting = rule.record.is_none();

        rule.is_paused = alert.and_then(|a| a.is_paused).unwrap_or_default();
        rule.rule_group_index = index as i64 + 1;

        out.push(AlertRuleWithOptionals {
            rule,
            has_pause: alert.map_or(false, |a| a.is_paused.is_some()),
            has_editor_settings: alert.map_or(false, |a| a.metadata.is_some()),
            has_for: is_alerting && node.for_.is_some(),
            has_keep_firing_for: is_alerting && node.keep_firing_for.is_some(),
        });
    }

    if !errors.is_empty() {
        tracing::debug!(
            group = %config.name,
            rules = config.rules.len(),
            errors = errors.len(),
            "rule group failed validation"
        );
        return Err(Error::Rules(errors));
    }

    tracing::debug!(
        group = %config.name,
        rules = out.len(),
        interval_seconds = interval.as_secs(),
        "validated rule group"
    );
    Ok(out)
}
