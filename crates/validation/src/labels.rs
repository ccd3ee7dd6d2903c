use crate::Error;
use models::RuleLimits;
use std::collections::BTreeMap;

/// Reject labels which are reserved for use by the system.
pub fn validate_labels(labels: &BTreeMap<String, String>, limits: &RuleLimits) -> Result<(), Error> {
    for key in labels.keys() {
        if limits.is_reserved_label(key) {
            return Err(Error::ReservedLabel { label: key.clone() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::validate_labels;
    use models::RuleLimits;
    use std::collections::BTreeMap;

    #[test]
    fn test_reserved_labels() {
        let limits = RuleLimits::default();
        let labels = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        assert!(validate_labels(&labels(&[("team", "infra"), ("severity", "page")]), &limits).is_ok());
        assert!(validate_labels(&labels(&[]), &limits).is_ok());

        for value in ["", "anything"] {
            let err = validate_labels(
                &labels(&[("team", "infra"), ("__grafana_receiver__", value)]),
                &limits,
            )
            .unwrap_err();
            assert_eq!(
                err.to_string(),
                "system reserved labels cannot be defined in the rule. Label __grafana_receiver__ is the reserved"
            );
        }

        // Only configured labels are reserved.
        let limits = RuleLimits {
            reserved_labels: vec!["tenant".to_string()],
            ..Default::default()
        };
        assert!(validate_labels(&labels(&[("__grafana_receiver__", "x")]), &limits).is_ok());
        assert!(validate_labels(&labels(&[("tenant", "acme")]), &limits).is_err());
    }
}
