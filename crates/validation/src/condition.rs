use crate::Error;
use std::collections::BTreeMap;

/// Validate that `condition` names exactly one of the RefIDs of `queries`,
/// and that those RefIDs are present and unique.
///
/// When `can_patch`, a condition and queries which are both empty are
/// accepted as "leave both unchanged". Supplying only one of them is an error,
/// as they must change together.
pub fn validate_condition(
    condition: &str,
    queries: &[models::AlertQuery],
    can_patch: bool,
) -> Result<(), Error> {
    if can_patch && condition.is_empty() && queries.is_empty() {
        return Ok(());
    }
    if condition.is_empty() {
        return Err(Error::ConditionEmpty);
    }
    if queries.is_empty() {
        return Err(Error::NoQueries);
    }

    let mut ref_ids: BTreeMap<&str, usize> = BTreeMap::new();
    for (index, query) in queries.iter().enumerate() {
        if query.ref_id.is_empty() {
            return Err(Error::RefIdEmpty { index });
        }
        if let Some(existing) = ref_ids.insert(&query.ref_id, index) {
            return Err(Error::RefIdDuplicate {
                ref_id: query.ref_id.clone(),
                index,
                existing,
            });
        }
    }

    if !ref_ids.contains_key(condition) {
        return Err(Error::ConditionNotFound {
            condition: condition.to_string(),
            ref_ids: ref_ids.keys().map(|id| id.to_string()).collect(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::validate_condition;

    fn queries(ref_ids: &[&str]) -> Vec<models::AlertQuery> {
        ref_ids
            .iter()
            .map(|id| models::AlertQuery {
                ref_id: id.to_string(),
                ..Default::default()
            })
            .collect()
    }

    #[test]
    fn test_condition_linkage() {
        assert!(validate_condition("B", &queries(&["A", "B"]), false).is_ok());
        assert!(validate_condition("A", &queries(&["A"]), true).is_ok());

        insta::assert_snapshot!(
            validate_condition("C", &queries(&["B", "A"]), false).unwrap_err(),
            @"condition C does not exist, must be one of [A,B]"
        );
        insta::assert_snapshot!(
            validate_condition("", &queries(&["A"]), false).unwrap_err(),
            @"condition cannot be empty"
        );
        insta::assert_snapshot!(
            validate_condition("A", &[], false).unwrap_err(),
            @"no query/expressions specified"
        );
        insta::assert_snapshot!(
            validate_condition("A", &queries(&["A", ""]), false).unwrap_err(),
            @"refID is not specified for data query/expression at index 1"
        );
    }

    #[test]
    fn test_duplicate_ref_id() {
        let err = validate_condition("A", &queries(&["A", "A"]), false).unwrap_err();
        insta::assert_snapshot!(err, @"refID 'A' at index 1 is already used by query/expression at index 0");

        let err = validate_condition("B", &queries(&["B", "A", "C", "A"]), false).unwrap_err();
        insta::assert_snapshot!(err, @"refID 'A' at index 3 is already used by query/expression at index 1");
    }

    #[test]
    fn test_patches_change_condition_and_queries_together() {
        assert!(validate_condition("", &[], true).is_ok());
        assert!(validate_condition("", &[], false).is_err());

        insta::assert_snapshot!(
            validate_condition("", &queries(&["A"]), true).unwrap_err(),
            @"condition cannot be empty"
        );
        insta::assert_snapshot!(
            validate_condition("A", &[], true).unwrap_err(),
            @"no query/expressions specified"
        );
    }
}
