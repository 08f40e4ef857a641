//! Record-vs-model feature contract.

use std::collections::HashSet;

use greenca_core::errors::PredictError;
use greenca_core::models::InputRecord;

/// Check that `record` has exactly the `expected` keys, in the same order.
///
/// Reports, in priority: a key-set difference (missing and unexpected
/// names), a count difference from duplicated keys, then the first
/// out-of-order position.
pub fn check_record(expected: &[String], record: &InputRecord) -> Result<(), PredictError> {
    let keys: Vec<&str> = record.keys().collect();

    let expected_set: HashSet<&str> = expected.iter().map(String::as_str).collect();
    let key_set: HashSet<&str> = keys.iter().copied().collect();

    if expected_set != key_set {
        let missing: Vec<String> = expected
            .iter()
            .filter(|name| !key_set.contains(name.as_str()))
            .cloned()
            .collect();
        let unexpected: Vec<String> = keys
            .iter()
            .filter(|k| !expected_set.contains(**k))
            .map(|k| k.to_string())
            .collect();
        return Err(PredictError::FeatureNameMismatch {
            missing,
            unexpected,
            expected_features: expected.to_vec(),
        });
    }

    // Same key sets but a duplicated key changes the count.
    if keys.len() != expected.len() {
        return Err(PredictError::FeatureCountMismatch {
            expected: expected.len(),
            actual: keys.len(),
            expected_features: expected.to_vec(),
        });
    }

    if let Some((position, (want, got))) = expected
        .iter()
        .zip(keys.iter())
        .enumerate()
        .find(|(_, (want, got))| want.as_str() != **got)
    {
        return Err(PredictError::FeatureOrderMismatch {
            position,
            expected: want.clone(),
            found: got.to_string(),
            expected_features: expected.to_vec(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn exact_match_passes() {
        let record = InputRecord::from_entries([("a", 1.0), ("b", 2.0)]);
        assert!(check_record(&names(&["a", "b"]), &record).is_ok());
    }

    #[test]
    fn swapped_keys_report_first_position() {
        let record = InputRecord::from_entries([("b", 1.0), ("a", 2.0)]);
        let err = check_record(&names(&["a", "b"]), &record).unwrap_err();
        match err {
            PredictError::FeatureOrderMismatch {
                position,
                expected,
                found,
                ..
            } => {
                assert_eq!(position, 0);
                assert_eq!(expected, "a");
                assert_eq!(found, "b");
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn renamed_key_reports_both_sides() {
        let record = InputRecord::from_entries([("a", 1.0), ("Share_forest_area_%", 2.0)]);
        let err = check_record(&names(&["a", "NC_4"]), &record).unwrap_err();
        match err {
            PredictError::FeatureNameMismatch {
                missing,
                unexpected,
                expected_features,
            } => {
                assert_eq!(missing, names(&["NC_4"]));
                assert_eq!(unexpected, names(&["Share_forest_area_%"]));
                assert_eq!(expected_features, names(&["a", "NC_4"]));
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn short_record_names_the_missing_key() {
        let record = InputRecord::from_entries([("a", 1.0)]);
        let err = check_record(&names(&["a", "b"]), &record).unwrap_err();
        match err {
            PredictError::FeatureNameMismatch {
                missing,
                unexpected,
                ..
            } => {
                assert_eq!(missing, names(&["b"]));
                assert!(unexpected.is_empty());
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn extra_key_is_named() {
        let record = InputRecord::from_entries([("a", 1.0), ("b", 2.0), ("GDP", 3.0)]);
        let err = check_record(&names(&["a", "b"]), &record).unwrap_err();
        match err {
            PredictError::FeatureNameMismatch {
                missing,
                unexpected,
                ..
            } => {
                assert!(missing.is_empty());
                assert_eq!(unexpected, names(&["GDP"]));
            }
            other => panic!("unexpected: {other}"),
        }
    }

    #[test]
    fn duplicated_key_is_count_mismatch() {
        let record = InputRecord::from_entries([("a", 1.0), ("b", 2.0), ("a", 3.0)]);
        let err = check_record(&names(&["a", "b"]), &record).unwrap_err();
        assert!(matches!(
            err,
            PredictError::FeatureCountMismatch {
                expected: 2,
                actual: 3,
                ..
            }
        ));
    }
}
