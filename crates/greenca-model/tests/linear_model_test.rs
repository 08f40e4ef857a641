//! Tests for the JSON linear classifier handle.

use greenca_core::errors::{LoadError, PredictError};
use greenca_core::models::InputRecord;
use greenca_core::schema::FeatureSchema;
use greenca_core::traits::IModelHandle;
use greenca_model::artifact::{LinearArtifact, Scaler};
use greenca_model::LinearModel;
use test_fixtures::{fixture_path, load_fixture};

fn tiny_artifact(intercept: f64) -> LinearArtifact {
    LinearArtifact {
        format_version: 1,
        model_type: "logistic_regression".to_string(),
        feature_names_in: vec!["a".into(), "b".into()],
        coef: vec![1.0, -2.0],
        intercept,
        classes: vec![0, 1],
        scaler: None,
    }
}

/// Record keyed by the built-in identifiers, values from the example fixture.
fn example_identifier_record() -> InputRecord {
    let schema = FeatureSchema::builtin();
    let example = test_fixtures::example_record();
    InputRecord::from_entries(schema.iter().map(|f| {
        (
            f.model_identifier.clone(),
            example.values[&f.display_name],
        )
    }))
}

#[test]
fn loads_fixture_artifact() {
    let model = LinearModel::load(&fixture_path(test_fixtures::GREEN_CA_ARTIFACT)).unwrap();
    assert_eq!(model.expected_features().len(), 21);
    assert_eq!(model.expected_features()[0], "EP_0");
    assert_eq!(model.expected_features()[20], "RE_0_1");
    assert_eq!(model.name(), "green_ca_logistic");
}

#[test]
fn fixture_artifact_predicts_expected_class() {
    let model = LinearModel::load(&fixture_path(test_fixtures::GREEN_CA_ARTIFACT)).unwrap();
    let expected = test_fixtures::example_record().expected_class;
    let record = example_identifier_record();
    assert_eq!(model.predict(&record).unwrap(), expected);
    // Deterministic across calls.
    assert_eq!(model.predict(&record).unwrap(), expected);
}

#[test]
fn missing_artifact_is_not_found() {
    let err = LinearModel::load(std::path::Path::new("/nonexistent/model.json")).unwrap_err();
    assert!(matches!(err, LoadError::ArtifactNotFound { .. }));
}

#[test]
fn truncated_artifact_is_corrupt() {
    let err = LinearModel::load(&fixture_path(test_fixtures::CORRUPT_ARTIFACT)).unwrap_err();
    assert!(matches!(err, LoadError::Corrupt { .. }));
}

#[test]
fn inconsistent_artifact_is_corrupt() {
    let mut artifact = tiny_artifact(0.0);
    artifact.coef.push(3.0);
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("model.json");
    std::fs::write(&path, serde_json::to_string(&artifact).unwrap()).unwrap();

    let err = LinearModel::load(&path).unwrap_err();
    match err {
        LoadError::Corrupt { reason, .. } => assert!(reason.contains("coef has 3 entries")),
        other => panic!("unexpected: {other}"),
    }
}

#[test]
fn validation_rejects_bad_parameters() {
    let mut dup = tiny_artifact(0.0);
    dup.feature_names_in = vec!["a".into(), "a".into()];
    assert!(dup.validate().unwrap_err().contains("duplicate"));

    let mut version = tiny_artifact(0.0);
    version.format_version = 9;
    assert!(version.validate().is_err());

    let mut kind = tiny_artifact(0.0);
    kind.model_type = "random_forest".into();
    assert!(kind.validate().is_err());

    let mut classes = tiny_artifact(0.0);
    classes.classes = vec![0, 1, 2];
    assert!(classes.validate().is_err());

    let mut scale = tiny_artifact(0.0);
    scale.scaler = Some(Scaler {
        mean: vec![0.0, 0.0],
        scale: vec![1.0, 0.0],
    });
    assert!(scale.validate().is_err());

    let nan = tiny_artifact(f64::NAN);
    assert!(nan.validate().is_err());
}

#[test]
fn decision_sign_selects_class() {
    let model = LinearModel::from_artifact(tiny_artifact(0.0), "tiny").unwrap();
    // 1*3 - 2*1 = 1 > 0
    let high = InputRecord::from_entries([("a", 3.0), ("b", 1.0)]);
    assert_eq!(model.predict(&high).unwrap(), 1);
    // 1*1 - 2*1 = -1
    let low = InputRecord::from_entries([("a", 1.0), ("b", 1.0)]);
    assert_eq!(model.predict(&low).unwrap(), 0);
    // Exactly zero is the negative class.
    let zero = InputRecord::from_entries([("a", 2.0), ("b", 1.0)]);
    assert_eq!(model.predict(&zero).unwrap(), 0);
}

#[test]
fn scaler_is_applied_before_coefficients() {
    let mut artifact = tiny_artifact(0.0);
    artifact.scaler = Some(Scaler {
        mean: vec![10.0, 0.0],
        scale: vec![2.0, 1.0],
    });
    let model = LinearModel::from_artifact(artifact, "scaled").unwrap();
    // (12 - 10) / 2 * 1 - 2 * 0.25 = 0.5
    let record = InputRecord::from_entries([("a", 12.0), ("b", 0.25)]);
    assert_eq!(model.predict(&record).unwrap(), 1);
    // (11 - 10) / 2 * 1 - 2 * 0.5 = -0.5
    let record = InputRecord::from_entries([("a", 11.0), ("b", 0.5)]);
    assert_eq!(model.predict(&record).unwrap(), 0);
}

#[test]
fn returns_artifact_classes_verbatim() {
    let artifact: LinearArtifact = load_fixture(test_fixtures::NONBINARY_CLASSES_ARTIFACT);
    let model = LinearModel::from_artifact(artifact, "nonbinary").unwrap();
    assert_eq!(model.predict(&example_identifier_record()).unwrap(), 2);
}

#[test]
fn wrong_order_is_rejected_with_expected_names() {
    let model = LinearModel::from_artifact(tiny_artifact(0.0), "tiny").unwrap();
    let record = InputRecord::from_entries([("b", 1.0), ("a", 3.0)]);
    let err = model.predict(&record).unwrap_err();
    assert!(matches!(err, PredictError::FeatureOrderMismatch { position: 0, .. }));
    assert_eq!(
        err.expected_features().unwrap(),
        &["a".to_string(), "b".to_string()]
    );
}

#[test]
fn display_name_keys_are_rejected() {
    let model = LinearModel::load(&fixture_path(test_fixtures::GREEN_CA_ARTIFACT)).unwrap();
    let schema = FeatureSchema::builtin();
    let example = test_fixtures::example_record();
    let record = InputRecord::from_entries(
        schema
            .iter()
            .map(|f| (f.display_name.clone(), example.values[&f.display_name])),
    );
    let err = model.predict(&record).unwrap_err();
    match err {
        PredictError::FeatureNameMismatch {
            missing,
            unexpected,
            ..
        } => {
            assert_eq!(missing.len(), 21);
            assert_eq!(unexpected.len(), 21);
        }
        other => panic!("unexpected: {other}"),
    }
}

#[test]
fn non_finite_input_fails_inference() {
    let model = LinearModel::from_artifact(tiny_artifact(0.0), "tiny").unwrap();
    let record = InputRecord::from_entries([("a", f64::INFINITY), ("b", f64::INFINITY)]);
    let err = model.predict(&record).unwrap_err();
    assert!(matches!(err, PredictError::InferenceFailed { .. }));
}

#[test]
fn handle_is_shareable_across_threads() {
    let model = std::sync::Arc::new(
        LinearModel::load(&fixture_path(test_fixtures::GREEN_CA_ARTIFACT)).unwrap(),
    );
    let expected = test_fixtures::example_record().expected_class;
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let model = std::sync::Arc::clone(&model);
            std::thread::spawn(move || model.predict(&example_identifier_record()).unwrap())
        })
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), expected);
    }
}

#[test]
fn invalid_parameters_are_a_corrupt_load_error() {
    let mut artifact = tiny_artifact(0.0);
    artifact.coef.pop();
    match LinearModel::from_artifact(artifact, "short-coef") {
        Err(LoadError::Corrupt { path, reason }) => {
            assert_eq!(path, "short-coef");
            assert!(!reason.is_empty());
        }
        other => panic!("expected Corrupt, got {other:?}"),
    }
}

#[test]
fn record_with_extra_key_names_it() {
    let model = LinearModel::from_artifact(tiny_artifact(0.0), "tiny").unwrap();
    let record = InputRecord::from_entries([("a", 1.0), ("b", 1.0), ("c", 1.0)]);
    match model.predict(&record).unwrap_err() {
        PredictError::FeatureNameMismatch { unexpected, .. } => {
            assert_eq!(unexpected, vec!["c".to_string()]);
        }
        other => panic!("expected FeatureNameMismatch, got {other}"),
    }
}
