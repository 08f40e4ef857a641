//! Subcommands driven against the fixture artifacts.

use std::io::{Cursor, Write};

use greenca_cli::commands::predict::{self, PredictArgs};
use greenca_cli::commands::{schema, verify, EXIT_OK, EXIT_REQUEST_FAILED};
use greenca_cli::cli::GlobalArgs;
use greenca_cli::App;
use greenca_core::config::GreencaConfig;
use greenca_core::constants::{HIGH_ADVANTAGE_TEXT, LOW_ADVANTAGE_TEXT};
use greenca_core::errors::GreencaError;
use test_fixtures::{
    example_record, fixture_path, GREEN_CA_ARTIFACT, NONBINARY_CLASSES_ARTIFACT,
    SWAPPED_ORDER_ARTIFACT,
};

fn app_with_artifact(relative: &str) -> App {
    let mut config = GreencaConfig::default();
    config.model.artifact_path = Some(fixture_path(relative).display().to_string());
    App::from_config(config).unwrap()
}

fn example_values_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    let json = serde_json::to_string(&example_record().values).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

fn run_predict(app: &App, args: &PredictArgs, stdin: &str) -> (u8, String) {
    let predictor = app.predictor().unwrap();
    let mut input = Cursor::new(stdin.to_string());
    let mut out = Vec::new();
    let code = predict::execute(&app.collector(), &predictor, args, &mut input, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn predict_from_values_file_prints_the_label() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let file = example_values_file();
    let args = PredictArgs {
        values_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let (code, out) = run_predict(&app, &args, "");
    assert_eq!(code, EXIT_OK);
    assert_eq!(out.trim(), HIGH_ADVANTAGE_TEXT);
}

#[test]
fn assignments_override_the_values_file() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let file = example_values_file();
    let args = PredictArgs {
        values_file: Some(file.path().to_path_buf()),
        // Drive the decision function below zero.
        assignments: vec![
            "EP_0=0".to_string(),
            "EP_3=0".to_string(),
            "FS_0=21".to_string(),
        ],
        ..Default::default()
    };

    let (code, out) = run_predict(&app, &args, "");
    assert_eq!(code, EXIT_OK);
    assert_eq!(out.trim(), LOW_ADVANTAGE_TEXT);
}

#[test]
fn json_output_carries_severity() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let file = example_values_file();
    let args = PredictArgs {
        values_file: Some(file.path().to_path_buf()),
        json: true,
        ..Default::default()
    };

    let (_, out) = run_predict(&app, &args, "");
    let label: serde_json::Value = serde_json::from_str(out.trim()).unwrap();
    assert_eq!(label["text"], HIGH_ADVANTAGE_TEXT);
    assert_eq!(label["severity"], "success");
    assert!(label.get("code").is_none());
}

#[test]
fn interactive_predict_prompts_for_missing_fields() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let mut values = example_record().values;
    values.remove("Land_area_1000HA");
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(serde_json::to_string(&values).unwrap().as_bytes())
        .unwrap();

    let args = PredictArgs {
        values_file: Some(file.path().to_path_buf()),
        interactive: true,
        ..Default::default()
    };
    let (code, out) = run_predict(&app, &args, "35000\n");

    assert_eq!(code, EXIT_OK);
    assert!(out.contains("Please provide the following information:"));
    assert!(out.contains("Land_area_1000HA [6, 1638000]: "));
    assert!(out.trim_end().ends_with(HIGH_ADVANTAGE_TEXT));
}

#[test]
fn incomplete_form_reports_the_missing_field() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let args = PredictArgs {
        assignments: vec!["EP_0=0.5".to_string()],
        ..Default::default()
    };

    let (code, out) = run_predict(&app, &args, "");
    assert_eq!(code, EXIT_REQUEST_FAILED);
    assert!(out.contains("Exp_environment_protection_%GDP"));
}

#[test]
fn nonbinary_class_is_an_internal_error_label() {
    let app = app_with_artifact(NONBINARY_CLASSES_ARTIFACT);
    let file = example_values_file();
    let args = PredictArgs {
        values_file: Some(file.path().to_path_buf()),
        ..Default::default()
    };

    let (code, out) = run_predict(&app, &args, "");
    assert_eq!(code, EXIT_REQUEST_FAILED);
    assert!(out.contains("internal error"));
    assert!(!out.contains(HIGH_ADVANTAGE_TEXT));
}

#[test]
fn out_of_range_assignment_is_an_input_error() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let predictor = app.predictor().unwrap();
    let args = PredictArgs {
        assignments: vec!["EP_0=9".to_string()],
        ..Default::default()
    };

    let err = predict::execute(
        &app.collector(),
        &predictor,
        &args,
        &mut Cursor::new(String::new()),
        &mut Vec::new(),
    )
    .unwrap_err();
    let err = err.downcast_ref::<GreencaError>().unwrap();
    assert!(matches!(err, GreencaError::Input(_)));
    assert!(!err.is_fatal());
}

#[test]
fn strict_load_of_swapped_artifact_fails_at_startup() {
    let app = app_with_artifact(SWAPPED_ORDER_ARTIFACT);
    let err = app.predictor().unwrap_err();
    assert!(matches!(err, GreencaError::Load(_)));
    assert!(err.is_fatal());
}

#[test]
fn schema_table_lists_every_feature_in_order() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let mut out = Vec::new();
    assert_eq!(schema::execute(&app.schema, false, &mut out).unwrap(), EXIT_OK);

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 21);
    assert!(lines[0].contains("EP_0"));
    assert!(lines[3].contains("[0.0000, 0.0100]"));
    assert!(lines[20].contains("RE_0_1"));
}

#[test]
fn schema_toml_output_reloads_to_the_same_schema() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let mut out = Vec::new();
    schema::execute(&app.schema, true, &mut out).unwrap();

    let reloaded =
        greenca_core::schema::FeatureSchema::from_toml(&String::from_utf8(out).unwrap()).unwrap();
    assert_eq!(reloaded, app.schema);
}

#[test]
fn verify_passes_for_matching_artifact() {
    let app = app_with_artifact(GREEN_CA_ARTIFACT);
    let mut out = Vec::new();
    let code = verify::execute(&app.config.model, &app.schema, &mut out).unwrap();
    assert_eq!(code, EXIT_OK);
}

#[test]
fn verify_marks_positions_that_differ() {
    let app = app_with_artifact(SWAPPED_ORDER_ARTIFACT);
    let mut out = Vec::new();
    let code = verify::execute(&app.config.model, &app.schema, &mut out).unwrap();
    assert_eq!(code, EXIT_REQUEST_FAILED);

    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("model expects, in order:"));
    assert!(text.lines().any(|l| l.starts_with('*') && l.contains("EP_1")));
}

#[test]
fn config_resolves_without_reading_the_schema() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("greenca.toml");
    let schema_path = dir.path().join("absent_schema.toml");
    std::fs::write(
        &config_path,
        format!(
            "[schema]\npath = {:?}\n\n[observability]\nlog_level = \"debug\"\n",
            schema_path.display().to_string()
        ),
    )
    .unwrap();

    let global = GlobalArgs {
        config: Some(config_path),
        ..Default::default()
    };
    let config = App::load_config(&global, dir.path()).unwrap();
    assert_eq!(config.observability.effective_log_level(), "debug");

    let err = App::from_config(config).unwrap_err();
    assert!(matches!(err, GreencaError::Schema(_)));
}
