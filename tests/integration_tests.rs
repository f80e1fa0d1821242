// tests/integration_tests.rs
//
// End-to-end validation flow: table config JSON + sample event JSON in,
// per-column report out.

use transform_check::Value;
use transform_check::cli::{CliError, ValidateOptions, ValidateReport, execute_validate};

fn validate(table_json: &str, sample_json: &str) -> Result<ValidateReport, CliError> {
    execute_validate(&ValidateOptions {
        table_json: table_json.to_string(),
        sample_json: sample_json.to_string(),
    })
}

const TABLE: &str = r#"{
  "tableName": "events",
  "ingestionConfig": {
    "transformConfigs": [
      {"columnName": "user_id", "transformFunction": "jsonPathInt($, '$.user.id')"},
      {"columnName": "region", "transformFunction": "coalesce(jsonPathString($, '$.geo.region'), 'unknown')"},
      {"columnName": "ts_millis", "transformFunction": "fromDateTime(jsonPathString($, '$.created_at'), 'yyyy-MM-dd')"}
    ]
  }
}"#;

const SAMPLE: &str = r#"{
  "user": {"id": 123},
  "geo": {},
  "created_at": "2024-01-01T00:00:00Z"
}"#;

#[test]
fn test_happy_path_report() {
    let report = validate(TABLE, SAMPLE).unwrap();

    assert_eq!(report.table_name.as_deref(), Some("events"));
    assert_eq!(report.outcomes.len(), 3);

    assert_eq!(report.outcomes[0].column, "user_id");
    assert_eq!(report.outcomes[0].value, Value::Integer(123));

    // geo.region is missing; coalesce falls back to the literal
    assert_eq!(report.outcomes[1].value, Value::String("unknown".to_string()));

    assert_eq!(report.outcomes[2].value, Value::Integer(1704067200000));

    assert!(report.ok());
}

#[test]
fn test_null_outcome_fails_overall() {
    let sample = r#"{"geo": {}, "created_at": "2024-01-01T00:00:00Z"}"#;
    let report = validate(TABLE, sample).unwrap();

    assert_eq!(report.outcomes[0].value, Value::Null);
    assert!(!report.ok());

    let rendered = report.render(false);
    assert!(rendered.contains("-> null"));
    assert!(rendered.contains("One or more transforms returned null"));
}

#[test]
fn test_empty_string_outcome_still_ok() {
    let table = r#"{
      "ingestionConfig": {
        "transformConfigs": [
          {"columnName": "note", "transformFunction": "jsonPathString($, '$.note')"}
        ]
      }
    }"#;
    let report = validate(table, r#"{"note": ""}"#).unwrap();

    assert_eq!(report.outcomes[0].value, Value::String(String::new()));
    assert!(report.ok());
    assert!(report.render(false).contains("All transforms produced values"));
}

#[test]
fn test_report_rendering_format() {
    let report = validate(TABLE, SAMPLE).unwrap();
    let rendered = report.render(false);

    assert!(rendered.starts_with("Validating transforms for table: events\n"));
    assert!(rendered.contains("- user_id <= jsonPathInt($, '$.user.id')\n  -> 123\n"));
    assert!(rendered.contains("- region <= coalesce(jsonPathString($, '$.geo.region'), 'unknown')\n  -> \"unknown\"\n"));
}

#[test]
fn test_missing_transform_configs_is_reported_not_an_error() {
    let report = validate(r#"{"tableName": "events"}"#, "{}").unwrap();
    assert!(report.outcomes.is_empty());
    assert_eq!(report.render(false), "No transformConfigs found.\n");

    let report = validate(r#"{"ingestionConfig": {}}"#, "{}").unwrap();
    assert!(report.outcomes.is_empty());
}

#[test]
fn test_composite_passthrough_renders_as_json() {
    let table = r#"{
      "ingestionConfig": {
        "transformConfigs": [
          {"columnName": "user", "transformFunction": "jsonPathString($, '$.user')"}
        ]
      }
    }"#;
    let report = validate(table, r#"{"user": {"id": 123, "name": "ada"}}"#).unwrap();

    // Object keys are sorted, so compact rendering is deterministic
    assert!(report.render(false).contains("-> {\"id\":123,\"name\":\"ada\"}"));
}

#[test]
fn test_pretty_rendering_indents_composites() {
    let table = r#"{
      "ingestionConfig": {
        "transformConfigs": [
          {"columnName": "user", "transformFunction": "jsonPathString($, '$.user')"}
        ]
      }
    }"#;
    let report = validate(table, r#"{"user": {"id": 123}}"#).unwrap();

    let rendered = report.render(true);
    assert!(rendered.contains("-> {\n  \"id\": 123\n}"));
}

#[test]
fn test_invalid_json_is_an_error() {
    assert!(matches!(validate("{not json", "{}"), Err(CliError::Json(_))));
    assert!(matches!(validate("{}", "{not json"), Err(CliError::Json(_))));
}

#[test]
fn test_malformed_config_entry_is_an_error() {
    let table = r#"{
      "ingestionConfig": {
        "transformConfigs": [
          {"columnName": "ok", "transformFunction": "'x'"},
          {"columnName": "missing_function"}
        ]
      }
    }"#;
    assert!(matches!(
        validate(table, "{}"),
        Err(CliError::InvalidTransform(1))
    ));
}
