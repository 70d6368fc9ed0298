//! Tests for report structures

use constrain::config::OutputFormat;
use constrain::core::services::{ConstraintSet, Evaluator};
use constrain::output::{CheckReport, ConstraintReport, OutputMode, SpecSummary};

use crate::common::{RecordingSink, file_foo, spec};

const FOO: &str = r#"
name = "foo"
resource = "File[foo]"
properties = { ensure = ["present", "file"] }
"#;

#[test]
fn test_output_mode_from_config() {
    assert_eq!(OutputMode::from(OutputFormat::Json), OutputMode::Json);
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

#[test]
fn test_passing_report() {
    let catalog = file_foo(Some("file"));
    let sink = RecordingSink::new();
    let spec = spec(FOO);

    let outcome = Evaluator::new(&catalog, &sink).evaluate(&spec).unwrap();
    let report = CheckReport::new("strict", vec![ConstraintReport::from_outcome(&spec.reference(), &outcome)]);

    assert!(report.passed);
    assert_eq!(report.constraints[0].name, "Constraint[foo]");
    assert_eq!(report.constraints[0].checked, vec!["File[foo]"]);
    assert!(chrono::DateTime::parse_from_rfc3339(&report.checked_at).is_ok());
}

#[test]
fn test_failing_report_serializes_error() {
    let catalog = file_foo(Some("absent"));
    let sink = RecordingSink::new();
    let set = ConstraintSet::new(vec![spec(FOO)]).unwrap();

    let constraints = set
        .evaluate_all(&catalog, &sink)
        .iter()
        .map(|(spec, result)| ConstraintReport::from_result(&spec.reference(), result))
        .collect();
    let report = CheckReport::new("legacy", constraints);

    assert!(!report.passed);
    let json: serde_json::Value = serde_json::to_value(&report).unwrap();
    assert_eq!(json["mode"], "legacy");
    assert_eq!(json["passed"], false);
    let error = json["constraints"][0]["error"].as_str().unwrap();
    assert!(error.contains("File[foo]/ensure is 'absent'"));
}

#[test]
fn test_passing_entry_omits_error() {
    let report = CheckReport::new(
        "strict",
        vec![ConstraintReport {
            name: "Constraint[x]".to_string(),
            passed: true,
            checked: vec![],
            skipped: vec![],
            error: None,
        }],
    );
    let json = serde_json::to_value(&report).unwrap();
    assert!(json["constraints"][0].get("error").is_none());
}

#[test]
fn test_spec_summary() {
    let summary = SpecSummary::from(&spec(FOO));

    assert_eq!(summary.name, "foo");
    assert_eq!(summary.targets, vec!["File[foo]"]);
    assert_eq!(summary.mode, "properties");
    assert!(!summary.weak);
    assert_eq!(summary.rules, vec!["ensure allowed [present,file]"]);
}
