//! Tests for the summary, detail and JSON presenters.
mod common;
use common::*;
use std::fs;
use yxmd::present::from_json_str;
use yxmd::prelude::*;

fn linear() -> WorkflowDocument {
    WorkflowParser::new()
        .parse_str(LINEAR_WORKFLOW)
        .expect("Failed to parse workflow")
}

#[test]
fn test_summary_layout() {
    let summary = SummaryFormatter::format(&linear());
    assert_eq!(summary, LINEAR_SUMMARY);
}

#[test]
fn test_summary_lines_in_order() {
    let summary = SummaryFormatter::format(&linear());
    let lines: Vec<&str> = summary.lines().collect();

    let tools_at = lines.iter().position(|l| *l == "TOOLS:").unwrap();
    let connections_at = lines.iter().position(|l| *l == "CONNECTIONS:").unwrap();
    assert!(tools_at < connections_at);
    assert!(lines[tools_at + 1].starts_with("  1. [1] DbFileInput"));
    assert!(lines[tools_at + 3].starts_with("  3. [3] DbFileOutput"));
    assert!(lines[connections_at + 2].starts_with("  2. Tool 2"));
}

#[test]
fn test_summary_writes_to_any_writer() {
    let mut buffer = Vec::new();
    SummaryFormatter::write_to(&linear(), &mut buffer).unwrap();
    assert_eq!(String::from_utf8(buffer).unwrap(), LINEAR_SUMMARY);
}

#[test]
fn test_summary_unknown_version_and_fractional_positions() {
    let workflow = WorkflowParser::new()
        .parse_str(
            r#"<AlteryxDocument><Nodes><Node ToolID="5"><GuiSettings Plugin="Custom.Tool"><Position x="10.5" y="-3" /></GuiSettings></Node></Nodes></AlteryxDocument>"#,
        )
        .unwrap();
    let summary = SummaryFormatter::format(&workflow);

    assert!(summary.contains("Version: Unknown\n"));
    assert!(summary.contains("  1. [5] Custom.Tool at (10.5, -3)\n"));
}

#[test]
fn test_summary_large_whole_coordinates() {
    let workflow = WorkflowParser::new()
        .parse_str(&workflow_with_nodes(&[&node("1", "X", "1e20", "-5e19", "")]))
        .unwrap();
    let summary = SummaryFormatter::format(&workflow);

    assert!(summary.contains("  1. [1] X at (100000000000000000000, -50000000000000000000)\n"));
}

#[test]
fn test_summary_shows_workflow_name() {
    let workflow = WorkflowParser::new()
        .parse_file(sample_workflow_path())
        .unwrap();
    let summary = SummaryFormatter::format(&workflow);

    assert!(summary.contains("Name: sample_workflow\n"));
    assert!(summary.contains(r"  1. [1] DbFileInput at (54, 162) -> C:\data\customers.csv"));
    assert!(summary.contains("  2. [2] AlteryxSelect at (186, 162)\n"));
}

#[test]
fn test_json_shape() {
    let json = to_json_string(&linear()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let mut top: Vec<&String> = value.as_object().unwrap().keys().collect();
    top.sort();
    assert_eq!(top, vec!["connections", "tools", "version"]);
    assert_eq!(value["version"], "2023.1");
    assert_eq!(value["tools"].as_array().unwrap().len(), 3);
    assert_eq!(value["connections"].as_array().unwrap().len(), 2);

    let tool = &value["tools"][0];
    let mut keys: Vec<&String> = tool.as_object().unwrap().keys().collect();
    keys.sort();
    assert_eq!(
        keys,
        vec![
            "annotation",
            "configuration",
            "file_path",
            "plugin",
            "position",
            "tool_id"
        ]
    );
    assert_eq!(tool["tool_id"], "1");
    assert_eq!(tool["position"]["x"].as_f64(), Some(54.0));
    assert_eq!(tool["position"]["y"].as_f64(), Some(162.0));
    assert!(tool["annotation"].is_null());
    assert_eq!(tool["file_path"], r"C:\data\in.csv");
    assert_eq!(tool["configuration"]["File"]["#text"], r"C:\data\in.csv");
    assert_eq!(tool["configuration"]["File"]["@FileFormat"], "0");
    assert!(value["tools"][1]["file_path"].is_null());

    let connection = &value["connections"][0];
    assert_eq!(connection["origin_tool_id"], "1");
    assert_eq!(connection["origin_port"], "Output");
    assert_eq!(connection["destination_tool_id"], "2");
    assert_eq!(connection["destination_port"], "Input");
}

#[test]
fn test_json_round_trip() {
    let original = WorkflowParser::new()
        .parse_file(sample_workflow_path())
        .unwrap();
    let json = to_json_string(&original).unwrap();
    let restored = from_json_str(&json).unwrap();

    assert_eq!(restored, original);
    assert_eq!(to_json_string(&restored).unwrap(), json);
}

#[test]
fn test_write_json_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflow.json");

    write_json(&linear(), &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(from_json_str(&written).unwrap(), linear());
    // Only the target file remains; the temporary file was renamed into place.
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_json_overwrites_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("workflow.json");
    fs::write(&path, "stale").unwrap();

    write_json(&linear(), &path).unwrap();
    assert!(fs::read_to_string(&path).unwrap().starts_with('{'));
}

#[test]
fn test_write_json_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("workflow.json");

    match write_json(&linear(), &path) {
        Err(WriteError::Io { path: reported, .. }) => {
            assert!(reported.ends_with("workflow.json"));
        }
        other => panic!("Expected WriteError::Io, got {:?}", other),
    }
    assert!(!path.exists());
}

#[test]
fn test_detail_report() {
    let workflow = WorkflowParser::new()
        .parse_file(sample_workflow_path())
        .unwrap();
    let report = DetailFormatter::format(&workflow);

    assert!(report.contains("Full Plugin: AlteryxBasePluginsGui.DbFileInput.DbFileInput"));
    assert!(report.contains("Purpose: Data Input Tool"));
    assert!(report.contains("Purpose: Field Selection/Transformation Tool"));
    assert!(report.contains("Purpose: Data Output Tool"));
    assert!(report.contains("Annotation: customers.csv"));
    assert!(report.contains("Total nodes: 3"));
    assert!(report.contains("DLL: 3"));
    assert!(report.contains("Standard Alteryx: 3"));
    assert!(report.contains("Custom tools: 0"));
}
