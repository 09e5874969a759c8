//! Integration tests for yxmd
//!
//! End-to-end tests that go from a file on disk to printed and written output.
//!
mod common;
use common::*;
use std::fs;
use yxmd::prelude::*;

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_linear_workflow_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("linear.yxmd");
        let output = dir.path().join("linear.json");
        fs::write(&input, LINEAR_WORKFLOW).unwrap();

        let workflow = WorkflowParser::new()
            .parse_file(&input)
            .expect("Failed to parse workflow");
        assert_eq!(SummaryFormatter::format(&workflow), LINEAR_SUMMARY);

        write_json(&workflow, &output).expect("Failed to write JSON");
        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(value["version"], "2023.1");
        assert_eq!(value["tools"].as_array().unwrap().len(), 3);
        assert_eq!(value["connections"].as_array().unwrap().len(), 2);

        let plugins: Vec<&str> = value["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["plugin"].as_str().unwrap())
            .collect();
        assert_eq!(plugins, vec!["DbFileInput", "AlteryxSelect", "DbFileOutput"]);
    }

    #[test]
    fn test_bundled_sample_workflow() {
        let document = Document::from_file(sample_workflow_path()).expect("Failed to load sample");
        assert_eq!(document.version(), "2023.1");
        assert!(document.source().is_some());

        let workflow = WorkflowParser::new().extract(&document).unwrap();
        assert_eq!(workflow.tools.len(), 3);
        assert_eq!(workflow.connections.len(), 2);
        assert_eq!(
            workflow.tools[2].file_path.as_deref(),
            Some(r"C:\data\customers_clean.csv")
        );
        assert!(validate(&workflow).is_empty());
    }

    #[test]
    fn test_missing_file_is_a_load_error_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("does_not_exist.yxmd");
        let output = dir.path().join("out.json");

        let result = WorkflowParser::new()
            .parse_file(&input)
            .and_then(|workflow| Ok(write_json(&workflow, &output)?));

        match result {
            Err(WorkflowError::Load(LoadError::NotFound { path })) => {
                assert!(path.ends_with("does_not_exist.yxmd"));
            }
            other => panic!("Expected LoadError::NotFound, got {:?}", other),
        }
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("broken.yxmd");
        fs::write(
            &input,
            r#"<AlteryxDocument yxmdVer="2023.1"><Nodes><Node ToolID="1"></Nodes></AlteryxDocument>"#,
        )
        .unwrap();

        let result = Document::from_file(&input);
        assert!(matches!(result, Err(LoadError::Malformed { .. })));
    }

    #[test]
    fn test_latin1_workflow_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("latin1.yxmd");
        let mut bytes = br#"<?xml version="1.0" encoding="ISO-8859-1"?>
<AlteryxDocument yxmdVer="2023.1"><Nodes><Node ToolID="1"><GuiSettings Plugin="AlteryxSelect" /><Properties><Annotation><AnnotationText>Caf"#
            .to_vec();
        bytes.push(0xE9);
        bytes.extend_from_slice(
            b"</AnnotationText></Annotation></Properties></Node></Nodes></AlteryxDocument>",
        );
        fs::write(&input, bytes).unwrap();

        let workflow = WorkflowParser::new()
            .parse_file(&input)
            .expect("Latin-1 workflow should load");
        assert_eq!(workflow.tools[0].annotation.as_deref(), Some("Café"));
    }

    #[test]
    fn test_utf16_workflow_is_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("utf16.yxmd");
        let mut bytes = vec![0xFF, 0xFE];
        for unit in LINEAR_WORKFLOW
            .replace(r#"<?xml version="1.0"?>"#, r#"<?xml version="1.0" encoding="UTF-16"?>"#)
            .encode_utf16()
        {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        fs::write(&input, bytes).unwrap();

        let workflow = WorkflowParser::new().parse_file(&input).unwrap();
        assert_eq!(SummaryFormatter::format(&workflow), LINEAR_SUMMARY);
    }

    #[test]
    fn test_invalid_utf8_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("garbage.yxmd");
        fs::write(&input, b"<AlteryxDocument>\xFF\xFE\xFD</AlteryxDocument>").unwrap();

        assert!(matches!(
            Document::from_file(&input),
            Err(LoadError::Malformed { .. })
        ));
    }

    #[test]
    fn test_directory_is_not_a_workflow() {
        let dir = tempfile::tempdir().unwrap();
        let result = Document::from_file(dir.path());
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn test_reparse_is_stable() {
        let first = WorkflowParser::new()
            .parse_file(sample_workflow_path())
            .unwrap();
        let second = WorkflowParser::new()
            .parse_file(sample_workflow_path())
            .unwrap();
        assert_eq!(first, second);
    }
}
