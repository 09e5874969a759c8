use super::summary::format_coordinate;
use crate::model::WorkflowDocument;
use crate::plugin::{ToolPurpose, display_name};
use crate::stats::WorkflowStats;

/// Per-tool report with plugin, position, file, engine and a guessed purpose,
/// followed by workflow statistics.
pub struct DetailFormatter;

impl DetailFormatter {
    pub fn format(document: &WorkflowDocument) -> String {
        let mut out = String::from("DETAILED TOOL ANALYSIS:\n");
        out.push_str(&"-".repeat(30));
        out.push('\n');

        for tool in &document.tools {
            out.push_str(&format!("\nTool ID: {}\n", tool.tool_id));
            out.push_str(&format!("  Type: {}\n", display_name(&tool.plugin)));
            out.push_str(&format!("  Full Plugin: {}\n", tool.plugin));
            out.push_str(&format!(
                "  Position: ({}, {})\n",
                format_coordinate(tool.position.x),
                format_coordinate(tool.position.y)
            ));
            if let Some(file) = &tool.file_path {
                out.push_str(&format!("  File: {}\n", file));
            }
            if let Some(annotation) = &tool.annotation {
                out.push_str(&format!("  Annotation: {}\n", annotation));
            }
            out.push_str(&format!("  Engine: {}\n", tool.engine_kind()));
            out.push_str(&format!("  Purpose: {}\n", ToolPurpose::of(&tool.plugin)));
        }

        out.push_str(&Self::format_stats(&WorkflowStats::from_document(document)));
        out
    }

    pub fn format_stats(stats: &WorkflowStats) -> String {
        let mut out = String::from("\nNode Statistics:\n");
        out.push_str(&format!("  Total nodes: {}\n", stats.tool_count));
        out.push_str(&format!("  Connections: {}\n", stats.connection_count));
        out.push_str("  Engine types:\n");
        for (kind, count) in &stats.engine_kinds {
            out.push_str(&format!("    {}: {}\n", kind, count));
        }
        out.push_str("  Plugin categories:\n");
        for (category, count) in &stats.plugin_categories {
            out.push_str(&format!("    {}: {}\n", category, count));
        }
        out.push_str(&format!("  Custom tools: {}\n", stats.custom_tool_count()));
        out
    }
}
