use crate::model::{ConnectionRecord, ToolRecord, WorkflowDocument};
use crate::plugin::display_name;
use std::io::{self, Write};

const RULE_WIDTH: usize = 50;

/// Formats a workflow into the fixed human-readable summary layout.
pub struct SummaryFormatter;

impl SummaryFormatter {
    /// Renders the full summary, one line per tool and per connection.
    pub fn format(document: &WorkflowDocument) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("{}\nWORKFLOW SUMMARY\n{}\n", rule, rule));
        if let Some(name) = document.name() {
            out.push_str(&format!("Name: {}\n", name));
        }
        out.push_str(&format!("Version: {}\n", Self::format_version(&document.version)));
        out.push_str(&format!("Tools: {}\n", document.tools.len()));
        out.push_str(&format!("Connections: {}\n", document.connections.len()));

        out.push_str("\nTOOLS:\n");
        for (i, tool) in document.tools.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, Self::format_tool(tool)));
        }

        out.push_str("\nCONNECTIONS:\n");
        for (i, connection) in document.connections.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", i + 1, Self::format_connection(connection)));
        }

        out.push_str(&rule);
        out.push('\n');
        out
    }

    /// Writes the summary to any writer.
    pub fn write_to<W: Write>(document: &WorkflowDocument, writer: &mut W) -> io::Result<()> {
        writer.write_all(Self::format(document).as_bytes())
    }

    /// Prints the summary to standard output.
    pub fn print(document: &WorkflowDocument) {
        print!("{}", Self::format(document));
    }

    /// `[<id>] <name> at (<x>, <y>)`, followed by ` -> <file>` when a file path is known.
    pub fn format_tool(tool: &ToolRecord) -> String {
        let file_info = tool
            .file_path
            .as_ref()
            .map(|path| format!(" -> {}", path))
            .unwrap_or_default();
        format!(
            "[{}] {} at ({}, {}){}",
            tool.tool_id,
            display_name(&tool.plugin),
            format_coordinate(tool.position.x),
            format_coordinate(tool.position.y),
            file_info
        )
    }

    pub fn format_connection(connection: &ConnectionRecord) -> String {
        format!(
            "Tool {} ({}) -> Tool {} ({})",
            connection.origin_tool_id,
            connection.origin_port,
            connection.destination_tool_id,
            connection.destination_port
        )
    }

    fn format_version(version: &str) -> &str {
        if version.is_empty() { "Unknown" } else { version }
    }
}

/// Whole coordinates print without a fractional part; negative zero prints as `0`.
pub(crate) fn format_coordinate(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_coordinates() {
        assert_eq!(format_coordinate(54.0), "54");
        assert_eq!(format_coordinate(-3.0), "-3");
        assert_eq!(format_coordinate(10.5), "10.5");
        assert_eq!(format_coordinate(-0.0), "0");
        assert_eq!(format_coordinate(1e20), "100000000000000000000");
        assert_eq!(format_coordinate(-5e19), "-50000000000000000000");
    }
}
