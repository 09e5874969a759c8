//! Optional consistency checks over an assembled workflow.
//!
//! Extraction never runs these: a workflow under review may well be broken,
//! and its records are passed through as found. Call [`validate`] when the
//! problems themselves are of interest.

use crate::model::WorkflowDocument;
use ahash::{AHashMap, AHashSet};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    /// A connection starts at a tool id that no tool has.
    DanglingOrigin { connection: usize, tool_id: String },
    /// A connection ends at a tool id that no tool has.
    DanglingDestination { connection: usize, tool_id: String },
    DuplicateToolId { tool_id: String, count: usize },
    EmptyToolId { tool: usize },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::DanglingOrigin {
                connection,
                tool_id,
            } => write!(
                f,
                "Connection {} starts at unknown tool '{}'",
                connection + 1,
                tool_id
            ),
            ValidationIssue::DanglingDestination {
                connection,
                tool_id,
            } => write!(
                f,
                "Connection {} ends at unknown tool '{}'",
                connection + 1,
                tool_id
            ),
            ValidationIssue::DuplicateToolId { tool_id, count } => {
                write!(f, "Tool id '{}' is used by {} tools", tool_id, count)
            }
            ValidationIssue::EmptyToolId { tool } => write!(f, "Tool {} has no id", tool + 1),
        }
    }
}

/// Checks tool ids for uniqueness and connections for dangling references.
///
/// Issues are returned in a stable order: empty ids, then duplicates in order
/// of first appearance, then connection problems in document order.
pub fn validate(document: &WorkflowDocument) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    let mut counts: AHashMap<&str, usize> = AHashMap::new();
    let mut first_seen: Vec<&str> = Vec::new();
    for (index, tool) in document.tools.iter().enumerate() {
        if tool.tool_id.is_empty() {
            issues.push(ValidationIssue::EmptyToolId { tool: index });
            continue;
        }
        let count = counts.entry(tool.tool_id.as_str()).or_insert(0);
        if *count == 0 {
            first_seen.push(tool.tool_id.as_str());
        }
        *count += 1;
    }
    for tool_id in first_seen {
        let count = counts.get(tool_id).copied().unwrap_or(0);
        if count > 1 {
            issues.push(ValidationIssue::DuplicateToolId {
                tool_id: tool_id.to_string(),
                count,
            });
        }
    }

    let known: AHashSet<&str> = document
        .tools
        .iter()
        .map(|t| t.tool_id.as_str())
        .filter(|id| !id.is_empty())
        .collect();
    for (index, connection) in document.connections.iter().enumerate() {
        if !known.contains(connection.origin_tool_id.as_str()) {
            issues.push(ValidationIssue::DanglingOrigin {
                connection: index,
                tool_id: connection.origin_tool_id.clone(),
            });
        }
        if !known.contains(connection.destination_tool_id.as_str()) {
            issues.push(ValidationIssue::DanglingDestination {
                connection: index,
                tool_id: connection.destination_tool_id.clone(),
            });
        }
    }

    for issue in &issues {
        debug!("{}", issue);
    }
    issues
}
