use crate::model::{EngineKind, WorkflowDocument};
use crate::plugin::PluginCategory;
use itertools::Itertools;
use std::collections::BTreeMap;

/// Aggregate counts over a workflow's tools.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowStats {
    pub tool_count: usize,
    pub connection_count: usize,
    pub engine_kinds: BTreeMap<EngineKind, usize>,
    pub plugin_categories: BTreeMap<PluginCategory, usize>,
}

impl WorkflowStats {
    pub fn from_document(document: &WorkflowDocument) -> Self {
        let engine_kinds = document
            .tools
            .iter()
            .map(|t| t.engine_kind())
            .counts()
            .into_iter()
            .collect();
        let plugin_categories = document
            .tools
            .iter()
            .map(|t| PluginCategory::of(&t.plugin))
            .counts()
            .into_iter()
            .collect();

        Self {
            tool_count: document.tools.len(),
            connection_count: document.connections.len(),
            engine_kinds,
            plugin_categories,
        }
    }

    /// Tools that do not come from one of the built-in plugin families.
    pub fn custom_tool_count(&self) -> usize {
        self.plugin_categories
            .get(&PluginCategory::Custom)
            .copied()
            .unwrap_or(0)
    }
}
