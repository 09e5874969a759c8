use crate::document::Document;
use crate::error::{ParseError, WorkflowError};
use crate::model::{WorkflowDocument, assemble};
use crate::plugin::FilePluginTable;
use std::path::Path;
use tracing::debug;

mod connections;
mod metadata;
mod nodes;

use nodes::NodeExtractor;

/// What to do when a position attribute is present but not a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PositionPolicy {
    /// Fail the extraction with [`ParseError::InvalidPosition`].
    #[default]
    Strict,
    /// Log a warning and use 0.
    Lenient,
}

/// Turns loaded workflow documents into [`WorkflowDocument`]s.
#[derive(Debug, Clone, Default)]
pub struct WorkflowParser {
    file_plugins: FilePluginTable,
    position_policy: PositionPolicy,
}

pub struct WorkflowParserBuilder {
    file_plugins: FilePluginTable,
    position_policy: PositionPolicy,
}

impl WorkflowParserBuilder {
    pub fn new() -> Self {
        Self {
            file_plugins: FilePluginTable::default(),
            position_policy: PositionPolicy::default(),
        }
    }

    /// Recognises `plugin` as a file tool whose path sits at `config_path`
    /// (`/`-separated, relative to its `Configuration` element).
    pub fn with_file_plugin(mut self, plugin: &str, config_path: &str) -> Self {
        self.file_plugins.insert(plugin, config_path);
        self
    }

    /// Replaces the built-in plugin table entirely.
    pub fn with_file_plugin_table(mut self, table: FilePluginTable) -> Self {
        self.file_plugins = table;
        self
    }

    pub fn with_position_policy(mut self, policy: PositionPolicy) -> Self {
        self.position_policy = policy;
        self
    }

    pub fn lenient_positions(self) -> Self {
        self.with_position_policy(PositionPolicy::Lenient)
    }

    pub fn build(self) -> WorkflowParser {
        WorkflowParser {
            file_plugins: self.file_plugins,
            position_policy: self.position_policy,
        }
    }
}

impl Default for WorkflowParserBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> WorkflowParserBuilder {
        WorkflowParserBuilder::new()
    }

    /// Loads the file at `path` and extracts it.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<WorkflowDocument, WorkflowError> {
        let document = Document::from_file(path)?;
        Ok(self.extract(&document)?)
    }

    /// Parses XML text and extracts it.
    pub fn parse_str(&self, xml: &str) -> Result<WorkflowDocument, WorkflowError> {
        let document = Document::from_xml_str(xml)?;
        Ok(self.extract(&document)?)
    }

    /// Extracts tools, connections and metadata from an already loaded document.
    pub fn extract(&self, document: &Document) -> Result<WorkflowDocument, ParseError> {
        let root = document.root();

        let tools = NodeExtractor::new(&self.file_plugins, self.position_policy).extract(root)?;
        let connections = connections::extract_connections(root);
        debug!(
            "Extracted {} tools and {} connections",
            tools.len(),
            connections.len()
        );

        Ok(assemble(document.version(), tools, connections)
            .with_info(metadata::extract_info(root))
            .with_properties(metadata::extract_properties(root)))
    }

    pub fn file_plugins(&self) -> &FilePluginTable {
        &self.file_plugins
    }

    pub fn position_policy(&self) -> PositionPolicy {
        self.position_policy
    }
}
