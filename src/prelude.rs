//! Prelude module for convenient imports
//!
//! Re-exports the types most callers need to load a workflow, look at its
//! records and print or save them.
//!
//! # Example
//!
//! ```rust,no_run
//! use yxmd::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let workflow = WorkflowParser::new().parse_file("path/to/workflow.yxmd")?;
//! println!("{} tools, {} connections", workflow.tools.len(), workflow.connections.len());
//! println!("{}", to_json_string(&workflow)?);
//! # Ok(())
//! # }
//! ```

// Loading and extraction
pub use crate::document::Document;
pub use crate::extract::{PositionPolicy, WorkflowParser, WorkflowParserBuilder};

// Data model
pub use crate::model::{
    ConfigValue, ConnectionRecord, EngineKind, EngineSettings, Position, ToolRecord,
    WorkflowDocument, WorkflowInfo, WorkflowProperties, assemble,
};

// Presenters
pub use crate::present::{DetailFormatter, SummaryFormatter, to_json_string, write_json};

// Plugin helpers and analysis
pub use crate::plugin::{FilePluginTable, PluginCategory, ToolPurpose, display_name};
pub use crate::stats::WorkflowStats;
pub use crate::validate::{ValidationIssue, validate};

// Error types
pub use crate::error::{LoadError, ParseError, WorkflowError, WriteError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
