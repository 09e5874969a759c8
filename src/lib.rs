//! # yxmd - Alteryx Workflow Extraction
//!
//! **yxmd** reads Alteryx workflow files (`.yxmd`) and turns them into plain,
//! strongly typed Rust data: every tool with its plugin, canvas position,
//! configuration and (for file tools) the file it reads or writes, plus every
//! connection between tools. The result can be inspected in code, printed as a
//! summary, or written out as JSON.
//!
//! ## Pipeline
//!
//! 1.  **Load**: [`Document::from_file`] reads the file and builds an XML tree.
//!     Missing files and malformed XML fail with a [`LoadError`](error::LoadError).
//! 2.  **Extract**: [`WorkflowParser::extract`] walks the tree and produces
//!     [`ToolRecord`](model::ToolRecord)s and [`ConnectionRecord`](model::ConnectionRecord)s
//!     in document order.
//! 3.  **Assemble**: the records and the declared version are combined into a
//!     [`WorkflowDocument`](model::WorkflowDocument).
//! 4.  **Present**: [`SummaryFormatter`](present::SummaryFormatter) renders a
//!     human-readable summary and [`write_json`](present::write_json) writes JSON.
//!
//! Nothing is cross-checked along the way. A connection pointing at a tool
//! that does not exist is passed through as-is; run [`validate::validate`]
//! to list such problems.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yxmd::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let parser = WorkflowParser::builder()
//!         // Also pick up file paths from a custom reader plugin.
//!         .with_file_plugin("MyCsvReader", "Source/Path")
//!         .build();
//!
//!     let workflow = parser.parse_file("data/sample_workflow.yxmd")?;
//!
//!     SummaryFormatter::print(&workflow);
//!     for tool in &workflow.tools {
//!         if let Some(path) = &tool.file_path {
//!             println!("Tool {} touches {}", tool.tool_id, path);
//!         }
//!     }
//!
//!     write_json(&workflow, "parsed_workflow.json")?;
//!     Ok(())
//! }
//! ```

pub mod document;
pub mod error;
pub mod extract;
pub mod model;
pub mod plugin;
pub mod prelude;
pub mod present;
pub mod stats;
pub mod validate;
pub mod xml;

pub use document::Document;
pub use extract::{PositionPolicy, WorkflowParser, WorkflowParserBuilder};
