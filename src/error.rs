use thiserror::Error;

/// Errors that can occur while loading a workflow file into an XML tree.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("Workflow file '{path}' does not exist")]
    NotFound { path: String },

    #[error("Could not read workflow file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Workflow document is not well-formed XML (at byte {position}): {message}")]
    Malformed { position: u64, message: String },
}

/// Errors that can occur while extracting records from a loaded document.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("Tool '{tool_id}' has a non-numeric {axis} position: '{value}'")]
    InvalidPosition {
        tool_id: String,
        axis: &'static str,
        value: String,
    },
}

/// Errors that can occur while writing an assembled workflow out.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WriteError {
    #[error("Failed to serialize workflow to JSON: {0}")]
    Serialize(String),

    #[error("Could not write to '{path}': {message}")]
    Io { path: String, message: String },
}

/// Any failure along the load → extract → write pipeline.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Write(#[from] WriteError),
}
