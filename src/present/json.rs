use crate::error::WriteError;
use crate::model::WorkflowDocument;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Serializes a workflow to pretty-printed JSON.
pub fn to_json_string(document: &WorkflowDocument) -> Result<String, WriteError> {
    serde_json::to_string_pretty(document).map_err(|e| WriteError::Serialize(e.to_string()))
}

/// Reads a workflow back from JSON produced by [`to_json_string`].
pub fn from_json_str(json: &str) -> Result<WorkflowDocument, serde_json::Error> {
    serde_json::from_str(json)
}

/// Writes a workflow as JSON to `path`.
///
/// The content goes to a temporary file next to `path` first and is then
/// renamed over it, so `path` either keeps its old content or gets the
/// complete new document.
pub fn write_json(document: &WorkflowDocument, path: impl AsRef<Path>) -> Result<(), WriteError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();
    let io_error = |message: String| WriteError::Io {
        path: path_str.clone(),
        message,
    };

    let json = to_json_string(document)?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(directory).map_err(|e| io_error(e.to_string()))?;
    file.write_all(json.as_bytes())
        .and_then(|_| file.write_all(b"\n"))
        .and_then(|_| file.flush())
        .map_err(|e| io_error(e.to_string()))?;
    file.persist(path).map_err(|e| io_error(e.error.to_string()))?;

    debug!("Wrote {} bytes of JSON to '{}'", json.len() + 1, path_str);
    Ok(())
}
