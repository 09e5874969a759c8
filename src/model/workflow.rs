use super::config::ConfigValue;
use super::metadata::{WorkflowInfo, WorkflowProperties};
use serde::{Deserialize, Serialize};

/// Everything extracted from one workflow file.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// The `yxmdVer` attribute; empty when the file does not declare one.
    pub version: String,
    /// Tools in document order.
    pub tools: Vec<ToolRecord>,
    /// Connections in document order.
    pub connections: Vec<ConnectionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub info: Option<WorkflowInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<WorkflowProperties>,
}

impl WorkflowDocument {
    pub fn with_info(mut self, info: Option<WorkflowInfo>) -> Self {
        self.info = info;
        self
    }

    pub fn with_properties(mut self, properties: Option<WorkflowProperties>) -> Self {
        self.properties = properties;
        self
    }

    /// Finds a tool by id. Duplicate ids resolve to the first one in document order.
    pub fn tool(&self, tool_id: &str) -> Option<&ToolRecord> {
        self.tools.iter().find(|t| t.tool_id == tool_id)
    }

    /// Connections leaving the given tool.
    pub fn outgoing<'a>(&'a self, tool_id: &'a str) -> impl Iterator<Item = &'a ConnectionRecord> {
        self.connections
            .iter()
            .filter(move |c| c.origin_tool_id == tool_id)
    }

    /// Connections arriving at the given tool.
    pub fn incoming<'a>(&'a self, tool_id: &'a str) -> impl Iterator<Item = &'a ConnectionRecord> {
        self.connections
            .iter()
            .filter(move |c| c.destination_tool_id == tool_id)
    }

    /// The workflow name from its metadata, if any.
    pub fn name(&self) -> Option<&str> {
        self.info.as_ref().and_then(|i| i.name.as_deref())
    }
}

/// Combines extracted parts into a [`WorkflowDocument`].
///
/// Tools and connections are not cross-checked; see [`crate::validate`] for that.
pub fn assemble(
    version: impl Into<String>,
    tools: Vec<ToolRecord>,
    connections: Vec<ConnectionRecord>,
) -> WorkflowDocument {
    WorkflowDocument {
        version: version.into(),
        tools,
        connections,
        info: None,
        properties: None,
    }
}

/// One configured tool (node) on the workflow canvas.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ToolRecord {
    pub tool_id: String,
    pub plugin: String,
    pub position: Position,
    pub annotation: Option<String>,
    pub configuration: ConfigValue,
    /// Only set for recognised file reading/writing plugins.
    pub file_path: Option<String>,
    /// `None` for GUI-only tools such as text boxes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<EngineSettings>,
}

impl ToolRecord {
    pub fn engine_kind(&self) -> EngineKind {
        self.engine
            .as_ref()
            .map(|e| e.kind)
            .unwrap_or(EngineKind::Gui)
    }
}

/// Canvas coordinates of a tool.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A directed edge from one tool's output port to another tool's input port.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConnectionRecord {
    pub origin_tool_id: String,
    pub origin_port: String,
    pub destination_tool_id: String,
    pub destination_port: String,
}

/// The engine a tool runs on, taken from its `EngineSettings` element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    pub dll: Option<String>,
    pub entry_point: Option<String>,
    pub kind: EngineKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EngineKind {
    Python,
    Dll,
    /// No engine at all; the tool only exists on the canvas.
    Gui,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Python => write!(f, "Python"),
            EngineKind::Dll => write!(f, "DLL"),
            EngineKind::Gui => write!(f, "GUI"),
        }
    }
}
