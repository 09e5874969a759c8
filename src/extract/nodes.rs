use super::PositionPolicy;
use crate::error::ParseError;
use crate::model::{ConfigValue, EngineKind, EngineSettings, Position, ToolRecord};
use crate::plugin::FilePluginTable;
use crate::xml::XmlElement;
use tracing::{debug, warn};

/// Walks the `Nodes` collection and produces one record per `Node`.
pub(super) struct NodeExtractor<'a> {
    file_plugins: &'a FilePluginTable,
    position_policy: PositionPolicy,
}

impl<'a> NodeExtractor<'a> {
    pub(super) fn new(file_plugins: &'a FilePluginTable, position_policy: PositionPolicy) -> Self {
        Self {
            file_plugins,
            position_policy,
        }
    }

    /// Extracts all tools in document order. A missing `Nodes` element is an empty workflow.
    pub(super) fn extract(&self, root: &XmlElement) -> Result<Vec<ToolRecord>, ParseError> {
        let Some(nodes) = root.child("Nodes") else {
            debug!("Document has no Nodes element");
            return Ok(Vec::new());
        };

        nodes
            .children_named("Node")
            .map(|node| self.extract_tool(node))
            .collect()
    }

    fn extract_tool(&self, node: &XmlElement) -> Result<ToolRecord, ParseError> {
        let tool_id = node.attr("ToolID").unwrap_or_default().to_string();

        let gui_settings = node.child("GuiSettings");
        let plugin = gui_settings
            .and_then(|g| g.attr("Plugin"))
            .unwrap_or_default()
            .to_string();
        let position = match gui_settings.and_then(|g| g.child("Position")) {
            Some(element) => self.read_position(&tool_id, element)?,
            None => Position::default(),
        };

        let properties = node.child("Properties");
        let configuration = properties
            .and_then(|p| p.child("Configuration"))
            .map(ConfigValue::node_from_element)
            .unwrap_or_default();
        let annotation = properties
            .and_then(|p| p.child("Annotation"))
            .and_then(read_annotation);

        let file_path = self
            .file_plugins
            .lookup(&plugin)
            .and_then(|path| {
                properties
                    .and_then(|p| p.child("Configuration"))
                    .and_then(|c| c.find_segments(path.iter().map(String::as_str)))
            })
            .and_then(read_file_path);

        let engine = node.child("EngineSettings").map(read_engine_settings);

        Ok(ToolRecord {
            tool_id,
            plugin,
            position,
            annotation,
            configuration,
            file_path,
            engine,
        })
    }

    fn read_position(&self, tool_id: &str, element: &XmlElement) -> Result<Position, ParseError> {
        Ok(Position {
            x: self.read_coordinate(tool_id, element, "x")?,
            y: self.read_coordinate(tool_id, element, "y")?,
        })
    }

    fn read_coordinate(
        &self,
        tool_id: &str,
        element: &XmlElement,
        axis: &'static str,
    ) -> Result<f64, ParseError> {
        let Some(raw) = element.attr(axis) else {
            return Ok(0.0);
        };

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => match self.position_policy {
                PositionPolicy::Strict => Err(ParseError::InvalidPosition {
                    tool_id: tool_id.to_string(),
                    axis,
                    value: raw.to_string(),
                }),
                PositionPolicy::Lenient => {
                    warn!(
                        tool_id,
                        axis,
                        value = raw,
                        "Non-numeric position, defaulting to 0"
                    );
                    Ok(0.0)
                }
            },
        }
    }
}

/// Annotation text, preferring a user-written note over the generated default.
fn read_annotation(annotation: &XmlElement) -> Option<String> {
    annotation
        .child_text("AnnotationText")
        .or_else(|| annotation.child_text("DefaultAnnotationText"))
        .or_else(|| annotation.text().map(str::to_string))
}

fn read_file_path(file: &XmlElement) -> Option<String> {
    file.text()
        .or_else(|| file.attr("OutputFileName").filter(|v| !v.trim().is_empty()))
        .map(str::to_string)
}

fn read_engine_settings(settings: &XmlElement) -> EngineSettings {
    let dll = settings.attr("EngineDll").map(str::to_string);
    let entry_point = settings.attr("EngineDllEntryPoint").map(str::to_string);
    let kind = match dll.as_deref() {
        Some("Python") => EngineKind::Python,
        _ => EngineKind::Dll,
    };
    EngineSettings {
        dll,
        entry_point,
        kind,
    }
}
