use serde::{Deserialize, Serialize};

/// Descriptive metadata from the workflow's `Properties/MetaInfo` element.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowInfo {
    pub name: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
    pub company: Option<String>,
    pub copyright: Option<String>,
    pub root_tool_name: Option<String>,
    pub tool_version: Option<String>,
    pub category_name: Option<String>,
    pub search_tags: Option<String>,
    pub name_is_filename: Option<String>,
    pub tool_in_db: Option<String>,
    pub description_link: Option<DescriptionLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DescriptionLink {
    pub actual: String,
    pub displayed: String,
    pub text: Option<String>,
}

/// Workflow-wide runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WorkflowProperties {
    pub memory_default: Option<String>,
    pub global_record_limit: Option<String>,
    pub zoom_level: Option<String>,
    pub layout_type: Option<String>,
}

impl WorkflowProperties {
    pub fn is_empty(&self) -> bool {
        self.memory_default.is_none()
            && self.global_record_limit.is_none()
            && self.zoom_level.is_none()
            && self.layout_type.is_none()
    }
}
