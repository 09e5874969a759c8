use crate::model::{DescriptionLink, WorkflowInfo, WorkflowProperties};
use crate::xml::XmlElement;

/// Reads `Properties/MetaInfo`, if the workflow has one.
pub(super) fn extract_info(root: &XmlElement) -> Option<WorkflowInfo> {
    let meta = root.find("Properties/MetaInfo")?;

    let description_link = meta.child("DescriptionLink").map(|link| DescriptionLink {
        actual: link.attr("actual").unwrap_or_default().to_string(),
        displayed: link.attr("displayed").unwrap_or_default().to_string(),
        text: link.text().map(str::to_string),
    });

    Some(WorkflowInfo {
        name: meta.child_text("Name"),
        description: meta.child_text("Description"),
        author: meta.child_text("Author"),
        company: meta.child_text("Company"),
        copyright: meta.child_text("Copyright"),
        root_tool_name: meta.child_text("RootToolName"),
        tool_version: meta.child_text("ToolVersion"),
        category_name: meta.child_text("CategoryName"),
        search_tags: meta.child_text("SearchTags"),
        name_is_filename: value_attr(meta, "NameIsFileName"),
        tool_in_db: value_attr(meta, "ToolInDb"),
        description_link,
    })
}

/// Reads the workflow-wide settings under the root's `Properties`.
/// Returns `None` when none of them are present.
pub(super) fn extract_properties(root: &XmlElement) -> Option<WorkflowProperties> {
    let props = root.child("Properties")?;

    let properties = WorkflowProperties {
        memory_default: props
            .child("Memory")
            .and_then(|m| m.attr("default"))
            .map(str::to_string),
        global_record_limit: value_attr(props, "GlobalRecordLimit"),
        zoom_level: value_attr(props, "ZoomLevel"),
        layout_type: props.child_text("LayoutType"),
    };

    (!properties.is_empty()).then_some(properties)
}

fn value_attr(parent: &XmlElement, name: &str) -> Option<String> {
    parent
        .child(name)
        .and_then(|e| e.attr("value"))
        .map(str::to_string)
}
