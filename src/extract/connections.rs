use crate::model::ConnectionRecord;
use crate::xml::XmlElement;
use tracing::{debug, warn};

/// Extracts every `Connection` under the root's `Connections` element.
///
/// A connection missing its `Origin` or `Destination` still produces a record,
/// with empty strings for that side.
pub(super) fn extract_connections(root: &XmlElement) -> Vec<ConnectionRecord> {
    let Some(connections) = root.child("Connections") else {
        debug!("Document has no Connections element");
        return Vec::new();
    };

    connections
        .children_named("Connection")
        .enumerate()
        .map(|(index, connection)| {
            let (origin_tool_id, origin_port) = read_endpoint(connection, "Origin", index);
            let (destination_tool_id, destination_port) =
                read_endpoint(connection, "Destination", index);
            ConnectionRecord {
                origin_tool_id,
                origin_port,
                destination_tool_id,
                destination_port,
            }
        })
        .collect()
}

fn read_endpoint(connection: &XmlElement, side: &str, index: usize) -> (String, String) {
    match connection.child(side) {
        Some(endpoint) => (
            endpoint.attr("ToolID").unwrap_or_default().to_string(),
            endpoint.attr("Connection").unwrap_or_default().to_string(),
        ),
        None => {
            warn!(connection = index, side, "Connection is missing an endpoint");
            (String::new(), String::new())
        }
    }
}
