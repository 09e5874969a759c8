//! Common test fixtures: workflow documents and helpers to build them.
use std::path::PathBuf;

/// Three tools in a line, no metadata.
///
/// `DbFileInput (1) -> AlteryxSelect (2) -> DbFileOutput (3)`
#[allow(dead_code)]
pub const LINEAR_WORKFLOW: &str = r#"<?xml version="1.0"?>
<AlteryxDocument yxmdVer="2023.1">
  <Nodes>
    <Node ToolID="1">
      <GuiSettings Plugin="DbFileInput">
        <Position x="54" y="162" />
      </GuiSettings>
      <Properties>
        <Configuration>
          <File FileFormat="0">C:\data\in.csv</File>
        </Configuration>
      </Properties>
    </Node>
    <Node ToolID="2">
      <GuiSettings Plugin="AlteryxSelect">
        <Position x="186" y="162" />
      </GuiSettings>
      <Properties>
        <Configuration>
          <SelectFields>
            <SelectField field="*Unknown" selected="True" />
          </SelectFields>
        </Configuration>
      </Properties>
    </Node>
    <Node ToolID="3">
      <GuiSettings Plugin="DbFileOutput">
        <Position x="318" y="162" />
      </GuiSettings>
      <Properties>
        <Configuration>
          <File>C:\data\out.csv</File>
        </Configuration>
      </Properties>
    </Node>
  </Nodes>
  <Connections>
    <Connection>
      <Origin ToolID="1" Connection="Output" />
      <Destination ToolID="2" Connection="Input" />
    </Connection>
    <Connection>
      <Origin ToolID="2" Connection="Output" />
      <Destination ToolID="3" Connection="Input" />
    </Connection>
  </Connections>
</AlteryxDocument>
"#;

/// The exact summary expected for [`LINEAR_WORKFLOW`].
#[allow(dead_code)]
pub const LINEAR_SUMMARY: &str = r"==================================================
WORKFLOW SUMMARY
==================================================
Version: 2023.1
Tools: 3
Connections: 2

TOOLS:
  1. [1] DbFileInput at (54, 162) -> C:\data\in.csv
  2. [2] AlteryxSelect at (186, 162)
  3. [3] DbFileOutput at (318, 162) -> C:\data\out.csv

CONNECTIONS:
  1. Tool 1 (Output) -> Tool 2 (Input)
  2. Tool 2 (Output) -> Tool 3 (Input)
==================================================
";

/// Wraps node XML snippets into a minimal document with no connections.
#[allow(dead_code)]
pub fn workflow_with_nodes(nodes: &[&str]) -> String {
    format!(
        r#"<AlteryxDocument yxmdVer="2024.2"><Nodes>{}</Nodes></AlteryxDocument>"#,
        nodes.concat()
    )
}

/// Wraps connection XML snippets into a minimal document with no tools.
#[allow(dead_code)]
pub fn workflow_with_connections(connections: &[&str]) -> String {
    format!(
        r#"<AlteryxDocument yxmdVer="2024.2"><Connections>{}</Connections></AlteryxDocument>"#,
        connections.concat()
    )
}

/// A `Node` element with the given plugin, position and configuration body.
#[allow(dead_code)]
pub fn node(tool_id: &str, plugin: &str, x: &str, y: &str, configuration: &str) -> String {
    format!(
        r#"<Node ToolID="{tool_id}"><GuiSettings Plugin="{plugin}"><Position x="{x}" y="{y}" /></GuiSettings><Properties><Configuration>{configuration}</Configuration></Properties></Node>"#
    )
}

/// Path to the sample workflow shipped with the crate.
#[allow(dead_code)]
pub fn sample_workflow_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_workflow.yxmd")
}
