use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

const STANDARD_PREFIX: &str = "AlteryxBasePluginsGui";
const GUI_TOOLKIT_PREFIX: &str = "AlteryxGuiToolkit";
const CONNECTOR_PREFIX: &str = "AlteryxConnectorGui";

/// A readable name for a plugin identifier.
///
/// Built-in plugins look like `AlteryxBasePluginsGui.DbFileInput.DbFileInput`
/// and are shortened to their last segment. Anything else (custom and
/// third-party plugins, or already short names) is returned unchanged.
pub fn display_name(plugin: &str) -> &str {
    if plugin.is_empty() {
        return "Unknown";
    }
    let is_builtin = [STANDARD_PREFIX, GUI_TOOLKIT_PREFIX, CONNECTOR_PREFIX]
        .iter()
        .any(|prefix| plugin.contains(prefix));
    if is_builtin && plugin.matches('.').count() >= 2 {
        plugin.rsplit('.').next().unwrap_or(plugin)
    } else {
        plugin
    }
}

/// Who ships a plugin, judged from its identifier prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PluginCategory {
    Standard,
    GuiToolkit,
    Connector,
    Custom,
}

impl PluginCategory {
    pub fn of(plugin: &str) -> Self {
        if plugin.starts_with(STANDARD_PREFIX) {
            PluginCategory::Standard
        } else if plugin.starts_with(GUI_TOOLKIT_PREFIX) {
            PluginCategory::GuiToolkit
        } else if plugin.starts_with(CONNECTOR_PREFIX) {
            PluginCategory::Connector
        } else {
            PluginCategory::Custom
        }
    }
}

impl fmt::Display for PluginCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PluginCategory::Standard => write!(f, "Standard Alteryx"),
            PluginCategory::GuiToolkit => write!(f, "GUI Toolkit"),
            PluginCategory::Connector => write!(f, "Connector"),
            PluginCategory::Custom => write!(f, "Custom/Third-party"),
        }
    }
}

/// Rough role of a tool in the data flow, guessed from its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolPurpose {
    Input,
    Output,
    Selection,
    Processing,
}

impl ToolPurpose {
    pub fn of(plugin: &str) -> Self {
        let name = display_name(plugin);
        if name.contains("Input") {
            ToolPurpose::Input
        } else if name.contains("Output") {
            ToolPurpose::Output
        } else if name.contains("Select") {
            ToolPurpose::Selection
        } else {
            ToolPurpose::Processing
        }
    }
}

impl fmt::Display for ToolPurpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ToolPurpose::Input => write!(f, "Data Input Tool"),
            ToolPurpose::Output => write!(f, "Data Output Tool"),
            ToolPurpose::Selection => write!(f, "Field Selection/Transformation Tool"),
            ToolPurpose::Processing => write!(f, "Processing Tool"),
        }
    }
}

/// Plugins whose configuration names a file, and where inside the
/// `Configuration` element that file path lives.
///
/// Keys are display names, see [`display_name`].
pub const FILE_PLUGINS: &[(&str, &str)] = &[
    ("DbFileInput", "File"),
    ("DbFileOutput", "File"),
    ("DynamicInput", "InputConfiguration/Configuration/File"),
    ("Directory", "Directory"),
];

/// Lookup table from plugin display name to configuration sub-path.
#[derive(Debug, Clone)]
pub struct FilePluginTable {
    entries: AHashMap<String, Vec<String>>,
}

impl Default for FilePluginTable {
    fn default() -> Self {
        let mut table = Self {
            entries: AHashMap::new(),
        };
        for (plugin, path) in FILE_PLUGINS {
            table.insert(plugin, path);
        }
        table
    }
}

impl FilePluginTable {
    pub fn empty() -> Self {
        Self {
            entries: AHashMap::new(),
        }
    }

    /// Registers or replaces the configuration path for a plugin.
    pub fn insert(&mut self, plugin: &str, config_path: &str) {
        let segments = config_path
            .split('/')
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        self.entries.insert(plugin.to_string(), segments);
    }

    /// Returns the configuration path for `plugin`, matching either the raw
    /// identifier or its display name.
    pub fn lookup(&self, plugin: &str) -> Option<&[String]> {
        self.entries
            .get(plugin)
            .or_else(|| self.entries.get(display_name(plugin)))
            .map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
