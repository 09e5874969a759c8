use crate::xml::XmlElement;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Generic capture of a tool's configuration subtree.
///
/// Tool configurations have no common schema, so each element becomes either
/// its text or a mapping of its children. Attribute values are stored under
/// `@name` keys, and an element that has attributes keeps its own text under
/// `#text`. When a tag repeats under one parent only the last one is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Text(String),
    Node(BTreeMap<String, ConfigValue>),
}

pub const TEXT_KEY: &str = "#text";
pub const ATTRIBUTE_PREFIX: char = '@';

impl Default for ConfigValue {
    fn default() -> Self {
        ConfigValue::Node(BTreeMap::new())
    }
}

impl ConfigValue {
    /// Captures `element` and its whole subtree.
    pub fn from_element(element: &XmlElement) -> Self {
        if element.attributes.is_empty() && !element.has_children() {
            return ConfigValue::Text(element.text().unwrap_or_default().to_string());
        }
        Self::node_from_element(element)
    }

    /// Captures `element` as a mapping even if it only holds text.
    pub fn node_from_element(element: &XmlElement) -> Self {
        let mut map = BTreeMap::new();

        for (key, value) in &element.attributes {
            map.insert(
                format!("{}{}", ATTRIBUTE_PREFIX, key),
                ConfigValue::Text(value.clone()),
            );
        }
        if let Some(text) = element.text() {
            map.insert(TEXT_KEY.to_string(), ConfigValue::Text(text.to_string()));
        }
        for child in &element.children {
            map.insert(child.name.clone(), Self::from_element(child));
        }

        ConfigValue::Node(map)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(text) => Some(text),
            ConfigValue::Node(_) => None,
        }
    }

    pub fn as_node(&self) -> Option<&BTreeMap<String, ConfigValue>> {
        match self {
            ConfigValue::Node(map) => Some(map),
            ConfigValue::Text(_) => None,
        }
    }

    /// Looks up a direct entry of a `Node`.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.as_node().and_then(|map| map.get(key))
    }

    /// Follows `/`-separated keys through nested nodes.
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        path.split('/')
            .filter(|s| !s.is_empty())
            .try_fold(self, |current, key| current.get(key))
    }

    /// The textual content of this value: the string itself, or a node's `#text`.
    pub fn text(&self) -> Option<&str> {
        match self {
            ConfigValue::Text(text) => Some(text),
            ConfigValue::Node(map) => map.get(TEXT_KEY).and_then(ConfigValue::as_text),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            ConfigValue::Text(text) => text.is_empty(),
            ConfigValue::Node(map) => map.is_empty(),
        }
    }
}
