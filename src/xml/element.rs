/// A single element of a parsed XML document.
///
/// Only what the extractors need is kept: the tag name, attributes in source
/// order, the concatenated non-blank text content, and child elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub text: String,
    pub children: Vec<XmlElement>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Returns the value of the attribute `key`, if present.
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns the trimmed text content, or `None` when it is blank.
    pub fn text(&self) -> Option<&str> {
        let trimmed = self.text.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Returns the first direct child named `name`.
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Iterates over all direct children named `name`, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Follows a `/`-separated path of child names, taking the first match at each step.
    pub fn find(&self, path: &str) -> Option<&XmlElement> {
        self.find_segments(path.split('/').filter(|s| !s.is_empty()))
    }

    /// Like [`XmlElement::find`], but with the path already split into segments.
    pub fn find_segments<'s>(&self, segments: impl IntoIterator<Item = &'s str>) -> Option<&XmlElement> {
        segments
            .into_iter()
            .try_fold(self, |current, segment| current.child(segment))
    }

    /// Text of the child at `path`, if that child exists and has non-blank text.
    pub fn child_text(&self, path: &str) -> Option<String> {
        self.find(path).and_then(|e| e.text()).map(str::to_string)
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
