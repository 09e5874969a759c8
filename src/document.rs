use crate::error::LoadError;
use crate::xml::{XmlElement, decode_document, parse_tree};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A loaded, well-formed workflow document ready for extraction.
#[derive(Debug, Clone)]
pub struct Document {
    root: XmlElement,
    source: Option<PathBuf>,
}

impl Document {
    /// Reads and parses a workflow file.
    ///
    /// The file is read in one go and closed before parsing starts, so no
    /// handle outlives this call on either the success or the error path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let bytes = fs::read(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => LoadError::NotFound {
                path: path_str.clone(),
            },
            _ => LoadError::Io {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;
        debug!("Read {} bytes from '{}'", bytes.len(), path_str);

        let mut document = Self::from_xml_bytes(&bytes)?;
        document.source = Some(path.to_path_buf());
        Ok(document)
    }

    /// Parses raw document bytes, honouring a byte order mark or the
    /// declared `encoding`.
    pub fn from_xml_bytes(bytes: &[u8]) -> Result<Self, LoadError> {
        let content = decode_document(bytes)?;
        Self::from_xml_str(&content)
    }

    /// Parses a workflow document held in memory.
    pub fn from_xml_str(xml: &str) -> Result<Self, LoadError> {
        let root = parse_tree(xml)?;
        debug!("Parsed document with root element '{}'", root.name);
        Ok(Self { root, source: None })
    }

    pub fn root(&self) -> &XmlElement {
        &self.root
    }

    /// The path this document was loaded from, if it came from a file.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// The root's `yxmdVer` attribute, or an empty string when absent.
    pub fn version(&self) -> &str {
        self.root.attr("yxmdVer").unwrap_or_default()
    }
}
