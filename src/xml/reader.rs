use super::XmlElement;
use crate::error::LoadError;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

/// Builds an [`XmlElement`] tree from XML text.
///
/// The document must have exactly one root element and every opened element
/// must be closed. Comments, processing instructions and the declaration are
/// skipped.
pub fn parse_tree(xml: &str) -> Result<XmlElement, LoadError> {
    let xml = xml.strip_prefix('\u{feff}').unwrap_or(xml);
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<XmlElement> = Vec::new();
    let mut root: Option<XmlElement> = None;

    loop {
        let position = reader.buffer_position() as u64;
        let event = reader.read_event().map_err(|e| LoadError::Malformed {
            position: reader.error_position() as u64,
            message: e.to_string(),
        })?;

        match event {
            Event::Start(start) => {
                let element = open_element(&start, position)?;
                ensure_single_root(&root, &stack, &element.name, position)?;
                stack.push(element);
            }
            Event::Empty(start) => {
                let element = open_element(&start, position)?;
                ensure_single_root(&root, &stack, &element.name, position)?;
                close_element(element, &mut stack, &mut root);
            }
            Event::End(_) => {
                // quick-xml already rejects mismatched end tags.
                let element = stack.pop().ok_or_else(|| LoadError::Malformed {
                    position,
                    message: "Closing tag without a matching opening tag".to_string(),
                })?;
                close_element(element, &mut stack, &mut root);
            }
            Event::Text(text) => {
                let content = text.unescape().map_err(|e| LoadError::Malformed {
                    position,
                    message: e.to_string(),
                })?;
                append_text(&mut stack, &content, position)?;
            }
            Event::CData(data) => {
                let content = String::from_utf8_lossy(&data.into_inner()).into_owned();
                append_text(&mut stack, &content, position)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if let Some(open) = stack.last() {
        return Err(LoadError::Malformed {
            position: xml.len() as u64,
            message: format!("Element '{}' is never closed", open.name),
        });
    }

    root.ok_or_else(|| LoadError::Malformed {
        position: 0,
        message: "Document has no root element".to_string(),
    })
}

fn open_element(start: &BytesStart<'_>, position: u64) -> Result<XmlElement, LoadError> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut element = XmlElement::new(name);

    for attr in start.attributes() {
        let attr = attr.map_err(|e| LoadError::Malformed {
            position,
            message: format!("Invalid attribute on '{}': {}", element.name, e),
        })?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr
            .unescape_value()
            .map_err(|e| LoadError::Malformed {
                position,
                message: format!("Invalid value for attribute '{}': {}", key, e),
            })?
            .into_owned();
        element.attributes.push((key, value));
    }

    Ok(element)
}

fn ensure_single_root(
    root: &Option<XmlElement>,
    stack: &[XmlElement],
    name: &str,
    position: u64,
) -> Result<(), LoadError> {
    if stack.is_empty() && root.is_some() {
        return Err(LoadError::Malformed {
            position,
            message: format!("Second root element '{}' found", name),
        });
    }
    Ok(())
}

fn close_element(element: XmlElement, stack: &mut [XmlElement], root: &mut Option<XmlElement>) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(element),
        None => *root = Some(element),
    }
}

fn append_text(stack: &mut [XmlElement], content: &str, position: u64) -> Result<(), LoadError> {
    match stack.last_mut() {
        // Only text before the first child belongs to the element; later
        // runs are tails of its children and are dropped.
        Some(current) => {
            if !current.has_children() {
                current.text.push_str(content);
            }
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(LoadError::Malformed {
            position,
            message: "Text content outside of the root element".to_string(),
        }),
    }
}
