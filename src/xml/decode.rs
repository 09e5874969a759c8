use crate::error::LoadError;
use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};
use std::borrow::Cow;

/// Decodes raw document bytes into text.
///
/// A byte order mark wins. Without one, UTF-16 is recognised from the
/// opening `<?` and the `encoding` of the XML declaration is honoured.
/// Documents with neither are read as UTF-8.
pub fn decode_document(bytes: &[u8]) -> Result<Cow<'_, str>, LoadError> {
    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (sniff_encoding(bytes)?, bytes),
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| LoadError::Malformed {
            position: 0,
            message: format!("Document is not valid {}", encoding.name()),
        })
}

fn sniff_encoding(bytes: &[u8]) -> Result<&'static Encoding, LoadError> {
    if bytes.starts_with(&[0x3C, 0x00, 0x3F, 0x00]) {
        return Ok(UTF_16LE);
    }
    if bytes.starts_with(&[0x00, 0x3C, 0x00, 0x3F]) {
        return Ok(UTF_16BE);
    }

    let Some(label) = declared_label(bytes) else {
        return Ok(UTF_8);
    };
    match Encoding::for_label(label) {
        // An ASCII-readable declaration cannot be UTF-16 without a BOM.
        Some(encoding) if encoding == UTF_16LE || encoding == UTF_16BE => Ok(UTF_8),
        Some(encoding) => Ok(encoding),
        None => Err(LoadError::Malformed {
            position: 0,
            message: format!(
                "Unsupported encoding '{}'",
                String::from_utf8_lossy(label)
            ),
        }),
    }
}

/// The `encoding` pseudo-attribute of a leading `<?xml ...?>` declaration.
fn declared_label(bytes: &[u8]) -> Option<&[u8]> {
    let head = bytes.strip_prefix(b"<?xml")?;
    let end = head.windows(2).position(|w| w == b"?>")?;
    let declaration = &head[..end];

    let at = declaration.windows(8).position(|w| w == b"encoding")?;
    let rest = declaration[at + 8..]
        .trim_ascii_start()
        .strip_prefix(b"=")?
        .trim_ascii_start();

    let quote = *rest.first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let value = &rest[1..];
    let close = value.iter().position(|&b| b == quote)?;
    Some(&value[..close])
}
