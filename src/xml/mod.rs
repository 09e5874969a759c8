mod decode;
mod element;
mod reader;

pub use decode::decode_document;
pub use element::XmlElement;
pub use reader::parse_tree;
