pub mod details;
pub mod json;
pub mod summary;

pub use details::DetailFormatter;
pub use json::{from_json_str, to_json_string, write_json};
pub use summary::SummaryFormatter;
