pub mod config;
pub mod metadata;
pub mod workflow;

pub use config::*;
pub use metadata::*;
pub use workflow::*;
