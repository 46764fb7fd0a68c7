//! Form configuration record and its defaults
//!
//! - **record**: ConfigRecord, the flat field map handed over by the settings editor
//! - **defaults**: the documented field table and default values

pub mod defaults;
pub mod record;

// Re-export commonly used types
pub use defaults::FieldGroup;
pub use record::{ConfigRecord, FieldValue};
