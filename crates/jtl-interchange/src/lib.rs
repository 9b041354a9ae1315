//! JTL Interchange
//!
//! Encodes a parsed forest into its JSON interchange form and back.
//! The encoding itself is delegated to `serde_json`; this crate owns
//! the structural mapping and the flattened post-processing shapes.
//!
//! ```text
//! Forest → serialize() → interchange text → deserialize() → Forest
//! ```

pub mod flatten;

pub use flatten::{flat_list, key_map};

use jtl_parser::Forest;

/// Interchange encoding/decoding error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("interchange error: {message}")]
pub struct InterchangeError {
    pub message: String,
}

impl InterchangeError {
    fn from_json(error: serde_json::Error) -> Self {
        Self {
            message: error.to_string(),
        }
    }
}

/// Encode a forest as compact JSON.
///
/// Each element becomes an object holding its attributes as direct
/// fields plus `key` and `content`; `children` appears only when
/// non-empty.
pub fn serialize(forest: &Forest) -> Result<String, InterchangeError> {
    serde_json::to_string(forest).map_err(InterchangeError::from_json)
}

/// Encode a forest as indented JSON, for diagnostics and fixtures.
pub fn serialize_pretty(forest: &Forest) -> Result<String, InterchangeError> {
    serde_json::to_string_pretty(forest).map_err(InterchangeError::from_json)
}

/// Decode interchange text back into a forest.
pub fn deserialize(text: &str) -> Result<Forest, InterchangeError> {
    serde_json::from_str(text).map_err(InterchangeError::from_json)
}
