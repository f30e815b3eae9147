use crate::model::Metadata;
use serde::{Deserialize, Serialize};

/// An evaluated project item
///
/// `group_key` is the item type (e.g. `Compile`, `Page`) and `identity`
/// the evaluated include within that group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub group_key: String,
    pub identity: String,
    #[serde(default)]
    pub metadata: Metadata,
}

impl Item {
    /// Create an item without metadata
    pub fn new(group_key: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            group_key: group_key.into(),
            identity: identity.into(),
            metadata: Metadata::new(),
        }
    }

    /// Builder-style metadata entry
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.set(key, value);
        self
    }
}
