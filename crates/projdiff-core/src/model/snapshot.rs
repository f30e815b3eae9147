//! Project snapshot abstraction.
//!
//! A snapshot is the evaluated, read-only state of a project at one point
//! of a conversion. Evaluation itself happens elsewhere; the engine only
//! needs to enumerate properties and items and look properties up by name.

use crate::equivalence::fold_case;
use crate::errors::{DiffError, Result, SnapshotSide};
use crate::model::{Item, Property};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only view of an evaluated project
pub trait ProjectSnapshot {
    /// All evaluated properties, in evaluation order (names may repeat)
    fn properties(&self) -> &[Property];

    /// All evaluated items, in evaluation order
    fn items(&self) -> &[Item];

    /// Effective property for `name`: the last record with that name,
    /// compared case-insensitively. `None` when the name is not present.
    fn property(&self, name: &str) -> Option<&Property> {
        let wanted = fold_case(name);
        self.properties()
            .iter()
            .rev()
            .find(|p| fold_case(&p.name) == wanted)
    }
}

/// In-memory snapshot
///
/// This is the serde form accepted by the CLI:
///
/// ```json
/// {
///   "properties": [{"name": "TargetFramework", "evaluated_value": "net472", "is_defined_in_source": true}],
///   "items": [{"group_key": "Compile", "identity": "Foo.cs", "metadata": {"SubType": "Form"}}]
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectState {
    #[serde(default)]
    pub properties: Vec<Property>,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl ProjectState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style property append
    pub fn with_property(mut self, property: Property) -> Self {
        self.properties.push(property);
        self
    }

    /// Builder-style item append
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Parse a snapshot from its JSON form
    ///
    /// # Errors
    ///
    /// - `Serialization` if the text is not a valid snapshot document
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Load a snapshot from a JSON file
    ///
    /// # Errors
    ///
    /// - `Io` if the file cannot be read
    /// - `Serialization` if the content is not a valid snapshot document
    pub fn load_json(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| DiffError::io(path, e))?;
        Self::from_json_str(&text)
    }
}

impl ProjectSnapshot for ProjectState {
    fn properties(&self) -> &[Property] {
        &self.properties
    }

    fn items(&self) -> &[Item] {
        &self.items
    }
}

/// Reject snapshots the engine cannot classify at all.
///
/// Only structural emptiness is checked (blank property names, blank group
/// keys). Duplicate identities are accepted as-is.
///
/// # Errors
///
/// - `InvalidSnapshot` naming the offending side and record
pub fn validate_snapshot<S: ProjectSnapshot + ?Sized>(
    snapshot: &S,
    side: SnapshotSide,
) -> Result<()> {
    if let Some(index) = snapshot
        .properties()
        .iter()
        .position(|p| p.name.trim().is_empty())
    {
        return Err(DiffError::InvalidSnapshot {
            side,
            reason: format!("property at index {} has an empty name", index),
        });
    }

    if let Some(index) = snapshot
        .items()
        .iter()
        .position(|i| i.group_key.trim().is_empty())
    {
        return Err(DiffError::InvalidSnapshot {
            side,
            reason: format!("item at index {} has an empty group key", index),
        });
    }

    Ok(())
}
