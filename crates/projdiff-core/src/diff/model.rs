//! Reconciliation output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.
//! Every bucket keeps the order in which the engine produced it.

use crate::model::{Item, Property};
use serde::{Deserialize, Serialize};

/// Result of one reconciliation run
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectDiff {
    /// Classification of explicitly defined source properties
    pub properties: PropertiesDiff,
    /// One entry per item group, in engine order
    pub items: Vec<ItemsDiff>,
}

/// Classification of every property explicitly defined in the source
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PropertiesDiff {
    /// Absent from the target, or present with an equal value
    pub defaulted: Vec<Property>,
    /// Never populated: a successful target lookup is always either equal
    /// (defaulted) or different (changed). Kept so report consumers see a
    /// stable shape.
    pub not_defaulted: Vec<Property>,
    /// Values differ between the snapshots
    pub changed: Vec<PropertyChange>,
}

impl PropertiesDiff {
    pub fn is_empty(&self) -> bool {
        self.defaulted.is_empty() && self.not_defaulted.is_empty() && self.changed.is_empty()
    }
}

/// Old/new records for a changed property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PropertyChange {
    /// Record in the source snapshot
    pub old: Property,
    /// Record in the target snapshot
    pub new: Property,
}

/// Per-group item classification
///
/// For a group present in both snapshots `absent_items` is empty. For a
/// group present only in the source, every other bucket is empty and
/// `absent_items` holds the whole source group.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemsDiff {
    pub group_key: String,
    /// Target items unchanged from the source (identity and metadata)
    pub defaulted_items: Vec<Item>,
    /// Source items with no identity match in the target
    pub not_defaulted_items: Vec<Item>,
    /// Target items with no identity match in the source
    pub introduced_items: Vec<Item>,
    /// Target items matching a source item by identity but not by metadata
    pub changed_items: Vec<Item>,
    /// Source items of a group missing from the target entirely
    pub absent_items: Vec<Item>,
}

impl ItemsDiff {
    /// An entry with every bucket empty
    pub fn empty(group_key: impl Into<String>) -> Self {
        Self {
            group_key: group_key.into(),
            defaulted_items: Vec::new(),
            not_defaulted_items: Vec::new(),
            introduced_items: Vec::new(),
            changed_items: Vec::new(),
            absent_items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.defaulted_items.is_empty()
            && self.not_defaulted_items.is_empty()
            && self.introduced_items.is_empty()
            && self.changed_items.is_empty()
            && self.absent_items.is_empty()
    }
}
