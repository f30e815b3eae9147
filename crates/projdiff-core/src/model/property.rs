use crate::equivalence::fold_case;
use serde::{Deserialize, Serialize};

/// An evaluated project property
///
/// `is_defined_in_source` is false for properties that only exist through
/// imports or defaults; those are never diffed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub evaluated_value: String,
    #[serde(default)]
    pub is_defined_in_source: bool,
}

impl Property {
    /// A property explicitly set in the project file
    pub fn defined(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            evaluated_value: value.into(),
            is_defined_in_source: true,
        }
    }

    /// A property that only comes from imports or defaults
    pub fn inherited(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            evaluated_value: value.into(),
            is_defined_in_source: false,
        }
    }

    /// Case-insensitive comparison of evaluated values
    pub fn value_eq(&self, other: &Property) -> bool {
        fold_case(&self.evaluated_value) == fold_case(&other.evaluated_value)
    }
}
