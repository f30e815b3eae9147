//! Project reconciliation engine.
//!
//! Compares a "before" and "after" snapshot of the same project and
//! classifies every explicitly defined property and every item.
//!
//! ## Entry point
//!
//! ```
//! use projdiff_core::diff::reconcile;
//! use projdiff_core::model::{Item, ProjectState, Property};
//! use projdiff_core::options::ReconcileOptions;
//!
//! let before = ProjectState::new()
//!     .with_property(Property::defined("TargetFramework", "net472"))
//!     .with_item(Item::new("Compile", "Program.cs"));
//! let after = ProjectState::new()
//!     .with_property(Property::defined("TargetFramework", "net5.0"));
//!
//! let diff = reconcile(&before, &after, &ReconcileOptions::default()).unwrap();
//! assert_eq!(diff.properties.changed.len(), 1);
//! assert_eq!(diff.items[0].absent_items.len(), 1);
//! ```
//!
//! ## Guarantees
//!
//! - **Purity**: inputs are never mutated; identical inputs give identical diffs.
//! - **Completeness**: every distinct explicitly defined source property lands
//!   in exactly one bucket.
//! - **Reclassification suppression**: an application-definition item that
//!   reappears as a page under the same identity is reported once, as absent.

pub mod engine;
pub mod items;
pub mod model;
pub mod properties;

pub use engine::reconcile;
pub use model::{ItemsDiff, ProjectDiff, PropertiesDiff, PropertyChange};
