pub mod item;
pub mod metadata;
pub mod property;
pub mod snapshot;

pub use item::Item;
pub use metadata::Metadata;
pub use property::Property;
pub use snapshot::{ProjectSnapshot, ProjectState};
