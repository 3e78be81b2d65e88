//! View-side state holders
//!
//! Rendering is someone else's job; these types keep the state a list,
//! detail or edit view needs and drive the entity services for it.

mod detail;
mod editor;
mod list;

pub use detail::EntityDetail;
pub use editor::EntityEditor;
pub use list::{DeleteDialog, DeleteOutcome, EntityList};
