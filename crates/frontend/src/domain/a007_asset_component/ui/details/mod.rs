//! Add/edit form of an asset component
//!
//! - view_model.rs: form state, cascading subcategories, save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::ComponentDetails;
pub use view_model::{ComponentDetailsViewModel, ComponentRefs};
