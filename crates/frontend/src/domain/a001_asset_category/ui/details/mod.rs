//! Asset category form
//!
//! - view_model.rs: form state and save command
//! - view.rs: Leptos component

mod view;
mod view_model;

pub use view::AssetCategoryDetails;
pub use view_model::AssetCategoryDetailsViewModel;
