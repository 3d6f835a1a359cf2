mod view;
mod view_model;

pub use view::AssetSubcategoryDetails;
pub use view_model::AssetSubcategoryDetailsViewModel;
