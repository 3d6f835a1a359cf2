mod view;
mod view_model;

pub use view::StatusDetails;
pub use view_model::StatusDetailsViewModel;
