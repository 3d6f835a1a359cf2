mod view;
mod view_model;

pub use view::BranchDetails;
pub use view_model::BranchDetailsViewModel;
