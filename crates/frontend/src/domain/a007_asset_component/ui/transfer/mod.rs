//! Transfer of a component to another employee

mod view;
mod view_model;

pub use view::TransferDialog;
pub use view_model::{submit_transfer, TransferViewModel};
