pub mod amount;
pub mod api;
pub mod date;
pub mod metadata;
pub mod validation;
