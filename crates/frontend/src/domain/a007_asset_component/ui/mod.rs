pub mod details;
pub mod list;
pub mod transfer;

pub use list::AssetComponentsPage;
