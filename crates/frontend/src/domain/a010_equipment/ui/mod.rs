pub mod list;

pub use list::EquipmentList;
