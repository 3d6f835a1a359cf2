pub mod a001_asset_category;
pub mod a002_asset_subcategory;
pub mod a003_branch;
pub mod a004_section;
pub mod a005_employee;
pub mod a006_status;
pub mod a007_asset_component;
pub mod a008_asset;
pub mod a009_vendor;
pub mod a010_equipment;
