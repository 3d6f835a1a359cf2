pub mod api_utils;
pub mod components;
pub mod config;
pub mod crud;
pub mod crud_page;
pub mod icons;
pub mod list_utils;
pub mod modal_frame;
pub mod modal_stack;
pub mod notifier;
pub mod query;
pub mod state;
