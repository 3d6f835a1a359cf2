//! UI metadata for aggregates and dashboards
//!
//! Every aggregate module exposes an `ENTITY_METADATA` constant; the frontend
//! uses it for tab titles, sidebar entries and modal headers.
//!
//! ```rust,ignore
//! use contracts::domain::a006_status::ENTITY_METADATA;
//! println!("{}", ENTITY_METADATA.ui.list_name);
//! ```

mod types;

pub use types::{EntityMetadataInfo, EntityType, EntityUiMetadata};
