pub mod badge;
pub mod number_format;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;

pub use badge::ColorBadge;
pub use number_format::{format_count, format_money, format_optional_money, format_percent};
pub use page_header::PageHeader;
pub use pagination_controls::ListPagination;
pub use stat_card::StatCard;
