pub mod d400_monthly_expenses;
pub mod d401_software_licenses;
pub mod d402_overview;

pub use d400_monthly_expenses::ui::MonthlyExpensesDashboard;
pub use d401_software_licenses::ui::SoftwareLicensesDashboard;
pub use d402_overview::ui::OverviewDashboard;
