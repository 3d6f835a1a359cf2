pub mod d400_monthly_expenses;
pub mod d401_software_licenses;
pub mod d402_overview;
