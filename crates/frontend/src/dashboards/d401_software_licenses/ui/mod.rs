mod dashboard;

pub use dashboard::SoftwareLicensesDashboard;
