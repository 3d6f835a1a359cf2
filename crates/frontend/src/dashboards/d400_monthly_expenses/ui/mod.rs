mod dashboard;

pub use dashboard::MonthlyExpensesDashboard;
