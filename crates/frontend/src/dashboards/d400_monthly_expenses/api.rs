use contracts::dashboards::d400_monthly_expenses::{ExpenseBreakdown, ExpenseTrend, MonthlyExpense};

use crate::shared::api_utils::{get_list, ApiError};

pub async fn get_expense_trends() -> Result<Vec<ExpenseTrend>, ApiError> {
    get_list("/expense-trends").await
}

pub async fn get_expense_breakdown() -> Result<Vec<ExpenseBreakdown>, ApiError> {
    get_list("/expense-breakdown").await
}

pub async fn get_monthly_expenses() -> Result<Vec<MonthlyExpense>, ApiError> {
    get_list("/monthly-expenses").await
}

/// Все три набора данных дашборда
#[derive(Debug, Clone, Default)]
pub struct ExpenseReport {
    pub trends: Vec<ExpenseTrend>,
    pub breakdown: Vec<ExpenseBreakdown>,
    pub monthly: Vec<MonthlyExpense>,
}

/// Запросы уходят параллельно; первая ошибка отменяет весь отчёт
pub async fn get_expense_report() -> Result<ExpenseReport, ApiError> {
    let (trends, breakdown, monthly) = futures::try_join!(
        get_expense_trends(),
        get_expense_breakdown(),
        get_monthly_expenses()
    )?;
    Ok(ExpenseReport {
        trends,
        breakdown,
        monthly,
    })
}
