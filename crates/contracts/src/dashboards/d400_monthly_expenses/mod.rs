//! Monthly expenses dashboard payloads and the figures derived from them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::amount::deserialize_amount;

/// One point of `GET /expense-trends`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseTrend {
    /// Period in format "YYYY-MM"
    pub month: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: f64,
}

/// One row of `GET /expense-breakdown`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseBreakdown {
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub total: f64,
}

/// One row of `GET /monthly-expenses`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpense {
    pub month: String,
    pub category: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    pub amount: f64,
}

/// Headline figures shown above the chart
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSummary {
    pub grand_total: f64,
    pub average_per_month: f64,
    pub peak_month: Option<String>,
    pub peak_total: f64,
}

/// Breakdown row with its share of the total, in percent
#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownShare {
    pub category: String,
    pub total: f64,
    pub percent: f64,
}

/// Parse "YYYY-MM" (a trailing "-DD" is tolerated)
pub fn parse_month(month: &str) -> Option<NaiveDate> {
    let mut parts = month.trim().splitn(3, '-');
    let year: i32 = parts.next()?.parse().ok()?;
    let month: u32 = parts.next()?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, 1)
}

/// "2024-03" -> "Mar 2024"; unparseable input is returned as is
pub fn month_label(month: &str) -> String {
    parse_month(month)
        .map(|d| d.format("%b %Y").to_string())
        .unwrap_or_else(|| month.to_string())
}

pub fn summarize(trends: &[ExpenseTrend]) -> ExpenseSummary {
    let grand_total: f64 = trends.iter().map(|t| t.total).sum();
    let average_per_month = if trends.is_empty() {
        0.0
    } else {
        grand_total / trends.len() as f64
    };
    let peak = trends
        .iter()
        .max_by(|a, b| a.total.partial_cmp(&b.total).unwrap_or(std::cmp::Ordering::Equal));

    ExpenseSummary {
        grand_total,
        average_per_month,
        peak_month: peak.map(|p| p.month.clone()),
        peak_total: peak.map(|p| p.total).unwrap_or(0.0),
    }
}

/// Breakdown sorted by total, descending, with percentages of the overall total
pub fn breakdown_shares(rows: &[ExpenseBreakdown]) -> Vec<BreakdownShare> {
    let total: f64 = rows.iter().map(|r| r.total).sum();
    let mut shares: Vec<BreakdownShare> = rows
        .iter()
        .map(|r| BreakdownShare {
            category: r.category.clone(),
            total: r.total,
            percent: if total > 0.0 { r.total / total * 100.0 } else { 0.0 },
        })
        .collect();
    shares.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(std::cmp::Ordering::Equal));
    shares
}

/// Distinct years present in the monthly rows, newest first
pub fn available_years(rows: &[MonthlyExpense]) -> Vec<i32> {
    use chrono::Datelike;

    let mut years: Vec<i32> = rows
        .iter()
        .filter_map(|r| parse_month(&r.month).map(|d| d.year()))
        .collect();
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

/// Monthly rows of one year; `None` keeps everything
pub fn filter_by_year(rows: &[MonthlyExpense], year: Option<i32>) -> Vec<MonthlyExpense> {
    use chrono::Datelike;

    rows.iter()
        .filter(|r| match year {
            None => true,
            Some(y) => parse_month(&r.month).map(|d| d.year() == y).unwrap_or(false),
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trend(month: &str, total: f64) -> ExpenseTrend {
        ExpenseTrend { month: month.into(), total }
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2024-03"), "Mar 2024");
        assert_eq!(month_label("2024-12-01"), "Dec 2024");
        assert_eq!(month_label("Q1"), "Q1");
    }

    #[test]
    fn test_summary() {
        let summary = summarize(&[trend("2024-01", 100.0), trend("2024-02", 300.0), trend("2024-03", 200.0)]);
        assert_eq!(summary.grand_total, 600.0);
        assert_eq!(summary.average_per_month, 200.0);
        assert_eq!(summary.peak_month.as_deref(), Some("2024-02"));
        assert_eq!(summary.peak_total, 300.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = summarize(&[]);
        assert_eq!(summary.grand_total, 0.0);
        assert_eq!(summary.average_per_month, 0.0);
        assert_eq!(summary.peak_month, None);
    }

    #[test]
    fn test_breakdown_shares() {
        let rows = vec![
            ExpenseBreakdown { category: "Memory".into(), total: 25.0 },
            ExpenseBreakdown { category: "Laptop".into(), total: 75.0 },
        ];
        let shares = breakdown_shares(&rows);
        assert_eq!(shares[0].category, "Laptop");
        assert_eq!(shares[0].percent, 75.0);
        assert_eq!(shares[1].percent, 25.0);
    }

    #[test]
    fn test_years_and_filter() {
        let rows: Vec<MonthlyExpense> = serde_json::from_str(
            r#"[
                {"month": "2023-11", "category": "Laptop", "amount": "1000.00"},
                {"month": "2024-01", "category": "Memory", "amount": 80},
                {"month": "2024-02", "category": "Laptop", "amount": 1500}
            ]"#,
        )
        .unwrap();
        assert_eq!(available_years(&rows), vec![2024, 2023]);
        assert_eq!(filter_by_year(&rows, Some(2024)).len(), 2);
        assert_eq!(filter_by_year(&rows, None).len(), 3);
        assert_eq!(rows[0].amount, 1000.0);
    }
}
