//! Software license report

use crate::shared::date::deserialize_optional_date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Days before expiry at which a license is flagged
pub const EXPIRY_WARNING_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseBranch {
    pub branch_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftwareLicense {
    pub id: i64,
    pub software_name: String,
    #[serde(default)]
    pub license_key: Option<String>,
    #[serde(default)]
    pub seats: i64,
    #[serde(default)]
    pub used_seats: i64,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub expiry_date: Option<NaiveDate>,
    #[serde(default)]
    pub branch: Option<LicenseBranch>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryStatus {
    Expired,
    Expiring,
    Active,
    /// Perpetual license, no expiry date
    NoExpiry,
}

impl ExpiryStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::Expiring => "Expiring soon",
            ExpiryStatus::Active => "Active",
            ExpiryStatus::NoExpiry => "No expiry",
        }
    }

    /// CSS modifier used by the badge
    pub fn css_class(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "badge badge--danger",
            ExpiryStatus::Expiring => "badge badge--warning",
            ExpiryStatus::Active => "badge badge--success",
            ExpiryStatus::NoExpiry => "badge",
        }
    }
}

impl SoftwareLicense {
    pub fn branch_name(&self) -> &str {
        self.branch.as_ref().map(|b| b.branch_name.as_str()).unwrap_or("-")
    }

    /// Never negative, even when the backend reports over-allocation
    pub fn available_seats(&self) -> i64 {
        (self.seats - self.used_seats).max(0)
    }

    /// Used seats in percent of total, 0 for a license without seats
    pub fn utilisation(&self) -> f64 {
        if self.seats <= 0 {
            0.0
        } else {
            self.used_seats as f64 / self.seats as f64 * 100.0
        }
    }

    pub fn expiry_status(&self, today: NaiveDate) -> ExpiryStatus {
        let Some(expiry) = self.expiry_date else {
            return ExpiryStatus::NoExpiry;
        };
        let days_left = (expiry - today).num_days();
        if days_left < 0 {
            ExpiryStatus::Expired
        } else if days_left <= EXPIRY_WARNING_DAYS {
            ExpiryStatus::Expiring
        } else {
            ExpiryStatus::Active
        }
    }
}

/// Totals row under the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LicenseTotals {
    pub seats: i64,
    pub used_seats: i64,
    pub expired: usize,
    pub expiring: usize,
}

pub fn license_totals(licenses: &[SoftwareLicense], today: NaiveDate) -> LicenseTotals {
    licenses.iter().fold(LicenseTotals::default(), |mut acc, l| {
        acc.seats += l.seats;
        acc.used_seats += l.used_seats;
        match l.expiry_status(today) {
            ExpiryStatus::Expired => acc.expired += 1,
            ExpiryStatus::Expiring => acc.expiring += 1,
            _ => {}
        }
        acc
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn license(seats: i64, used: i64, expiry: Option<&str>) -> SoftwareLicense {
        SoftwareLicense {
            id: 1,
            software_name: "Office".into(),
            license_key: None,
            seats,
            used_seats: used,
            expiry_date: expiry.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap()),
            branch: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_seats() {
        let l = license(10, 4, None);
        assert_eq!(l.available_seats(), 6);
        assert_eq!(l.utilisation(), 40.0);

        let over = license(5, 7, None);
        assert_eq!(over.available_seats(), 0);
        assert_eq!(license(0, 0, None).utilisation(), 0.0);
    }

    #[test]
    fn test_expiry_status() {
        assert_eq!(license(1, 0, Some("2024-05-31")).expiry_status(today()), ExpiryStatus::Expired);
        assert_eq!(license(1, 0, Some("2024-06-01")).expiry_status(today()), ExpiryStatus::Expiring);
        assert_eq!(license(1, 0, Some("2024-07-01")).expiry_status(today()), ExpiryStatus::Expiring);
        assert_eq!(license(1, 0, Some("2024-07-02")).expiry_status(today()), ExpiryStatus::Active);
        assert_eq!(license(1, 0, None).expiry_status(today()), ExpiryStatus::NoExpiry);
    }

    #[test]
    fn test_totals() {
        let list = vec![
            license(10, 4, Some("2024-01-01")),
            license(5, 5, Some("2024-06-10")),
            license(20, 1, None),
        ];
        let totals = license_totals(&list, today());
        assert_eq!(totals.seats, 35);
        assert_eq!(totals.used_seats, 10);
        assert_eq!(totals.expired, 1);
        assert_eq!(totals.expiring, 1);
    }

    #[test]
    fn test_deserialize_with_branch() {
        let l: SoftwareLicense = serde_json::from_str(
            r#"{"id": 3, "software_name": "AutoCAD", "seats": 2, "used_seats": 1,
                "expiry_date": "2025-01-31", "branch": {"branch_name": "Main"}}"#,
        )
        .unwrap();
        assert_eq!(l.branch_name(), "Main");
        assert_eq!(l.expiry_date, NaiveDate::from_ymd_opt(2025, 1, 31));
    }

    #[test]
    fn test_report_with_timestamp_dates_decodes() {
        let list: Vec<SoftwareLicense> = serde_json::from_str(
            r#"[{"id": 1, "software_name": "Office", "expiry_date": "2025-01-01T00:00:00Z"},
                {"id": 2, "software_name": "7-Zip", "expiry_date": null},
                {"id": 3, "software_name": "Legacy", "expiry_date": "n/a"}]"#,
        )
        .unwrap();
        assert_eq!(list.len(), 3);
        assert_eq!(list[0].expiry_date, NaiveDate::from_ymd_opt(2025, 1, 1));
        assert_eq!(list[1].expiry_status(today()), ExpiryStatus::NoExpiry);
        assert_eq!(list[2].expiry_date, None);
    }
}
