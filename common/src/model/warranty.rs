use chrono::{Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Parts whose warranty ends within this many days are flagged for review.
pub const EXPIRING_SOON_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarrantyStatus {
    Active,
    #[serde(rename = "Expiring Soon")]
    ExpiringSoon,
    Expired,
}

/// Warranty position of an installed part on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyInfo {
    pub status: WarrantyStatus,
    pub days_remaining: Option<i64>,
    pub expiry_date: Option<NaiveDate>,
}

impl WarrantyInfo {
    fn unknown() -> Self {
        Self {
            status: WarrantyStatus::Active,
            days_remaining: None,
            expiry_date: None,
        }
    }

    /// Evaluates a warranty such as `"5 years"` starting at an ISO commencement date.
    ///
    /// The warranty length is the first integer found in the text, in years. Missing or
    /// unparsable inputs count as an active warranty with no known expiry.
    pub fn evaluate(
        date_of_commencement: Option<&str>,
        warranty: Option<&str>,
        today: NaiveDate,
    ) -> Self {
        let (Some(commencement), Some(warranty)) = (date_of_commencement, warranty) else {
            return Self::unknown();
        };
        let Some(years) = warranty_years(warranty) else {
            return Self::unknown();
        };
        let Some(start) = parse_iso_date(commencement) else {
            return Self::unknown();
        };
        let Some(expiry) = start.checked_add_months(Months::new(years.saturating_mul(12))) else {
            return Self::unknown();
        };

        let days_remaining = (expiry - today).num_days();
        let status = if days_remaining < 0 {
            WarrantyStatus::Expired
        } else if days_remaining <= EXPIRING_SOON_DAYS {
            WarrantyStatus::ExpiringSoon
        } else {
            WarrantyStatus::Active
        };

        Self {
            status,
            days_remaining: Some(days_remaining),
            expiry_date: Some(expiry),
        }
    }

    pub fn needs_review(&self) -> bool {
        self.status != WarrantyStatus::Active
    }
}

fn warranty_years(text: &str) -> Option<u32> {
    text.split(|c: char| !c.is_ascii_digit())
        .find(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}

/// Accepts `YYYY-MM-DD`, optionally followed by a time part.
fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    let date = text.trim().get(..10)?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}
