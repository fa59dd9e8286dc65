use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A generated inspection summary.
///
/// `qr_data` is either the raw scanned code or the UID of an installation; the link to an
/// installation is by value only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: u64,
    pub qr_data: String,
    pub summary: String,
    pub photo: Option<String>,
    pub timestamp: DateTime<Utc>,
}
