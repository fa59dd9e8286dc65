use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A rail component placed at a location, as recorded by the installation form.
///
/// `id` and `uid` are allocated by the store when the record is appended and never change
/// afterwards. The form fields are free text; the server does not enforce any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: u64,
    pub uid: String,
    #[serde(flatten)]
    pub details: InstallationDetails,
    /// Path of the uploaded photo, e.g. `uploads/3f2c….jpg`.
    pub photo: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// The client-supplied part of an installation record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallationDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub qr_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_sub_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_supply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_commencement: Option<String>,
}

impl InstallationDetails {
    /// Assigns a form field by its wire name (`partName`, `batch`, ...).
    ///
    /// Blank values are stored as absent. Returns `false` for names that are not part of
    /// the installation form so callers can decide what to do with them.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name {
            "qrCode" => &mut self.qr_code,
            "partName" => &mut self.part_name,
            "partSubType" => &mut self.part_sub_type,
            "manufacturerNumber" => &mut self.manufacturer_number,
            "batch" => &mut self.batch,
            "vendorNumber" => &mut self.vendor_number,
            "warranty" => &mut self.warranty,
            "address" => &mut self.address,
            "dateOfSupply" => &mut self.date_of_supply,
            "dateOfCommencement" => &mut self.date_of_commencement,
            _ => return false,
        };
        let trimmed = value.trim();
        *slot = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        true
    }
}
