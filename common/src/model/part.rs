use crate::model::installation::Installation;
use crate::model::warranty::WarrantyInfo;
use crate::model::NOT_AVAILABLE;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

const NOT_SPECIFIED: &str = "(Not specified)";

/// Detail view of an installed part, as shown after scanning its UID.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartDetail {
    pub uid: String,
    #[serde(rename = "type")]
    pub part_type: String,
    pub manufacturer: String,
    pub batch: String,
    pub mfg_date: Option<String>,
    pub status: String,
    pub warranty: Option<String>,
    pub warranty_status: WarrantyInfo,
    pub sleeper: SleeperInfo,
    pub install_history: Vec<InstallEvent>,
    pub specifications: Specifications,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleeperInfo {
    pub location: Option<String>,
    pub uid: String,
    pub batch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InstallEvent {
    pub date: Option<String>,
    pub installer: String,
    pub location: Option<String>,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Specifications {
    #[serde(rename = "QR Code")]
    pub qr_code: String,
    #[serde(rename = "Manufacturer No.")]
    pub manufacturer_number: Option<String>,
    #[serde(rename = "Vendor No.")]
    pub vendor_number: Option<String>,
    #[serde(rename = "Date of Supply")]
    pub date_of_supply: Option<String>,
}

impl PartDetail {
    pub fn from_installation(installation: &Installation, today: NaiveDate) -> Self {
        let details = &installation.details;
        let name = details.part_name.clone().unwrap_or_default();
        let part_type = match &details.part_sub_type {
            Some(sub_type) => format!("{} ({})", name, sub_type),
            None => name,
        };

        Self {
            uid: installation.uid.clone(),
            part_type,
            manufacturer: details
                .manufacturer_number
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            batch: details
                .batch
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            mfg_date: details.date_of_supply.clone(),
            // Only installed parts are recorded
            status: "Installed".to_string(),
            warranty: details.warranty.clone(),
            warranty_status: WarrantyInfo::evaluate(
                details.date_of_commencement.as_deref(),
                details.warranty.as_deref(),
                today,
            ),
            sleeper: SleeperInfo {
                location: details.address.clone(),
                uid: NOT_AVAILABLE.to_string(),
                batch: NOT_AVAILABLE.to_string(),
            },
            install_history: vec![InstallEvent {
                date: details.date_of_commencement.clone(),
                installer: NOT_AVAILABLE.to_string(),
                location: details.address.clone(),
                reason: "New Installation".to_string(),
            }],
            specifications: Specifications {
                qr_code: details
                    .qr_code
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                manufacturer_number: details.manufacturer_number.clone(),
                vendor_number: details.vendor_number.clone(),
                date_of_supply: details.date_of_supply.clone(),
            },
        }
    }
}
