use crate::model::installation::Installation;
use crate::model::warranty::WarrantyInfo;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallationCreated {
    pub message: String,
    pub record: Installation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedReport {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub summary: String,
    pub photo: Option<String>,
    pub id: u64,
}

/// Row of `GET /api/warranty-alerts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyAlert {
    pub id: u64,
    pub uid: String,
    pub part_name: Option<String>,
    pub part_sub_type: Option<String>,
    pub address: Option<String>,
    pub date_of_commencement: Option<String>,
    #[serde(flatten)]
    pub warranty: WarrantyInfo,
}

impl WarrantyAlert {
    pub fn new(installation: &Installation, warranty: WarrantyInfo) -> Self {
        let details = &installation.details;
        Self {
            id: installation.id,
            uid: installation.uid.clone(),
            part_name: details.part_name.clone(),
            part_sub_type: details.part_sub_type.clone(),
            address: details.address.clone(),
            date_of_commencement: details.date_of_commencement.clone(),
            warranty,
        }
    }
}
