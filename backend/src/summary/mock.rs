use super::{SummaryError, SummarySource, Summarizer};
use async_trait::async_trait;
use common::model::installation::Installation;
use common::model::or_not_available;
use std::time::Duration;

/// Canned descriptions for the demo QR codes printed on sample parts.
const KNOWN_PARTS: &[(&str, &str)] = &[
    (
        "RC001",
        "Part: High-tensile Rail Clip (RC001). Manufacturer: SteelTech Industries. Batch: ST-2024-A123. Status: Installed on 2024-03-15 at Track Section A-12. Condition: Good. Warranty: Valid until 2026-01-15.",
    ),
    (
        "PD045",
        "Part: Standard Rail Pad (PD045). Manufacturer: FlexGuard Corp. Batch: FG-2024-B045. Status: In storage at Warehouse A. Condition: New. Warranty: Valid until 2029-02-10.",
    ),
    (
        "QR987",
        "Part: Track Fastener (QR987). Manufacturer: SecureRail Inc. Batch: SRI-2023-X789. Status: Installed on 2023-11-01 at Track Section B-5. Condition: Minor wear. Warranty: Valid until 2025-11-01.",
    ),
];

/// Template-based stand-in for an AI summarizer.
///
/// Sleeps for `delay` before answering to mimic the latency of a remote model.
pub struct MockSummarizer {
    delay: Duration,
}

impl MockSummarizer {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

#[async_trait]
impl Summarizer for MockSummarizer {
    async fn summarize(&self, source: SummarySource<'_>) -> Result<String, SummaryError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(match source {
            SummarySource::Scan { qr_data } => scan_summary(qr_data),
            SummarySource::Installation(installation) => installation_summary(installation),
        })
    }
}

pub(crate) fn scan_summary(qr_data: &str) -> String {
    KNOWN_PARTS
        .iter()
        .find(|(code, _)| *code == qr_data)
        .map(|(_, summary)| summary.to_string())
        .unwrap_or_else(|| {
            format!(
                "No detailed information available for part {}. The scan has been logged successfully.",
                qr_data
            )
        })
}

pub(crate) fn installation_summary(installation: &Installation) -> String {
    let d = &installation.details;
    let field = |value: &Option<String>| or_not_available(value.as_deref()).to_string();

    [
        format!("This is an AI-generated summary for part {}.", installation.uid),
        format!(
            "Part Name: {} ({})",
            field(&d.part_name),
            field(&d.part_sub_type)
        ),
        format!(
            "Installed at: {} on {}.",
            field(&d.address),
            field(&d.date_of_commencement)
        ),
        format!("Manufacturer No: {}.", field(&d.manufacturer_number)),
        format!("Batch No: {}.", field(&d.batch)),
        format!("Vendor No: {}.", field(&d.vendor_number)),
        format!("Date of Supply: {}.", field(&d.date_of_supply)),
        format!("QR Code: {}.", field(&d.qr_code)),
        format!("Warranty: {}.", field(&d.warranty)),
        "This part appears to be in good condition based on the installation data.".to_string(),
    ]
    .join("\n")
}
