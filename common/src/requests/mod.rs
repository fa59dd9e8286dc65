use serde::Deserialize;

/// Body of `POST /api/generate-report`.
///
/// `uid` is optional at the type level so that a missing value can be answered with a
/// validation error instead of a deserialization failure.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReportRequest {
    #[serde(default)]
    pub uid: Option<String>,
}
