use super::REPORT_FAILED;
use crate::error::ApiError;
use crate::state::AppState;
use crate::summary::{self, SummarySource};
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::report::Report;
use common::requests::GenerateReportRequest;
use common::responses::GeneratedReport;
use log::info;

/// Actix handler for `POST /api/generate-report`.
///
/// The report stores the UID as its `qrData` and inherits the installation's photo. Nothing is
/// stored when validation or the lookup fails.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<GenerateReportRequest>,
) -> Result<HttpResponse, ApiError> {
    let uid = payload
        .into_inner()
        .uid
        .filter(|uid| !uid.trim().is_empty())
        .ok_or_else(|| ApiError::Validation("UID is required".to_string()))?;

    let installation = state
        .store
        .find_installation_by_uid(&uid)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("No installation found for UID: {}", uid)))?;

    let summary = summary::compose(
        state.summarizer.as_ref(),
        SummarySource::Installation(&installation),
        state.config.summary_timeout,
    )
    .await
    .map_err(ApiError::internal(REPORT_FAILED))?;

    let photo = installation.photo.clone();
    let report = state
        .store
        .reports
        .append_with(Box::new(move |id| Report {
            id,
            qr_data: uid,
            summary,
            photo,
            timestamp: Utc::now(),
        }))
        .await;
    info!("Saved report record {} for {}", report.id, report.qr_data);

    Ok(HttpResponse::Ok().json(GeneratedReport {
        id: report.id,
        title: format!("AI Summary for {}", report.qr_data),
        content: report.summary,
        photo: report.photo,
    }))
}
