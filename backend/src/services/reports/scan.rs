use super::REPORT_FAILED;
use crate::error::ApiError;
use crate::services::upload::read_form;
use crate::state::AppState;
use crate::summary::{self, SummarySource};
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::report::Report;
use common::responses::ScanReport;
use log::info;

/// Actix handler for `POST /api/scan-report`.
///
/// Any scanned value is accepted, including an empty one; unknown codes get the generic
/// "scan logged" summary.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let mut form = read_form(payload, &state.config.upload_dir)
        .await
        .map_err(ApiError::internal(REPORT_FAILED))?;
    let qr_data = form.fields.remove("qrData").unwrap_or_default();
    info!("Received scan report request for: {}", qr_data);

    let summary = summary::compose(
        state.summarizer.as_ref(),
        SummarySource::Scan { qr_data: &qr_data },
        state.config.summary_timeout,
    )
    .await
    .map_err(ApiError::internal(REPORT_FAILED))?;

    let photo = form.photo;
    let report = state
        .store
        .reports
        .append_with(Box::new(move |id| Report {
            id,
            qr_data,
            summary,
            photo,
            timestamp: Utc::now(),
        }))
        .await;
    info!("Saved report record {} for scan {}", report.id, report.qr_data);

    Ok(HttpResponse::Ok().json(ScanReport {
        summary: report.summary,
        photo: report.photo,
        id: report.id,
    }))
}
