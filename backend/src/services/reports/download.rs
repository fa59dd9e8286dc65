//! # Report Download Service
//!
//! `GET /api/download-report/{id}` renders a stored report as a material inspection PDF.
//!
//! ## Workflow
//!
//! 1.  **Lookup**: the report is found by id; a missing or non-numeric id is a `404` and no
//!     document is produced. The installation whose UID equals the report's `qrData`, if
//!     any, supplies the labeled fields.
//! 2.  **Header images**: both logos are fetched concurrently. A failure is not an error for
//!     the request; it is handed to the layout, which prints a notice instead of the header.
//! 3.  **Rendering**: genpdf layout and image re-encoding are CPU and file bound, so they run on
//!     the blocking pool via `web::block`.
//! 4.  **Response**: `application/pdf` as an attachment named after the report's `qrData`.
//!     Scanned values can hold anything, so the name is reduced to header-safe ASCII first.

use super::REPORT_FAILED;
use crate::error::ApiError;
use crate::pdf::{render_inspection_report, HeaderImages, ReportContent};
use crate::services::upload::resolve_photo;
use crate::state::AppState;
use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use futures_util::future::try_join;
use log::info;

pub(crate) async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let report = match id.parse::<u64>() {
        Ok(id) => state.store.find_report_by_id(id).await,
        Err(_) => None,
    }
    .ok_or_else(|| ApiError::NotFound("Report not found".to_string()))?;

    let installation = state.store.find_installation_by_uid(&report.qr_data).await;
    let header = fetch_header_images(&state).await;

    let filename = attachment_file_name(&report.qr_data);
    let photo_path = report
        .photo
        .as_deref()
        .and_then(|reference| resolve_photo(&state.config.upload_dir, reference));
    let fonts_dir = state.config.fonts_dir.clone();
    let report_id = report.id;
    let pdf = web::block(move || {
        let content = ReportContent {
            report: &report,
            installation: installation.as_ref(),
            header,
            photo_path,
        };
        render_inspection_report(&content, &fonts_dir).map_err(|e| e.to_string())
    })
    .await
    .map_err(ApiError::internal(REPORT_FAILED))?
    .map_err(ApiError::internal(REPORT_FAILED))?;
    info!("Rendered report {} ({} bytes)", report_id, pdf.len());

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(filename)],
        })
        .body(pdf))
}

async fn fetch_header_images(state: &AppState) -> Result<HeaderImages, String> {
    let (emblem, logo) = try_join(
        state.fetcher.fetch(&state.config.emblem_url),
        state.fetcher.fetch(&state.config.logo_url),
    )
    .await
    .map_err(|e| e.to_string())?;
    Ok(HeaderImages { emblem, logo })
}

/// `material-inspection-report-<qrData>.pdf`, with every character that is not printable ASCII,
/// a quote or a path separator replaced by `_`.
fn attachment_file_name(qr_data: &str) -> String {
    let safe: String = qr_data
        .chars()
        .map(|c| match c {
            '"' | '\\' | '/' => '_',
            c if c.is_ascii_graphic() || c == ' ' => c,
            _ => '_',
        })
        .collect();
    format!("material-inspection-report-{}.pdf", safe)
}
