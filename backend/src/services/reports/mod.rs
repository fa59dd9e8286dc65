//! # Report Service Module
//!
//! Report creation from two sources, listing, and PDF download.
//!
//! ## Registered Routes:
//!
//! *   **`POST /generate-report`**: JSON `{ uid }`. Summarizes the installation with that UID
//!     and stores a report linked to it. `400` without a UID, `404` for an unknown one.
//! *   **`POST /scan-report`**: multipart `{ qrData, photo? }`. Summarizes an ad-hoc scan.
//! *   **`GET /reports`**: every report, most recent first.
//! *   **`GET /download-report/{id}`**: the report rendered as a PDF attachment.

mod download;
mod generate;
mod list;
mod scan;

use actix_web::web::{self, get, post};

/// Public message of every internal failure while producing a report.
const REPORT_FAILED: &str = "Failed to generate report";

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/generate-report", post().to(generate::process))
        .route("/scan-report", post().to(scan::process))
        .route("/reports", get().to(list::process))
        .route("/download-report/{id}", get().to(download::process));
}
