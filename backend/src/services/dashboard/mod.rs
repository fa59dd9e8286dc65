//! # Dashboard Service Module
//!
//! Read-only projections over the installation records.
//!
//! ## Registered Routes:
//!
//! *   **`GET /dashboard-stats`**: the four summary cards.
//! *   **`GET /recent-activity`**: the last five installations as activity entries.
//! *   **`GET /warranty-alerts`**: installations whose warranty has expired or is about to.

mod activity;
mod stats;
mod warranty;

use actix_web::web::{self, get};

/// Number of entries in the recent activity feed.
const RECENT_ACTIVITY_LIMIT: usize = 5;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/dashboard-stats", get().to(stats::process))
        .route("/recent-activity", get().to(activity::process))
        .route("/warranty-alerts", get().to(warranty::process));
}
