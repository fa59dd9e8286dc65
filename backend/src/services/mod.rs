//! HTTP surface of the backend.
//!
//! All JSON endpoints live under `/api`; uploaded photos are served as static files under
//! `/uploads`.

pub mod dashboard;
pub mod installations;
pub mod reports;
pub mod upload;

use crate::state::AppState;
use actix_files::Files;
use actix_web::error::InternalError;
use actix_web::web::{self, scope};
use actix_web::HttpResponse;
use common::responses::ErrorBody;

/// The base path for all JSON endpoints.
const API_PATH: &str = "/api";
const UPLOADS_PATH: &str = "/uploads";

/// Registers the shared state, the JSON body limits and every route.
///
/// Used by `main.rs` for each worker and by the HTTP tests, so both run the same wiring.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    let json_config = web::JsonConfig::default()
        .limit(state.config.json_limit)
        .error_handler(|err, _req| {
            let body = ErrorBody {
                error: format!("Invalid JSON body: {}", err),
            };
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        });

    cfg.app_data(web::Data::new(state.clone()))
        .app_data(json_config)
        .service(
            scope(API_PATH)
                .configure(installations::configure_routes)
                .configure(reports::configure_routes)
                .configure(dashboard::configure_routes),
        )
        .service(Files::new(UPLOADS_PATH, &state.config.upload_dir));
}
