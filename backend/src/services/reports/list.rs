use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/reports`: reverse chronological order.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.reports.list_reversed().await)
}
