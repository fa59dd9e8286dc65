use crate::state::AppState;
use actix_web::{web, HttpResponse};

/// `GET /api/installations`: reverse chronological order.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.store.installations.list_reversed().await)
}
