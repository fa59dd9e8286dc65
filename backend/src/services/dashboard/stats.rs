use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::dashboard::dashboard_stats;

pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    let count = state.store.installations.len().await as u64;
    HttpResponse::Ok().json(dashboard_stats(count))
}
