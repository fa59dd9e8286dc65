use super::RECENT_ACTIVITY_LIMIT;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::dashboard::Activity;

/// `GET /api/recent-activity`: newest installations first.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    let activity: Vec<Activity> = state
        .store
        .installations
        .list_reversed()
        .await
        .iter()
        .take(RECENT_ACTIVITY_LIMIT)
        .map(Activity::installed)
        .collect();
    HttpResponse::Ok().json(activity)
}
