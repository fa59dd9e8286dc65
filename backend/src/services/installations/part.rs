use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::part::PartDetail;

/// `GET /api/parts/{uid}`: detail view of the installation with that UID, or `404`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    uid: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let installation = state
        .store
        .find_installation_by_uid(&uid)
        .await
        .ok_or_else(|| ApiError::NotFound("Part not found".to_string()))?;

    Ok(HttpResponse::Ok().json(PartDetail::from_installation(
        &installation,
        Utc::now().date_naive(),
    )))
}
