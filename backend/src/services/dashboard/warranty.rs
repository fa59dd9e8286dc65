use crate::state::AppState;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::warranty::WarrantyInfo;
use common::responses::WarrantyAlert;

/// `GET /api/warranty-alerts`: expired and expiring warranties, newest installation first.
///
/// Installations without a parsable commencement date or warranty length are never listed.
pub(crate) async fn process(state: web::Data<AppState>) -> HttpResponse {
    let today = Utc::now().date_naive();
    let alerts: Vec<WarrantyAlert> = state
        .store
        .installations
        .list_reversed()
        .await
        .iter()
        .filter_map(|installation| {
            let details = &installation.details;
            let info = WarrantyInfo::evaluate(
                details.date_of_commencement.as_deref(),
                details.warranty.as_deref(),
                today,
            );
            info.needs_review()
                .then(|| WarrantyAlert::new(installation, info))
        })
        .collect();
    HttpResponse::Ok().json(alerts)
}
