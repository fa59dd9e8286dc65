use crate::error::ApiError;
use crate::services::upload::{read_form, UploadError};
use crate::state::AppState;
use crate::uid::allocate_uid;
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use chrono::Utc;
use common::model::installation::{Installation, InstallationDetails};
use common::responses::InstallationCreated;
use log::{debug, info};

/// Actix handler for `POST /api/installations`.
///
/// # Returns
/// - `200 OK` with `{ message, record }`, where `record.uid` is the newly allocated UID.
/// - `500 Internal Server Error` when the form cannot be read or the photo cannot be stored.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let record = create_installation(&state, payload)
        .await
        .map_err(ApiError::internal("Failed to save installation"))?;

    Ok(HttpResponse::Ok().json(InstallationCreated {
        message: "Installation saved successfully".to_string(),
        record,
    }))
}

/// Reads the installation form and appends the record.
///
/// The UID is derived from the id the store allocates, inside the same append, so two
/// concurrent submissions cannot end up with the same sequence number. Any `uid` sent by the
/// client is ignored.
async fn create_installation(
    state: &AppState,
    payload: Multipart,
) -> Result<Installation, UploadError> {
    let form = read_form(payload, &state.config.upload_dir).await?;

    let mut details = InstallationDetails::default();
    for (name, value) in form.fields {
        if !details.set_field(&name, value) {
            debug!("ignoring unknown installation field '{}'", name);
        }
    }
    let photo = form.photo;

    let record = state
        .store
        .installations
        .append_with(Box::new(move |id| Installation {
            id,
            uid: allocate_uid(details.part_name.as_deref(), id),
            details,
            photo,
            timestamp: Utc::now(),
        }))
        .await;

    info!("Saved installation record {} (id {})", record.uid, record.id);
    Ok(record)
}
