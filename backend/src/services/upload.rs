//! Multipart form reading shared by the installation and scan endpoints.
//!
//! Text parts are collected by name. A part named `photo` carrying a file name is streamed to
//! the upload directory under a random name. Records store the public reference
//! `uploads/<name>`, which is also the URL path `/uploads` serves it under, wherever the upload
//! directory lives on disk.

use actix_multipart::{Multipart, MultipartError};
use futures_util::StreamExt;
use log::info;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

const PHOTO_FIELD: &str = "photo";
const PHOTO_REFERENCE_PREFIX: &str = "uploads/";

#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("malformed multipart payload: {0}")]
    Multipart(String),

    #[error("field '{0}' is not valid UTF-8")]
    InvalidText(String),

    #[error("could not store upload: {0}")]
    Io(#[from] std::io::Error),
}

impl From<MultipartError> for UploadError {
    fn from(e: MultipartError) -> Self {
        UploadError::Multipart(e.to_string())
    }
}

#[derive(Debug, Default)]
pub struct FormSubmission {
    pub fields: HashMap<String, String>,
    /// Stored path of the uploaded photo, if one was sent.
    pub photo: Option<String>,
}

/// Keeps a short alphanumeric extension from the client file name so the stored file is
/// served with a sensible content type.
fn stored_file_name(client_name: &str) -> String {
    let extension = Path::new(client_name)
        .extension()
        .and_then(|e| e.to_str())
        .filter(|e| e.len() <= 5 && e.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|e| e.to_ascii_lowercase());
    let id = uuid::Uuid::new_v4().simple().to_string();
    match extension {
        Some(ext) => format!("{}.{}", id, ext),
        None => id,
    }
}

pub async fn read_form(
    mut payload: Multipart,
    upload_dir: &Path,
) -> Result<FormSubmission, UploadError> {
    let mut form = FormSubmission::default();

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();

        match name.as_deref() {
            // Browsers send an empty file part when no photo was chosen
            Some(PHOTO_FIELD) if !filename.is_empty() => {
                tokio::fs::create_dir_all(upload_dir).await?;
                let stored_name = stored_file_name(&filename);
                let file = File::create(upload_dir.join(&stored_name)).await?;
                let mut writer = BufWriter::new(file);
                let mut size = 0usize;
                while let Some(chunk) = field.next().await {
                    let chunk = chunk?;
                    size += chunk.len();
                    writer.write_all(&chunk).await?;
                }
                writer.flush().await?;

                let reference = format!("{}{}", PHOTO_REFERENCE_PREFIX, stored_name);
                info!(
                    "Photo evidence attached: {} ({} bytes in {})",
                    reference,
                    size,
                    upload_dir.display()
                );
                form.photo = Some(reference);
            }

            Some(PHOTO_FIELD) | None => {
                while let Some(chunk) = field.next().await {
                    chunk?;
                }
            }

            Some(text_field) => {
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    bytes.extend_from_slice(&chunk?);
                }
                let value = String::from_utf8(bytes)
                    .map_err(|_| UploadError::InvalidText(text_field.to_string()))?;
                form.fields.insert(text_field.to_string(), value);
            }
        }
    }

    Ok(form)
}

/// Maps a stored `uploads/<name>` reference back to its file in `upload_dir`.
///
/// Only plain file names directly inside the upload directory resolve.
pub fn resolve_photo(upload_dir: &Path, reference: &str) -> Option<PathBuf> {
    let name = reference.strip_prefix(PHOTO_REFERENCE_PREFIX)?;
    let is_plain_name = !name.is_empty()
        && name != ".."
        && name != "."
        && !name.contains(['/', '\\']);
    is_plain_name.then(|| upload_dir.join(name))
}
