//! Assignment submission request parsing

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
};

use crate::{
    constants::{messages, UPLOAD_FIELD_NAME},
    error::{AppError, AppResult},
    services::{submission_service::upload_too_large, UploadedFile},
    utils::client_file_name,
};

/// Read the `file` field from a multipart body.
///
/// The field is consumed chunk by chunk and rejected as soon as it grows past
/// `max_kb` kilobytes. Other fields, and any `file` part after the first, are
/// skipped.
pub async fn read_upload(multipart: &mut Multipart, max_kb: u64) -> AppResult<UploadedFile> {
    let max_bytes = (max_kb as usize).saturating_mul(1024);
    let mut upload = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max_kb))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) || upload.is_some() {
            continue;
        }

        let Some(raw_name) = field.file_name().map(str::to_owned) else {
            return Err(AppError::Validation(messages::FILE_NOT_A_FILE.to_string()));
        };
        let Some(original_name) = client_file_name(&raw_name) else {
            return Err(AppError::Validation(messages::FILE_REQUIRED.to_string()));
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field
            .chunk()
            .await
            .map_err(|e| multipart_error(e, max_kb))?
        {
            if bytes.len() + chunk.len() > max_bytes {
                return Err(upload_too_large(max_kb));
            }
            bytes.extend_from_slice(&chunk);
        }

        upload = Some(UploadedFile {
            original_name,
            bytes,
        });
    }

    upload.ok_or_else(|| AppError::Validation(messages::FILE_REQUIRED.to_string()))
}

/// Map a multipart read failure to a validation error
fn multipart_error(err: MultipartError, max_kb: u64) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        upload_too_large(max_kb)
    } else {
        AppError::Validation(format!("Failed to read multipart: {}", err.body_text()))
    }
}
