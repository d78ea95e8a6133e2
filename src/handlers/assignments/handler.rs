//! Assignment submission handler implementations

use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    constants::messages,
    error::{AppError, AppResult},
    middleware::auth::AuthenticatedUser,
    services::{require_enrollment, require_student, EnrolledStudent, SubmissionService},
    state::AppState,
    utils::now_utc,
};

use super::{
    request::read_upload,
    response::{MySubmissionResponse, SubmitResponse},
};

/// Get the caller's submission for an assignment
pub async fn my_submission(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<String>,
) -> AppResult<Json<MySubmissionResponse>> {
    let enrolled = authorize(&state, &auth_user, &id).await?;

    let submission = SubmissionService::my_submission(&state, &enrolled).await?;

    Ok(Json(MySubmissionResponse {
        status: true,
        data: submission,
    }))
}

/// Submit or re-submit a file for an assignment
pub async fn submit(
    State(state): State<AppState>,
    auth_user: AuthenticatedUser,
    Path(id): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<(StatusCode, Json<SubmitResponse>)> {
    let enrolled = authorize(&state, &auth_user, &id).await?;

    // A body that is not multipart at all carries no file
    let mut multipart =
        multipart.map_err(|_| AppError::Validation(messages::FILE_REQUIRED.to_string()))?;
    let upload = read_upload(&mut multipart, state.config().storage.max_upload_size_kb).await?;

    let outcome = SubmissionService::submit(&state, &enrolled, upload, now_utc()).await?;

    Ok((StatusCode::CREATED, Json(SubmitResponse::from(outcome))))
}

/// Run the guard for a raw path id.
///
/// The role check comes first, so non-students get 403 even for ids that do
/// not parse; a non-numeric id is otherwise an unknown assignment.
async fn authorize(
    state: &AppState,
    user: &AuthenticatedUser,
    raw_id: &str,
) -> AppResult<EnrolledStudent> {
    require_student(user)?;
    let assignment_id = raw_id
        .parse::<i64>()
        .map_err(|_| AppError::assignment_not_found())?;
    require_enrollment(state, user, assignment_id).await
}
