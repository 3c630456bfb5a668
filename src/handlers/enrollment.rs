//! Enrollment handlers under `/student/:student_id/course`.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::{created, ok, ok_empty};
use crate::service::EnrollmentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(
    State(state): State<AppState>,
    Path(student_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&student_str)?;
    let rows = EnrollmentService::list_for_student(&state.pool, student_id).await?;
    Ok(ok(rows))
}

pub async fn enroll(
    State(state): State<AppState>,
    Path(student_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&student_str)?;
    let rows = EnrollmentService::enroll(&state.pool, student_id, &body).await?;
    Ok(created(rows))
}

pub async fn unenroll(
    State(state): State<AppState>,
    Path((student_str, course_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&student_str)?;
    let course_id = parse_id(&course_str)?;
    EnrollmentService::unenroll(&state.pool, student_id, course_id).await?;
    Ok(ok_empty())
}
