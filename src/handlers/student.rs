//! Student handlers: create, read, update, delete.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::{created, ok, ok_empty};
use crate::service::StudentService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let student = StudentService::create(&state.pool, &body).await?;
    Ok(created(student))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&id_str)?;
    let student = StudentService::read(&state.pool, student_id).await?;
    Ok(ok(student))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&id_str)?;
    let student = StudentService::update(&state.pool, student_id, &body).await?;
    Ok(ok(student))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let student_id = parse_id(&id_str)?;
    StudentService::delete(&state.pool, student_id).await?;
    Ok(ok_empty())
}
