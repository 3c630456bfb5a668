//! Course handlers: create, read, update, delete.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::{created, ok, ok_empty};
use crate::service::CourseService;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn create(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let course = CourseService::create(&state.pool, &body).await?;
    Ok(created(course))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_id(&id_str)?;
    let course = CourseService::read(&state.pool, course_id).await?;
    Ok(ok(course))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_id(&id_str)?;
    let course = CourseService::update(&state.pool, course_id, &body).await?;
    Ok(ok(course))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let course_id = parse_id(&id_str)?;
    CourseService::delete(&state.pool, course_id).await?;
    Ok(ok_empty())
}
