//! Todo handlers backed by the in-memory store.

use crate::error::AppError;
use crate::extractors::Payload;
use crate::handlers::parse_id;
use crate::response::{created, ok};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.todos.list())
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.get(parse_id(&id_str)?)?;
    Ok(ok(todo))
}

pub async fn create(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.create(parse_id(&id_str)?, &body)?;
    Ok(created(todo))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let todo = state.todos.update(parse_id(&id_str)?, &body)?;
    Ok(ok(todo))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let remaining = state.todos.delete(parse_id(&id_str)?)?;
    Ok(ok(remaining))
}
