//! Success response helpers. Bodies are the bare projection, no envelope.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(data))
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

/// 200 with an empty body, used by deletes.
pub fn ok_empty() -> StatusCode {
    StatusCode::OK
}
