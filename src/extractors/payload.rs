//! Extract a flat field bag from a JSON or form-encoded body.

use crate::error::AppError;
use crate::service::Fields;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde_json::Value;
use std::collections::HashMap;

/// Request body as field name -> value. Form values arrive as JSON strings.
/// A JSON body that is not an object, or a body of an unsupported content type,
/// yields an empty bag. A body that cannot be read keeps the rejection's status.
#[derive(Clone, Debug, Default)]
pub struct Payload(pub Fields);

enum BodyKind {
    Json,
    Form,
    Other,
}

fn body_kind(req: &Request) -> BodyKind {
    let content_type = req
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.trim().to_lowercase())
        .unwrap_or_default();
    if content_type.is_empty() || content_type.starts_with("application/json") {
        BodyKind::Json
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        BodyKind::Form
    } else {
        BodyKind::Other
    }
}

#[async_trait]
impl<S> FromRequest<S> for Payload
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match body_kind(&req) {
            BodyKind::Form => {
                let Form(map) = Form::<HashMap<String, String>>::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
                Ok(Payload(
                    map.into_iter().map(|(k, v)| (k, Value::String(v))).collect(),
                ))
            }
            BodyKind::Json => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|e| AppError::Rejected(e.status(), e.body_text()))?;
                if bytes.iter().all(u8::is_ascii_whitespace) {
                    return Ok(Payload::default());
                }
                let value: Value = serde_json::from_slice(&bytes)
                    .map_err(|e| AppError::BadRequest(format!("invalid json: {}", e)))?;
                match value {
                    Value::Object(m) => Ok(Payload(m.into_iter().collect())),
                    _ => Ok(Payload::default()),
                }
            }
            BodyKind::Other => Ok(Payload::default()),
        }
    }
}
