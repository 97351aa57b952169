//! Input validation.

use axum::{extract::rejection::JsonRejection, Json};
use devurn_urn::Subtype;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::non_empty;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct ValidateRequest {
    pub subtype: Option<String>,
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
    pub error: Option<String>,
    pub code: Option<&'static str>,
    pub subtype: Subtype,
    pub input: String,
    pub format: &'static str,
    pub example: &'static str,
}

/// POST /api/validate
///
/// Invalid input is a successful response with `valid: false`; only a
/// missing field or an unknown subtype is rejected.
pub async fn validate(
    payload: Result<Json<ValidateRequest>, JsonRejection>,
) -> Result<Json<ValidateResponse>, ApiError> {
    let Json(req) = payload?;
    let (Some(subtype), Some(input)) = (non_empty(req.subtype), req.input) else {
        return Err(ApiError::missing_fields("subtype and input"));
    };

    let subtype: Subtype = subtype.parse()?;
    let result = devurn_urn::validate(subtype.key(), &input);
    debug!(%subtype, valid = result.is_valid, "validate request");

    let descriptor = subtype.descriptor();
    Ok(Json(ValidateResponse {
        valid: result.is_valid,
        code: result.error.as_ref().map(|e| e.code()),
        error: result.error.map(|e| e.to_string()),
        subtype,
        input,
        format: descriptor.format,
        example: descriptor.example,
    }))
}

/// GET /api/validate
pub async fn usage() -> Json<Value> {
    Json(json!({
        "message": "POST to /api/validate with { subtype, input } to validate a device identifier",
        "example": { "subtype": "mac", "input": "00:1B:44:11:3A:B7" },
    }))
}
