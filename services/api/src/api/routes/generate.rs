//! URN generation.

use axum::{extract::rejection::JsonRejection, Json};
use devurn_urn::{DevUrn, Subtype, UrnBreakdown};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use super::non_empty;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub subtype: Option<String>,
    pub input: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub urn: DevUrn,
    pub subtype: Subtype,
    pub input: String,
    pub valid: bool,
    pub breakdown: UrnBreakdown,
}

/// POST /api/generate
pub async fn generate(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(req) = payload?;
    let (Some(subtype), Some(input)) = (non_empty(req.subtype), non_empty(req.input)) else {
        return Err(ApiError::missing_fields("subtype and input"));
    };

    let subtype: Subtype = subtype.parse()?;
    let urn = DevUrn::generate(subtype, &input).inspect_err(|e| {
        debug!(%subtype, code = e.code(), "generate rejected input");
    })?;
    let breakdown = devurn_urn::breakdown(&urn.to_string())?;
    debug!(%subtype, "generate request");

    Ok(Json(GenerateResponse {
        urn,
        subtype,
        input: input.trim().to_string(),
        valid: true,
        breakdown,
    }))
}

/// GET /api/generate
pub async fn usage() -> Json<Value> {
    Json(json!({
        "message": "POST to /api/generate with { subtype, input } to generate a DEV URN",
        "example": { "subtype": "mac", "input": "00:1B:44:11:3A:B7" },
    }))
}
