//! URN decomposition.

use axum::{extract::rejection::JsonRejection, Json};
use devurn_urn::UrnBreakdown;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::non_empty;
use crate::api::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct BreakdownRequest {
    pub urn: Option<String>,
}

/// POST /api/breakdown
pub async fn breakdown(
    payload: Result<Json<BreakdownRequest>, JsonRejection>,
) -> Result<Json<UrnBreakdown>, ApiError> {
    let Json(req) = payload?;
    let Some(urn) = non_empty(req.urn) else {
        return Err(ApiError::bad_request(
            "missing_field",
            "Missing required field: urn",
        ));
    };

    let breakdown = devurn_urn::breakdown(&urn)?;
    debug!(subtype = %breakdown.subtype, "breakdown request");
    Ok(Json(breakdown))
}

/// GET /api/breakdown
pub async fn usage() -> Json<Value> {
    Json(json!({
        "message": "POST to /api/breakdown with { urn } to split a DEV URN into its components",
        "example": { "urn": "urn:dev:ops:32473:switch:12345" },
    }))
}
