//! Subtype auto-detection.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use devurn_urn::{Subtype, SubtypeDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::api::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DetectRequest {
    pub input: Option<String>,
}

/// Descriptor fields echoed back for a detected subtype.
#[derive(Debug, Serialize)]
pub struct SubtypeInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub format: &'static str,
    pub example: &'static str,
}

impl From<&'static SubtypeDescriptor> for SubtypeInfo {
    fn from(d: &'static SubtypeDescriptor) -> Self {
        Self {
            name: d.name,
            description: d.description,
            format: d.format,
            example: d.example,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub input: String,
    pub detected_subtype: Option<Subtype>,
    pub subtype_info: Option<SubtypeInfo>,
    pub success: bool,
}

/// POST /api/detect
pub async fn detect(
    State(state): State<AppState>,
    payload: Result<Json<DetectRequest>, JsonRejection>,
) -> Result<Json<DetectResponse>, ApiError> {
    let Json(req) = payload?;
    let Some(input) = req.input else {
        return Err(ApiError::bad_request(
            "missing_field",
            "Missing required field: input",
        ));
    };

    let detected = state.detector().detect(&input);
    debug!(detected = ?detected, "detect request");

    Ok(Json(DetectResponse {
        input,
        detected_subtype: detected,
        subtype_info: detected.map(|s| s.descriptor().into()),
        success: detected.is_some(),
    }))
}

/// GET /api/detect
pub async fn usage(State(state): State<AppState>) -> Json<Value> {
    let examples: Vec<Value> = [
        "00:1B:44:11:3A:B7",
        "1000008F12AA",
        "10E2073A01080063",
        "32473:foo",
        "32473:switch:12345",
    ]
    .into_iter()
    .map(|input| json!({ "input": input, "expectedSubtype": state.detector().detect(input) }))
    .collect();

    Json(json!({
        "message": "POST to /api/detect with { input } to auto-detect the subtype of a device identifier",
        "examples": examples,
    }))
}
