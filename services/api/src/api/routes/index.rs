//! Service index.

use axum::Json;
use serde_json::{json, Value};

use super::{RFC, URN_NAMESPACE};

/// GET /api
pub async fn index() -> Json<Value> {
    let example = json!({ "subtype": "mac", "input": "00:1B:44:11:3A:B7" });

    Json(json!({
        "name": "DEV URN Generator API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "REST API for generating and validating Device Identifier URNs according to RFC 9039",
        "rfc": RFC,
        "namespace": URN_NAMESPACE,
        "endpoints": {
            "/api/subtypes": {
                "method": "GET",
                "description": "List all supported DEV URN subtypes",
                "response": "Array of subtype definitions"
            },
            "/api/detect": {
                "method": "POST",
                "description": "Auto-detect subtype from device identifier",
                "body": { "input": "string" },
                "response": "Detected subtype and metadata"
            },
            "/api/validate": {
                "method": "POST",
                "description": "Validate a device identifier for a specific subtype",
                "body": { "subtype": "string", "input": "string" },
                "response": "Validation result and metadata"
            },
            "/api/generate": {
                "method": "POST",
                "description": "Generate a DEV URN from device identifier",
                "body": { "subtype": "string", "input": "string" },
                "response": "Generated URN, metadata and breakdown"
            },
            "/api/breakdown": {
                "method": "POST",
                "description": "Split a DEV URN into its components",
                "body": { "urn": "string" },
                "response": "URN breakdown"
            }
        },
        "examples": {
            "detectMac": {
                "url": "/api/detect",
                "method": "POST",
                "body": { "input": "00:1B:44:11:3A:B7" }
            },
            "validateMac": { "url": "/api/validate", "method": "POST", "body": example.clone() },
            "generateMac": { "url": "/api/generate", "method": "POST", "body": example },
            "breakdownMac": {
                "url": "/api/breakdown",
                "method": "POST",
                "body": { "urn": "urn:dev:mac:021b44fffe113ab7" }
            }
        }
    }))
}
