//! Subtype listing.

use axum::Json;
use devurn_urn::SubtypeDescriptor;
use serde::Serialize;

use super::{RFC, URN_NAMESPACE};

#[derive(Debug, Serialize)]
pub struct SubtypesResponse {
    pub subtypes: &'static [SubtypeDescriptor],
    pub count: usize,
    pub rfc: &'static str,
    pub namespace: &'static str,
}

/// GET /api/subtypes
pub async fn list_subtypes() -> Json<SubtypesResponse> {
    let subtypes = devurn_urn::list_subtypes();
    Json(SubtypesResponse {
        subtypes,
        count: subtypes.len(),
        rfc: RFC,
        namespace: URN_NAMESPACE,
    })
}
