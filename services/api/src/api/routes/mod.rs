//! DEV URN routes, mounted under `/api`.

mod breakdown;
mod detect;
mod generate;
mod index;
mod subtypes;
mod validate;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Namespace reported by the listing endpoints.
pub(crate) const URN_NAMESPACE: &str = "urn:dev";

/// Standard the identifiers follow.
pub(crate) const RFC: &str = "RFC 9039";

/// Create URN routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .route("/subtypes", get(subtypes::list_subtypes))
        .route("/detect", post(detect::detect).get(detect::usage))
        .route("/validate", post(validate::validate).get(validate::usage))
        .route("/generate", post(generate::generate).get(generate::usage))
        .route("/breakdown", post(breakdown::breakdown).get(breakdown::usage))
}

/// Treats a missing JSON field and an empty string the same way.
pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
