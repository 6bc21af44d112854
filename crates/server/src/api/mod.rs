//! Domain-focused API endpoint modules.
//!
//! Each sub-module owns a single responsibility area.
//! The shared error type and store guard live here in mod.rs.

pub mod doc;
mod health;
mod trips;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use travelog_core::{FieldError, TravelogError};

use crate::state::{AppState, SharedStore};

// ── Shared types ─────────────────────────────────────────────────

#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<FieldError>,
}

/// Converts [`TravelogError`] into an HTTP response with a JSON body:
///
/// ```json
/// { "error": "...", "fields": [{ "field": "title", "message": "field required" }] }
/// ```
#[derive(Debug)]
pub struct ApiError(pub TravelogError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            TravelogError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            TravelogError::InvalidId(_) => StatusCode::BAD_REQUEST,
            TravelogError::NotFound(_) => StatusCode::NOT_FOUND,
            TravelogError::StoreUnavailable => StatusCode::INTERNAL_SERVER_ERROR,
            TravelogError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self.0 {
            TravelogError::Validation(errors) => ErrorResponse {
                error: "Validation failed".to_string(),
                fields: errors.fields,
            },
            TravelogError::Storage(msg) => {
                tracing::warn!("Storage error: {}", msg);
                ErrorResponse {
                    error: "Internal server error".to_string(),
                    fields: Vec::new(),
                }
            }
            other => ErrorResponse {
                error: other.to_string(),
                fields: Vec::new(),
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<TravelogError> for ApiError {
    fn from(err: TravelogError) -> Self {
        ApiError(err)
    }
}

impl From<travelog_core::ValidationErrors> for ApiError {
    fn from(errors: travelog_core::ValidationErrors) -> Self {
        ApiError(TravelogError::Validation(errors))
    }
}

// ── Store guard ──────────────────────────────────────────────────

/// Return the store handle, or a 500 if the server runs without a database.
pub(crate) fn require_store(state: &AppState) -> Result<&SharedStore, ApiError> {
    state
        .store
        .as_ref()
        .ok_or(ApiError(TravelogError::StoreUnavailable))
}

// ── Re-exports ───────────────────────────────────────────────────
// Flat `api::foo` import paths used by router.rs route registration.

pub use health::{root, store_test};
pub use trips::{trips_create, trips_get, trips_list, trips_seed};
