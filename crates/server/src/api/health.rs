//! Readiness and store diagnostic endpoints.
//!
//! SRP: tell a caller whether the server and its database are usable.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;
use crate::trips::{self, Diagnostics};

#[derive(Serialize, utoipa::ToSchema)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Static readiness message.
#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Server is up", body = RootResponse)
    )
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Personal Site Backend Ready",
    })
}

/// Database diagnostic.
///
/// Reports whether the store is connected, whether its configuration is
/// present, and up to 10 collection names. Never fails: probe errors are
/// reported in the `database` field.
#[utoipa::path(
    get,
    path = "/test",
    tag = "Health",
    responses(
        (status = 200, description = "Diagnostic report", body = Diagnostics)
    )
)]
pub async fn store_test(State(state): State<Arc<AppState>>) -> Json<Diagnostics> {
    let store = state.store.as_deref();
    Json(trips::diagnostics(store, &state.config.database).await)
}
