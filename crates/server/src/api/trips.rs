//! Trip CRUD and seed endpoints.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use travelog_core::validate::trip_from_payload;
use travelog_core::{Trip, TripRecord, ValidationErrors};

use crate::state::AppState;
use crate::trips;

use super::{require_store, ApiError, ErrorResponse};

#[derive(Serialize, utoipa::ToSchema)]
pub struct CreatedResponse {
    pub id: String,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct TripListResponse {
    pub items: Vec<TripRecord>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct SeedResponse {
    pub inserted: usize,
}

/// Create a trip.
///
/// The body is validated against the trip schema before anything touches
/// the store; every offending field is listed in the 422 response.
#[utoipa::path(
    post,
    path = "/api/trips",
    tag = "Trips",
    request_body = Trip,
    responses(
        (status = 200, description = "Trip stored", body = CreatedResponse),
        (status = 422, description = "Schema violation", body = ErrorResponse),
        (status = 500, description = "Database not available", body = ErrorResponse)
    )
)]
pub async fn trips_create(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let Json(payload) = payload.map_err(|rejection| {
        let mut errors = ValidationErrors::default();
        errors.push("body", rejection.body_text());
        ApiError::from(errors)
    })?;

    let trip = trip_from_payload(&payload)?;
    let store = require_store(&state)?;
    let id = trips::create_trip(store.as_ref(), &trip).await?;
    Ok(Json(CreatedResponse { id: id.to_string() }))
}

/// List all trips in storage order.
#[utoipa::path(
    get,
    path = "/api/trips",
    tag = "Trips",
    responses(
        (status = 200, description = "All stored trips", body = TripListResponse),
        (status = 500, description = "Database not available", body = ErrorResponse)
    )
)]
pub async fn trips_list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<TripListResponse>, ApiError> {
    let store = require_store(&state)?;
    let items = trips::list_trips(store.as_ref()).await?;
    Ok(Json(TripListResponse { items }))
}

/// Fetch one trip by id.
#[utoipa::path(
    get,
    path = "/api/trips/{id}",
    tag = "Trips",
    params(("id" = String, Path, description = "Trip id")),
    responses(
        (status = 200, description = "The trip", body = TripRecord),
        (status = 400, description = "Malformed id", body = ErrorResponse),
        (status = 404, description = "No trip with this id", body = ErrorResponse),
        (status = 500, description = "Database not available", body = ErrorResponse)
    )
)]
pub async fn trips_get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<TripRecord>, ApiError> {
    let store = require_store(&state)?;
    let record = trips::get_trip(store.as_ref(), &id).await?;
    Ok(Json(record))
}

/// Insert the built-in trips whose titles are not stored yet.
#[utoipa::path(
    post,
    path = "/api/seed",
    tag = "Trips",
    responses(
        (status = 200, description = "Number of trips inserted", body = SeedResponse),
        (status = 500, description = "Database not available", body = ErrorResponse)
    )
)]
pub async fn trips_seed(State(state): State<Arc<AppState>>) -> Result<Json<SeedResponse>, ApiError> {
    let store = require_store(&state)?;
    let inserted = trips::seed(store.as_ref()).await?;
    Ok(Json(SeedResponse { inserted }))
}
