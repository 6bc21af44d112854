//! OpenAPI documentation aggregator.
//!
//! Collects all `#[utoipa::path]`-annotated handlers and `ToSchema`-derived
//! types into a single OpenAPI spec, served via Scalar UI at `/docs`.

use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Personal Site API",
        version = "0.1.0",
        description = "Travel-log trips for the personal website: create, list, fetch and seed.",
    ),
    tags(
        (name = "Health", description = "Readiness message and database diagnostics"),
        (name = "Trips", description = "Trip records and the built-in seed dataset"),
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::store_test,
        // Trips
        crate::api::trips::trips_create,
        crate::api::trips::trips_list,
        crate::api::trips::trips_get,
        crate::api::trips::trips_seed,
    ),
    components(schemas(
        travelog_core::Trip,
        travelog_core::TripLocation,
        travelog_core::TripRecord,
        travelog_core::FieldError,
        crate::api::ErrorResponse,
        crate::api::health::RootResponse,
        crate::api::trips::CreatedResponse,
        crate::api::trips::TripListResponse,
        crate::api::trips::SeedResponse,
        crate::trips::Diagnostics,
    ))
)]
pub struct ApiDoc;
