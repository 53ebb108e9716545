use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::PassengerId;
use super::service::{DisruptionService, PassengerFilter, ServiceError};

/// Router builder exposing the disruption and eligibility endpoints.
pub fn disruption_router(service: Arc<DisruptionService>) -> Router {
    Router::new()
        .route("/api/v1/flights", get(flights_handler))
        .route("/api/v1/flights/:flight_key", get(flight_detail_handler))
        .route(
            "/api/v1/flights/:flight_key/passengers",
            get(passengers_handler),
        )
        .route(
            "/api/v1/flights/:flight_key/passengers/:passenger_id/eligibility",
            get(eligibility_handler),
        )
        .route(
            "/api/v1/flights/:flight_key/disrupted-passengers",
            get(disrupted_passengers_handler),
        )
        .route("/api/v1/disruptions", get(disruptions_handler))
        .route("/api/v1/disruptions/summary", get(summary_handler))
        .with_state(service)
}

pub(crate) async fn flights_handler(State(service): State<Arc<DisruptionService>>) -> Response {
    let flights = service.flights_overview();
    let payload = json!({
        "flights": flights,
        "total": flights.len(),
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}

pub(crate) async fn flight_detail_handler(
    State(service): State<Arc<DisruptionService>>,
    Path(flight_key): Path<String>,
) -> Response {
    match service.flight_detail(&flight_key) {
        Ok(detail) => (StatusCode::OK, axum::Json(detail)).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn passengers_handler(
    State(service): State<Arc<DisruptionService>>,
    Path(flight_key): Path<String>,
    Query(filter): Query<PassengerFilter>,
) -> Response {
    match service.passengers(&flight_key, &filter) {
        Ok(passengers) => {
            let payload = json!({
                "flight_key": flight_key,
                "total": passengers.len(),
                "passengers": passengers,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => not_found(error),
    }
}

pub(crate) async fn disrupted_passengers_handler(
    State(service): State<Arc<DisruptionService>>,
    Path(flight_key): Path<String>,
) -> Response {
    match service.disrupted_passengers(&flight_key) {
        Ok(manifest) => (StatusCode::OK, axum::Json(manifest)).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn eligibility_handler(
    State(service): State<Arc<DisruptionService>>,
    Path((flight_key, passenger_id)): Path<(String, String)>,
) -> Response {
    match service.eligibility(&flight_key, &PassengerId(passenger_id)) {
        Ok(verdict) => (StatusCode::OK, axum::Json(verdict)).into_response(),
        Err(error) => not_found(error),
    }
}

pub(crate) async fn disruptions_handler(
    State(service): State<Arc<DisruptionService>>,
) -> Response {
    let report = service.scan();
    (StatusCode::OK, axum::Json(report)).into_response()
}

pub(crate) async fn summary_handler(State(service): State<Arc<DisruptionService>>) -> Response {
    let summary = service.summary();
    (StatusCode::OK, axum::Json(summary)).into_response()
}

fn not_found(error: ServiceError) -> Response {
    let payload = json!({ "error": error.to_string() });
    (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
}
