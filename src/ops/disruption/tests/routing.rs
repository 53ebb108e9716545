use super::common::*;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use serde_json::Value;
use tower::ServiceExt;

use crate::ops::disruption::disruption_router;

async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body reads");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

async fn get(path: &str) -> Response {
    let router = disruption_router(sample_service());
    router
        .oneshot(
            Request::get(path)
                .body(Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes")
}

#[tokio::test]
async fn flights_route_lists_all_flights_with_disruption_flag() {
    let response = get("/api/v1/flights").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total"), Some(&Value::from(2)));

    let flights = payload
        .get("flights")
        .and_then(Value::as_array)
        .expect("flights array");
    let delayed = flights
        .iter()
        .find(|f| f.get("flight_number") == Some(&Value::from("EY129")))
        .expect("EY129 present");
    assert_eq!(delayed.get("is_disrupted"), Some(&Value::Bool(true)));
}

#[tokio::test]
async fn flight_detail_resolves_by_number_and_embeds_disruption() {
    let response = get("/api/v1/flights/EY129").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("passenger_count"), Some(&Value::from(3)));
    let disruption = payload.get("disruption").expect("disruption embedded");
    assert_eq!(disruption.get("severity"), Some(&Value::from("Medium")));
}

#[tokio::test]
async fn unknown_flight_returns_not_found() {
    let response = get("/api/v1/flights/EY000").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("EY000"));
}

#[tokio::test]
async fn passenger_filters_narrow_the_manifest() {
    let response = get("/api/v1/flights/EY129/passengers?vip=true").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total"), Some(&Value::from(1)));
    let passengers = payload
        .get("passengers")
        .and_then(Value::as_array)
        .expect("passengers array");
    assert_eq!(
        passengers[0].get("passenger_id"),
        Some(&Value::from("P2"))
    );
}

#[tokio::test]
async fn eligibility_route_returns_a_verdict() {
    let response = get("/api/v1/flights/EY129/passengers/P1/eligibility").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("disrupted"), Some(&Value::Bool(true)));
    let actions = payload
        .get("eligible_for")
        .and_then(Value::as_array)
        .expect("actions array");
    assert_eq!(actions, &vec![Value::from("rebooking")]);
}

#[tokio::test]
async fn disrupted_passengers_route_attaches_verdicts() {
    let response = get("/api/v1/flights/EY129/disrupted-passengers").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_on_board"), Some(&Value::from(3)));
    assert_eq!(payload.get("total_disrupted"), Some(&Value::from(3)));

    let passengers = payload
        .get("passengers")
        .and_then(Value::as_array)
        .expect("passengers array");
    let connecting = passengers
        .iter()
        .find(|p| p.get("passenger_id") == Some(&Value::from("P1")))
        .expect("P1 listed");
    let verdict = connecting.get("eligibility").expect("verdict embedded");
    assert_eq!(verdict.get("disrupted"), Some(&Value::Bool(true)));
    assert_eq!(
        verdict.get("eligible_for").and_then(Value::as_array),
        Some(&vec![Value::from("rebooking")])
    );
}

#[tokio::test]
async fn eligibility_route_rejects_passengers_off_the_flight() {
    let response = get("/api/v1/flights/EY129/passengers/P4/eligibility").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn disruption_summary_route_reports_costs() {
    let response = get("/api/v1/disruptions/summary").await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(payload.get("total_disruptions"), Some(&Value::from(1)));
    assert!(payload.get("average_cost_per_passenger").is_some());

    let action_totals = payload
        .get("recovery_action_totals")
        .expect("action totals present");
    assert_eq!(action_totals.get("rebooking"), Some(&Value::from(3)));
}
