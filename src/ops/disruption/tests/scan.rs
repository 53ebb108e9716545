use super::common::*;
use crate::ops::disruption::{
    scan, DisruptionClassifier, DisruptionStatus, OperationsStore,
};

#[test]
fn on_time_flights_never_produce_events() {
    let store = sample_store();
    let classifier = DisruptionClassifier::simulated();

    let report = scan(&store, &classifier, detected_at());

    assert_eq!(report.total_flights_scanned, 2);
    assert_eq!(report.total_disruptions_detected, 1);
    assert_eq!(report.disruptions[0].flight_number, "EY129");
}

#[test]
fn dual_keyed_passengers_reach_the_manifest() {
    let store = sample_store();
    let delayed = store.flight("EY129").expect("flight by number");
    let manifest = store.manifest_for(delayed);

    // P3 references the flight by number only, and still joins.
    assert_eq!(manifest.len(), 3);
    assert!(manifest.iter().any(|p| p.passenger_id.0 == "P3"));

    let by_id = store.flight("FL-EY129").expect("flight by id");
    assert_eq!(by_id.flight_number, "EY129");
}

#[test]
fn orphaned_passengers_are_kept_but_not_attached() {
    let delayed = flight("EY300", DisruptionStatus::Delayed, 90);
    let mut orphan = passenger_on("P9", &delayed);
    orphan.flight_id = None;
    orphan.flight_number = Some("EY999".to_string());

    let store = OperationsStore::new(vec![delayed], vec![orphan]);

    let flight = store.flight("EY300").expect("flight present");
    assert!(store.manifest_for(flight).is_empty());
    assert_eq!(store.passengers().len(), 1);
}

#[test]
fn summary_aggregates_counts_and_costs() {
    let cancelled = flight("EY245", DisruptionStatus::Cancelled, 0);
    let delayed = flight("EY567", DisruptionStatus::Delayed, 200);
    let passengers = vec![
        passenger_on("P1", &cancelled),
        passenger_on("P2", &cancelled),
        passenger_on("P3", &delayed),
    ];
    let store = OperationsStore::new(vec![cancelled, delayed], passengers);
    let classifier = DisruptionClassifier::itinerary_based();

    let report = scan(&store, &classifier, detected_at());
    let summary = report.summary();

    assert_eq!(summary.total_disruptions, 2);
    assert_eq!(summary.total_passengers_affected, 3);
    assert_eq!(summary.flights_requiring_rebooking, 1);
    assert_eq!(summary.flights_requiring_accommodation, 1);
    assert_eq!(summary.severity_breakdown.get("Critical"), Some(&1));
    assert_eq!(summary.severity_breakdown.get("High"), Some(&1));

    // AUH-LHR cancellation: 2 * 600 + 2 * 0.6 * 150 + 2 * 50 + 2 * 100.
    // 200-minute delay: 1 * 200.
    assert_eq!(summary.total_estimated_cost, 1680.0 + 200.0);
    let expected_average = summary.total_estimated_cost / 3.0;
    assert!((summary.average_cost_per_passenger - expected_average).abs() < f64::EPSILON);
}

#[test]
fn empty_scan_has_zero_average_cost() {
    let on_time = flight("EY1", DisruptionStatus::OnTime, 0);
    let store = OperationsStore::new(vec![on_time], Vec::new());
    let classifier = DisruptionClassifier::simulated();

    let summary = scan(&store, &classifier, detected_at()).summary();

    assert_eq!(summary.total_disruptions, 0);
    assert_eq!(summary.average_cost_per_passenger, 0.0);
}

#[test]
fn repeated_scans_agree() {
    let store = sample_store();
    let classifier = DisruptionClassifier::simulated();

    let first = scan(&store, &classifier, detected_at());
    let second = scan(&store, &classifier, detected_at());

    assert_eq!(first, second);
}
