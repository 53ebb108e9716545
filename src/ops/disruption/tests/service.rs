use super::common::*;
use crate::ops::disruption::{
    DisruptionClassifier, DisruptionService, DisruptionStatus, EligibilityEngine, OperationsStore,
    ServiceError,
};

#[test]
fn disrupted_passengers_skips_those_within_the_connection_buffer() {
    // Delay 70: solo passengers are disrupted (> 60), but the AUH connection
    // sits inside its 75-minute minimum connecting time.
    let delayed = flight("EY410", DisruptionStatus::Delayed, 70);
    let shielded = with_connection(passenger_on("P1", &delayed), "AUH");
    let exposed = passenger_on("P2", &delayed);

    let service = DisruptionService::new(
        OperationsStore::new(vec![delayed], vec![shielded, exposed]),
        DisruptionClassifier::itinerary_based(),
        EligibilityEngine::default(),
    );

    let manifest = service
        .disrupted_passengers("EY410")
        .expect("flight resolves");

    assert_eq!(manifest.flight_number, "EY410");
    assert_eq!(manifest.total_on_board, 2);
    assert_eq!(manifest.total_disrupted, 1);
    assert_eq!(manifest.passengers[0].passenger.passenger_id.0, "P2");
    assert!(manifest.passengers[0].eligibility.disrupted);
}

#[test]
fn disrupted_passengers_requires_a_known_flight() {
    let service = sample_service();
    let error = service
        .disrupted_passengers("EY000")
        .expect_err("unknown flight rejected");
    assert!(matches!(error, ServiceError::UnknownFlight(_)));
}

#[test]
fn summary_totals_recovery_actions_across_disrupted_flights() {
    // EY129 delayed 90: all three manifest passengers are disrupted and the
    // delay clears only the rebooking threshold. EY777 is on time and
    // contributes nothing.
    let service = sample_service();
    let summary = service.summary();

    assert_eq!(summary.recovery_action_totals.get("rebooking"), Some(&3));
    assert_eq!(summary.recovery_action_totals.get("meal"), None);
    assert_eq!(summary.recovery_action_totals.get("hotel"), None);
    assert_eq!(summary.scan.total_disruptions, 1);
}
