use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};

use crate::ops::disruption::{
    CheckInStatus, ConnectingSegment, DisruptionClassifier, DisruptionService, DisruptionStatus,
    EligibilityEngine, Flight, FlightId, LoyaltyTier, OperationsStore, Passenger, PassengerId,
};

pub(super) fn detected_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 20, 6, 0, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn flight(number: &str, status: DisruptionStatus, delay_minutes: u32) -> Flight {
    let departure = Utc
        .with_ymd_and_hms(2026, 8, 20, 9, 30, 0)
        .single()
        .expect("valid departure");
    let cancelled = status == DisruptionStatus::Cancelled;
    let delay = Duration::minutes(i64::from(delay_minutes));

    Flight {
        flight_id: FlightId(format!("FL-{number}")),
        flight_number: number.to_string(),
        flight_date: NaiveDate::from_ymd_opt(2026, 8, 20).expect("valid date"),
        origin: "AUH".to_string(),
        destination: "LHR".to_string(),
        scheduled_departure: departure,
        scheduled_arrival: departure + Duration::hours(7),
        estimated_departure: (!cancelled).then(|| departure + delay),
        estimated_arrival: (!cancelled).then(|| departure + Duration::hours(7) + delay),
        status,
        disruption_reason: status
            .is_disrupted()
            .then(|| "Crew rotation".to_string()),
        delay_minutes,
        aircraft_type: Some("B787-9".to_string()),
        gate: Some("B12".to_string()),
        terminal: Some("3".to_string()),
    }
}

pub(super) fn passenger_on(id: &str, flight: &Flight) -> Passenger {
    Passenger {
        passenger_id: PassengerId(id.to_string()),
        pnr: format!("PNR{id}"),
        flight_id: Some(flight.flight_id.clone()),
        flight_number: None,
        full_name: format!("Passenger {id}"),
        email: Some(format!("{id}@example.com")),
        phone: None,
        fare_class: "Y".to_string(),
        fare_class_name: "Economy".to_string(),
        seat_number: Some("24C".to_string()),
        loyalty_tier: LoyaltyTier::Guest,
        frequent_flyer_number: None,
        check_in_status: CheckInStatus::CheckedIn,
        boarding_pass_issued: false,
        special_service_request: None,
        checked_bags: 1,
        ticket_price_usd: 480.0,
        connection: None,
    }
}

pub(super) fn elite(mut passenger: Passenger) -> Passenger {
    passenger.loyalty_tier = LoyaltyTier::Platinum;
    passenger.fare_class = "J".to_string();
    passenger.fare_class_name = "Business".to_string();
    passenger.frequent_flyer_number = Some("EY123456".to_string());
    passenger
}

pub(super) fn with_connection(mut passenger: Passenger, airport: &str) -> Passenger {
    passenger.connection = Some(ConnectingSegment {
        arrival_iata: airport.to_string(),
        departure_iata: Some("LHR".to_string()),
        departure_time: None,
        arrival_time: None,
        marketing_flight_number: Some("412".to_string()),
    });
    passenger
}

pub(super) fn not_checked_in(mut passenger: Passenger) -> Passenger {
    passenger.check_in_status = CheckInStatus::NotCheckedIn;
    passenger.boarding_pass_issued = false;
    passenger
}

/// Store with one delayed flight (EY129, 90 minutes), one on-time flight,
/// and a passenger joined by flight number rather than id.
pub(super) fn sample_store() -> OperationsStore {
    let delayed = flight("EY129", DisruptionStatus::Delayed, 90);
    let on_time = flight("EY777", DisruptionStatus::OnTime, 0);

    let guest = with_connection(passenger_on("P1", &delayed), "AUH");
    let platinum = elite(passenger_on("P2", &delayed));
    let mut by_number = passenger_on("P3", &delayed);
    by_number.flight_id = None;
    by_number.flight_number = Some("EY129".to_string());
    let untouched = passenger_on("P4", &on_time);

    OperationsStore::new(
        vec![delayed, on_time],
        vec![guest, platinum, by_number, untouched],
    )
}

pub(super) fn sample_service() -> Arc<DisruptionService> {
    Arc::new(DisruptionService::new(
        sample_store(),
        DisruptionClassifier::itinerary_based(),
        EligibilityEngine::default(),
    ))
}
