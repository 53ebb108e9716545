mod config;
mod connections;
mod cost;
mod severity;

pub use config::ClassifierConfig;
pub use connections::{ConnectionEstimator, ItineraryConnections, SimulatedConnections};
pub use cost::{route_distance_km, DEFAULT_ROUTE_DISTANCE_KM};

use chrono::{DateTime, Utc};

use super::domain::{
    AffectedPassenger, DisruptionEvent, DisruptionStatus, Flight, HighValuePassenger, Passenger,
};

/// Stateless engine turning a flight plus its passenger list into a
/// [`DisruptionEvent`]. Classifying an on-time flight is harmless; callers
/// normally skip those.
pub struct DisruptionClassifier {
    config: ClassifierConfig,
    connections: Box<dyn ConnectionEstimator>,
}

impl DisruptionClassifier {
    pub fn new(config: ClassifierConfig, connections: Box<dyn ConnectionEstimator>) -> Self {
        Self {
            config,
            connections,
        }
    }

    /// Simulator-backed classifier with default thresholds.
    pub fn simulated() -> Self {
        Self::new(ClassifierConfig::default(), Box::new(SimulatedConnections))
    }

    /// Itinerary-backed classifier for feeds that carry onward segments.
    pub fn itinerary_based() -> Self {
        Self::new(ClassifierConfig::default(), Box::new(ItineraryConnections))
    }

    pub fn classify(
        &self,
        flight: &Flight,
        passengers: &[Passenger],
        detected_at: DateTime<Utc>,
    ) -> DisruptionEvent {
        // Passengers already engaged with the flight feel the disruption
        // first; before anyone checks in, everyone booked is in scope.
        let engaged: Vec<&Passenger> = passengers.iter().filter(|p| p.is_engaged()).collect();
        let affected: Vec<&Passenger> = if engaged.is_empty() {
            passengers.iter().collect()
        } else {
            engaged
        };

        let high_value: Vec<&Passenger> = affected
            .iter()
            .copied()
            .filter(|p| p.is_high_value())
            .collect();

        let connecting = self
            .connections
            .connecting_passengers(flight, &affected, &self.config);

        let severity = severity::grade(
            flight.status,
            flight.delay_minutes,
            high_value.len(),
            self.config.high_value_alert_count,
        );

        let requires_rebooking = flight.status == DisruptionStatus::Cancelled;
        let requires_accommodation = requires_rebooking || flight.delay_minutes > 240;

        let estimated_cost_impact = cost::estimate_impact(
            &flight.origin,
            &flight.destination,
            flight.delay_minutes,
            affected.len(),
            requires_rebooking,
            requires_accommodation,
        );

        DisruptionEvent {
            disruption_id: disruption_id(&flight.flight_id.0),
            flight_id: flight.flight_id.clone(),
            flight_number: flight.flight_number.clone(),
            flight_date: flight.flight_date,
            origin: flight.origin.clone(),
            destination: flight.destination.clone(),
            disruption_type: flight.status.into(),
            disruption_status: flight.status,
            disruption_reason: flight
                .disruption_reason
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            severity,
            delay_minutes: flight.delay_minutes,
            scheduled_departure: flight.scheduled_departure,
            estimated_departure: flight.estimated_departure,
            passengers_affected: affected.len(),
            high_value_passengers: high_value.len(),
            connecting_passengers: connecting.len(),
            detected_at,
            requires_rebooking,
            requires_accommodation,
            estimated_cost_impact,
            affected_passenger_list: affected
                .iter()
                .map(|p| AffectedPassenger::from_passenger(p))
                .collect(),
            high_value_passenger_list: high_value
                .iter()
                .map(|p| HighValuePassenger::from_passenger(p))
                .collect(),
            connecting_passenger_list: connecting,
        }
    }
}

fn disruption_id(flight_id: &str) -> String {
    let prefix: String = flight_id.chars().take(8).collect();
    format!("DISR_{prefix}")
}
