mod config;
mod mct;
mod rules;

pub use config::EligibilityConfig;
pub use mct::{minimum_connecting_time, DEFAULT_MCT_MINUTES};

use super::domain::{EligibilityVerdict, Flight, Passenger, Priority};

/// Stateless engine deciding, per passenger, whether a flight's disruption
/// reaches them and which recovery actions they qualify for. Both entry
/// points are total: missing data falls back to safe defaults rather than
/// failing.
pub struct EligibilityEngine {
    config: EligibilityConfig,
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new(EligibilityConfig::default())
    }
}

impl EligibilityEngine {
    pub fn new(config: EligibilityConfig) -> Self {
        Self { config }
    }

    /// A connecting passenger is disrupted once the delay eats their minimum
    /// connecting time; anyone else needs the delay to clear the solo
    /// threshold.
    pub fn is_disrupted(&self, passenger: &Passenger, flight: &Flight) -> bool {
        match passenger.connection_airport() {
            Some(airport) => flight.delay_minutes >= minimum_connecting_time(airport),
            None => flight.delay_minutes > self.config.solo_disruption_delay,
        }
    }

    pub fn evaluate(&self, passenger: &Passenger, flight: &Flight) -> EligibilityVerdict {
        if !self.is_disrupted(passenger, flight) {
            return EligibilityVerdict {
                passenger_id: passenger.passenger_id.clone(),
                disrupted: false,
                priority: Priority::Low,
                eligible_for: Vec::new(),
                reason: String::new(),
            };
        }

        let delay = flight.delay_minutes;
        let priority = rules::priority(passenger, delay, &self.config);
        let eligible_for = rules::eligible_actions(delay, &self.config);
        let reason = format!(
            "Disrupted passenger: {delay}min delay, Connection at {}",
            passenger.connection_airport().unwrap_or("N/A")
        );

        EligibilityVerdict {
            passenger_id: passenger.passenger_id.clone(),
            disrupted: true,
            priority,
            eligible_for,
            reason,
        }
    }
}
