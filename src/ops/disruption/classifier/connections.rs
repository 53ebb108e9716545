//! Connection exposure estimation.
//!
//! Real itineraries only carry onward-segment data for a subset of feeds, so
//! the classifier works through an estimator seam: the seeded simulator stands
//! in when no itinerary data exists, and the itinerary estimator reads the
//! passenger's recorded next segment. Deployments with real connection data
//! should prefer [`ItineraryConnections`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::ClassifierConfig;
use super::cost;
use crate::ops::disruption::domain::{
    ConnectingPassenger, ConnectionRisk, Flight, Passenger,
};
use crate::ops::disruption::eligibility::minimum_connecting_time;

/// Seam between the classifier and whatever connection data is available.
pub trait ConnectionEstimator: Send + Sync {
    fn connecting_passengers(
        &self,
        flight: &Flight,
        affected: &[&Passenger],
        config: &ClassifierConfig,
    ) -> Vec<ConnectingPassenger>;
}

/// Deterministic stand-in used for demos and tests: samples a share of the
/// affected passengers with an RNG seeded from the flight id, so repeated
/// scans of the same flight agree.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulatedConnections;

/// FNV-1a, so the seed depends only on the flight id bytes.
fn seed_for(flight_id: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in flight_id.as_bytes() {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

impl ConnectionEstimator for SimulatedConnections {
    fn connecting_passengers(
        &self,
        flight: &Flight,
        affected: &[&Passenger],
        config: &ClassifierConfig,
    ) -> Vec<ConnectingPassenger> {
        let distance = cost::route_distance_km(&flight.origin, &flight.destination);
        let ratio = if distance > config.long_haul_distance_km {
            config.long_haul_connecting_ratio
        } else {
            config.short_haul_connecting_ratio
        };

        let risk = if flight.delay_minutes > config.high_risk_delay_minutes {
            ConnectionRisk::High
        } else {
            ConnectionRisk::Medium
        };

        let mut rng = SmallRng::seed_from_u64(seed_for(&flight.flight_id.0));
        affected
            .iter()
            .filter(|_| rng.gen::<f64>() < ratio)
            .map(|passenger| summarize(passenger, risk))
            .collect()
    }
}

/// Uses the onward segment recorded on each passenger: a passenger is
/// connecting iff their booking carries a next-segment arrival airport, and
/// the connection is high risk once the delay reaches that airport's minimum
/// connecting time.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItineraryConnections;

impl ConnectionEstimator for ItineraryConnections {
    fn connecting_passengers(
        &self,
        flight: &Flight,
        affected: &[&Passenger],
        _config: &ClassifierConfig,
    ) -> Vec<ConnectingPassenger> {
        affected
            .iter()
            .filter_map(|passenger| {
                let airport = passenger.connection_airport()?;
                let risk = if flight.delay_minutes >= minimum_connecting_time(airport) {
                    ConnectionRisk::High
                } else {
                    ConnectionRisk::Medium
                };
                Some(summarize(passenger, risk))
            })
            .collect()
    }
}

fn summarize(passenger: &Passenger, risk: ConnectionRisk) -> ConnectingPassenger {
    ConnectingPassenger {
        passenger_id: passenger.passenger_id.clone(),
        pnr: passenger.pnr.clone(),
        full_name: passenger.full_name.clone(),
        fare_class: passenger.fare_class.clone(),
        loyalty_tier: passenger.loyalty_tier,
        connection_risk: risk,
        needs_rebooking: risk == ConnectionRisk::High,
    }
}
