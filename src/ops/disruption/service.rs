use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::classifier::DisruptionClassifier;
use super::domain::{
    DisruptionEvent, EligibilityVerdict, Flight, Passenger, PassengerId,
};
use super::eligibility::EligibilityEngine;
use super::scan::{self, ScanReport, ScanSummary};
use super::store::OperationsStore;

/// Service composing the store, classifier, and eligibility engine for the
/// API layer. All reads; the underlying data never changes under it.
pub struct DisruptionService {
    store: OperationsStore,
    classifier: DisruptionClassifier,
    eligibility: EligibilityEngine,
}

impl DisruptionService {
    pub fn new(
        store: OperationsStore,
        classifier: DisruptionClassifier,
        eligibility: EligibilityEngine,
    ) -> Self {
        Self {
            store,
            classifier,
            eligibility,
        }
    }

    pub fn store(&self) -> &OperationsStore {
        &self.store
    }

    pub fn flights_overview(&self) -> Vec<FlightStatusView> {
        self.store
            .flights()
            .iter()
            .map(FlightStatusView::from_flight)
            .collect()
    }

    pub fn flight_detail(&self, key: &str) -> Result<FlightDetail, ServiceError> {
        let flight = self
            .store
            .flight(key)
            .ok_or_else(|| ServiceError::UnknownFlight(key.to_string()))?;

        let manifest = self.store.manifest_for(flight);
        let disruption = flight
            .status
            .is_disrupted()
            .then(|| self.classifier.classify(flight, &manifest, Utc::now()));

        let passengers_sample = manifest.iter().take(10).cloned().collect();

        Ok(FlightDetail {
            flight: flight.clone(),
            disruption,
            passenger_count: manifest.len(),
            passengers_sample,
        })
    }

    pub fn passengers(
        &self,
        key: &str,
        filter: &PassengerFilter,
    ) -> Result<Vec<Passenger>, ServiceError> {
        let flight = self
            .store
            .flight(key)
            .ok_or_else(|| ServiceError::UnknownFlight(key.to_string()))?;

        let mut manifest = self.store.manifest_for(flight);
        if filter.vip {
            manifest.retain(|p| p.loyalty_tier.is_elite());
        }
        if filter.ssr {
            manifest.retain(|p| p.has_ssr());
        }
        if filter.connections {
            manifest.retain(|p| p.connection.is_some());
        }
        Ok(manifest)
    }

    /// Manifest narrowed to the passengers the eligibility engine considers
    /// disrupted, each with their verdict attached. A delayed flight can have
    /// non-disrupted passengers when the delay clears neither the solo
    /// threshold nor the connection airport's minimum connecting time.
    pub fn disrupted_passengers(&self, key: &str) -> Result<DisruptedManifest, ServiceError> {
        let flight = self
            .store
            .flight(key)
            .ok_or_else(|| ServiceError::UnknownFlight(key.to_string()))?;

        let manifest = self.store.manifest_for(flight);
        let passengers: Vec<DisruptedPassenger> = manifest
            .iter()
            .filter(|p| self.eligibility.is_disrupted(p, flight))
            .map(|p| DisruptedPassenger {
                passenger: p.clone(),
                eligibility: self.eligibility.evaluate(p, flight),
            })
            .collect();

        Ok(DisruptedManifest {
            flight_number: flight.flight_number.clone(),
            total_on_board: manifest.len(),
            total_disrupted: passengers.len(),
            passengers,
        })
    }

    /// Eligibility verdict for one passenger on one flight. The passenger
    /// must actually be booked on the flight.
    pub fn eligibility(
        &self,
        flight_key: &str,
        passenger_id: &PassengerId,
    ) -> Result<EligibilityVerdict, ServiceError> {
        let flight = self
            .store
            .flight(flight_key)
            .ok_or_else(|| ServiceError::UnknownFlight(flight_key.to_string()))?;

        let manifest = self.store.manifest_for(flight);
        let passenger = manifest
            .iter()
            .find(|p| &p.passenger_id == passenger_id)
            .ok_or_else(|| ServiceError::UnknownPassenger(passenger_id.0.clone()))?;

        Ok(self.eligibility.evaluate(passenger, flight))
    }

    pub fn scan(&self) -> ScanReport {
        scan::scan(&self.store, &self.classifier, Utc::now())
    }

    /// Scan rollup plus recovery-action totals across every disrupted
    /// passenger, for the operations dashboard.
    pub fn summary(&self) -> DisruptionSummary {
        let mut recovery_action_totals: BTreeMap<String, usize> = BTreeMap::new();
        for flight in self.store.flights() {
            if !flight.status.is_disrupted() {
                continue;
            }
            for passenger in self.store.manifest_for(flight) {
                let verdict = self.eligibility.evaluate(&passenger, flight);
                for action in verdict.eligible_for {
                    *recovery_action_totals
                        .entry(action.label().to_string())
                        .or_default() += 1;
                }
            }
        }

        DisruptionSummary {
            scan: self.scan().summary(),
            recovery_action_totals,
        }
    }
}

/// Query filters for the flight manifest endpoint.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PassengerFilter {
    #[serde(default)]
    pub vip: bool,
    #[serde(default)]
    pub ssr: bool,
    #[serde(default)]
    pub connections: bool,
}

/// Flight list entry with the derived disruption flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightStatusView {
    #[serde(flatten)]
    pub flight: Flight,
    pub is_disrupted: bool,
}

impl FlightStatusView {
    fn from_flight(flight: &Flight) -> Self {
        Self {
            is_disrupted: flight.status.is_disrupted(),
            flight: flight.clone(),
        }
    }
}

/// Detail response for one flight, with its disruption event when disrupted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightDetail {
    pub flight: Flight,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disruption: Option<DisruptionEvent>,
    pub passenger_count: usize,
    pub passengers_sample: Vec<Passenger>,
}

/// One disrupted passenger with the recovery decision already made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptedPassenger {
    #[serde(flatten)]
    pub passenger: Passenger,
    pub eligibility: EligibilityVerdict,
}

/// A flight's manifest filtered down to its disrupted passengers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptedManifest {
    pub flight_number: String,
    pub total_on_board: usize,
    pub total_disrupted: usize,
    pub passengers: Vec<DisruptedPassenger>,
}

/// Manager rollup combining the scan summary with recovery-action counts,
/// keyed by action name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisruptionSummary {
    #[serde(flatten)]
    pub scan: ScanSummary,
    pub recovery_action_totals: BTreeMap<String, usize>,
}

/// Error raised by lookups on behalf of the API layer. The engines themselves
/// are total; only resolving keys can fail.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("no flight matches '{0}'")]
    UnknownFlight(String),
    #[error("no passenger '{0}' on this flight")]
    UnknownPassenger(String),
}
