use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::classifier::DisruptionClassifier;
use super::domain::DisruptionEvent;
use super::store::OperationsStore;

/// Result of one detection pass over the flight feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub detection_timestamp: DateTime<Utc>,
    pub total_flights_scanned: usize,
    pub total_disruptions_detected: usize,
    pub total_passengers_affected: usize,
    pub total_estimated_cost: f64,
    pub disruptions: Vec<DisruptionEvent>,
}

impl ScanReport {
    pub fn summary(&self) -> ScanSummary {
        let mut severity_breakdown: BTreeMap<String, usize> = BTreeMap::new();
        for event in &self.disruptions {
            *severity_breakdown
                .entry(event.severity.label().to_string())
                .or_default() += 1;
        }

        let total_passengers_affected = self.total_passengers_affected;
        let average_cost_per_passenger = if total_passengers_affected > 0 {
            self.total_estimated_cost / total_passengers_affected as f64
        } else {
            0.0
        };

        ScanSummary {
            total_disruptions: self.disruptions.len(),
            total_passengers_affected,
            total_high_value_passengers: self
                .disruptions
                .iter()
                .map(|event| event.high_value_passengers)
                .sum(),
            total_connecting_passengers: self
                .disruptions
                .iter()
                .map(|event| event.connecting_passengers)
                .sum(),
            severity_breakdown,
            flights_requiring_rebooking: self
                .disruptions
                .iter()
                .filter(|event| event.requires_rebooking)
                .count(),
            flights_requiring_accommodation: self
                .disruptions
                .iter()
                .filter(|event| event.requires_accommodation)
                .count(),
            total_estimated_cost: self.total_estimated_cost,
            average_cost_per_passenger,
        }
    }

    /// Writes the full report to a JSON file for downstream consumers.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        let file = File::create(path.as_ref())?;
        serde_json::to_writer_pretty(BufWriter::new(file), self)
            .map_err(std::io::Error::from)?;
        info!(path = %path.as_ref().display(), "scan report exported");
        Ok(())
    }
}

/// Aggregate statistics for operations managers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanSummary {
    pub total_disruptions: usize,
    pub total_passengers_affected: usize,
    pub total_high_value_passengers: usize,
    pub total_connecting_passengers: usize,
    pub severity_breakdown: BTreeMap<String, usize>,
    pub flights_requiring_rebooking: usize,
    pub flights_requiring_accommodation: usize,
    pub total_estimated_cost: f64,
    pub average_cost_per_passenger: f64,
}

/// Scans every flight in the store, classifying those whose status marks them
/// disrupted. On-time flights never produce an event. Each pass recomputes
/// from scratch; nothing carries over between scans.
pub fn scan(
    store: &OperationsStore,
    classifier: &DisruptionClassifier,
    detected_at: DateTime<Utc>,
) -> ScanReport {
    let mut disruptions = Vec::new();

    for flight in store.flights() {
        if !flight.status.is_disrupted() {
            continue;
        }
        let manifest = store.manifest_for(flight);
        disruptions.push(classifier.classify(flight, &manifest, detected_at));
    }

    let total_passengers_affected = disruptions
        .iter()
        .map(|event| event.passengers_affected)
        .sum();
    let total_estimated_cost = disruptions
        .iter()
        .map(|event| event.estimated_cost_impact)
        .sum();

    info!(
        flights = store.flights().len(),
        disruptions = disruptions.len(),
        "disruption scan complete"
    );

    ScanReport {
        detection_timestamp: detected_at,
        total_flights_scanned: store.flights().len(),
        total_disruptions_detected: disruptions.len(),
        total_passengers_affected,
        total_estimated_cost,
        disruptions,
    }
}
