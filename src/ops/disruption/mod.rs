//! Flight disruption detection and passenger recovery eligibility.
//!
//! Two engines make up the core: the [`classifier::DisruptionClassifier`]
//! grades a disrupted flight and estimates its cost impact, and the
//! [`eligibility::EligibilityEngine`] decides per passenger which recovery
//! actions apply. Both are pure functions over immutable inputs; the
//! surrounding store, service, and router modules are plumbing.

pub mod classifier;
pub mod domain;
pub mod eligibility;
pub mod router;
pub mod scan;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use classifier::{
    ClassifierConfig, ConnectionEstimator, DisruptionClassifier, ItineraryConnections,
    SimulatedConnections,
};
pub use domain::{
    AffectedPassenger, Cabin, CheckInStatus, ConnectingPassenger, ConnectingSegment,
    ConnectionRisk, DisruptionEvent, DisruptionStatus, DisruptionType, EligibilityVerdict,
    EligibleAction, Flight, FlightId, HighValuePassenger, LoyaltyTier, Passenger, PassengerId,
    Priority, Severity,
};
pub use eligibility::{minimum_connecting_time, EligibilityConfig, EligibilityEngine};
pub use router::disruption_router;
pub use scan::{scan, ScanReport, ScanSummary};
pub use service::{
    DisruptedManifest, DisruptedPassenger, DisruptionService, DisruptionSummary, FlightDetail,
    FlightStatusView, PassengerFilter, ServiceError,
};
pub use store::{OperationsStore, StoreError};
