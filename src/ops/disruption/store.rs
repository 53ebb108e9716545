use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::{info, warn};

use super::domain::{Flight, FlightId, Passenger, PassengerId};

/// In-memory view of the flight and passenger feeds.
///
/// Historical exports key passengers inconsistently, some by flight id and
/// some by flight number, so the join is normalized once here: flights are
/// indexed under both keys and every passenger is attached to a canonical
/// flight slot at build time. Callers never repeat the dual-key fallback.
pub struct OperationsStore {
    flights: Vec<Flight>,
    flight_index: HashMap<String, usize>,
    passengers: Vec<Passenger>,
    passenger_index: HashMap<PassengerId, usize>,
    manifest: HashMap<FlightId, Vec<usize>>,
}

impl OperationsStore {
    pub fn new(flights: Vec<Flight>, passengers: Vec<Passenger>) -> Self {
        let mut flight_index = HashMap::new();
        for (slot, flight) in flights.iter().enumerate() {
            flight_index.insert(flight.flight_id.0.clone(), slot);
            flight_index.insert(flight.flight_number.clone(), slot);
        }

        let mut passenger_index = HashMap::new();
        let mut manifest: HashMap<FlightId, Vec<usize>> = HashMap::new();
        let mut orphaned = 0usize;

        for (slot, passenger) in passengers.iter().enumerate() {
            passenger_index.insert(passenger.passenger_id.clone(), slot);

            let flight_slot = passenger
                .flight_id
                .as_ref()
                .and_then(|id| flight_index.get(id.0.as_str()))
                .or_else(|| {
                    passenger
                        .flight_number
                        .as_ref()
                        .and_then(|number| flight_index.get(number.as_str()))
                });

            match flight_slot {
                Some(&flight_slot) => {
                    manifest
                        .entry(flights[flight_slot].flight_id.clone())
                        .or_default()
                        .push(slot);
                }
                None => {
                    orphaned += 1;
                    warn!(
                        passenger_id = %passenger.passenger_id.0,
                        pnr = %passenger.pnr,
                        "passenger references no known flight; excluded from rollups"
                    );
                }
            }
        }

        info!(
            flights = flights.len(),
            passengers = passengers.len(),
            orphaned,
            "operations store loaded"
        );

        Self {
            flights,
            flight_index,
            passengers,
            passenger_index,
            manifest,
        }
    }

    /// Builds a store from flight and passenger JSON exports.
    pub fn from_json_files(
        flights_path: impl AsRef<Path>,
        passengers_path: impl AsRef<Path>,
    ) -> Result<Self, StoreError> {
        let flights = read_records(flights_path.as_ref())?;
        let passengers = read_records(passengers_path.as_ref())?;
        Ok(Self::new(flights, passengers))
    }

    pub fn flights(&self) -> &[Flight] {
        &self.flights
    }

    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    /// Flight lookup accepting either a flight id or a flight number.
    pub fn flight(&self, key: &str) -> Option<&Flight> {
        self.flight_index.get(key).map(|&slot| &self.flights[slot])
    }

    pub fn passenger(&self, id: &PassengerId) -> Option<&Passenger> {
        self.passenger_index
            .get(id)
            .map(|&slot| &self.passengers[slot])
    }

    /// Everyone booked on the flight, regardless of which key their record
    /// used to reference it.
    pub fn manifest_for(&self, flight: &Flight) -> Vec<Passenger> {
        self.manifest
            .get(&flight.flight_id)
            .map(|slots| {
                slots
                    .iter()
                    .map(|&slot| self.passengers[slot].clone())
                    .collect()
            })
            .unwrap_or_default()
    }
}

fn read_records<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let file = File::open(path).map_err(|source| StoreError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| StoreError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

/// Error enumeration for feed ingestion failures.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed records in {path}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
