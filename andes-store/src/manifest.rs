use std::collections::HashMap;
use std::path::Path;

use andes_shared::{AirplaneId, Flight, FlightId, FlightManifest, Passenger, Seat};
use async_trait::async_trait;
use serde::Deserialize;

/// Where passenger and seat records for a flight come from.
#[async_trait]
pub trait ManifestSource: Send + Sync {
    async fn fetch_manifest(&self, flight_id: FlightId) -> Result<FlightManifest, ManifestError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ManifestError {
    #[error("Flight not found: {0}")]
    FlightNotFound(FlightId),

    #[error("Failed to read manifest snapshot: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed manifest snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FlightRecord {
    #[serde(flatten)]
    flight: Flight,
    #[serde(default)]
    passengers: Vec<Passenger>,
}

/// On-disk layout: flights with their passengers, plus every airplane's seats.
#[derive(Debug, Deserialize)]
struct Snapshot {
    flights: Vec<FlightRecord>,
    #[serde(default)]
    seats: Vec<Seat>,
}

/// Manifest source backed by a JSON snapshot held in memory.
pub struct JsonManifestSource {
    flights: HashMap<FlightId, FlightRecord>,
    seats_by_airplane: HashMap<AirplaneId, Vec<Seat>>,
}

impl JsonManifestSource {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        let path = path.as_ref();
        tracing::info!("Loading manifest snapshot from {}", path.display());
        let raw = tokio::fs::read_to_string(path).await?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ManifestError> {
        let snapshot: Snapshot = serde_json::from_str(raw)?;

        let mut seats_by_airplane: HashMap<AirplaneId, Vec<Seat>> = HashMap::new();
        for seat in snapshot.seats {
            seats_by_airplane.entry(seat.airplane_id).or_default().push(seat);
        }

        let flights = snapshot
            .flights
            .into_iter()
            .map(|record| (record.flight.flight_id, record))
            .collect::<HashMap<_, _>>();
        tracing::debug!(
            flights = flights.len(),
            airplanes = seats_by_airplane.len(),
            "Manifest snapshot indexed"
        );

        Ok(Self { flights, seats_by_airplane })
    }
}

#[async_trait]
impl ManifestSource for JsonManifestSource {
    async fn fetch_manifest(&self, flight_id: FlightId) -> Result<FlightManifest, ManifestError> {
        let record = self
            .flights
            .get(&flight_id)
            .ok_or(ManifestError::FlightNotFound(flight_id))?;

        let seats = self
            .seats_by_airplane
            .get(&record.flight.airplane_id)
            .cloned()
            .unwrap_or_default();

        Ok(FlightManifest {
            flight: record.flight.clone(),
            passengers: record.passengers.clone(),
            seats,
        })
    }
}
