use serde::{Deserialize, Serialize};

use crate::models::{flight::Flight, passenger::Passenger, seat::Seat};

/// Everything the allocator needs for one flight: the flight itself, who is
/// flying and which seats the assigned airplane has.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightManifest {
    #[serde(flatten)]
    pub flight: Flight,
    #[serde(default)]
    pub passengers: Vec<Passenger>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}
