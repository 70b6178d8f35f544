use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::passenger::Passenger;
use crate::{AirplaneId, FlightId};

/// A scheduled flight. Times travel as epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_id: FlightId,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub takeoff_date_time: DateTime<Utc>,
    pub takeoff_airport: String,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub landing_date_time: DateTime<Utc>,
    pub landing_airport: String,
    pub airplane_id: AirplaneId,
}

/// A flight with its passengers, flattened into one record the way the
/// boarding service hands it out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightPassengers {
    #[serde(flatten)]
    pub flight: Flight,
    pub passengers: Vec<Passenger>,
}
