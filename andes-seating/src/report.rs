use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use andes_shared::{FlightId, FlightPassengers, Passenger, PassengerId};

/// Counters one allocator pass hands back to the engine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Placements {
    pub assigned: usize,
    pub block_placements: usize,
    pub unseated: Vec<PassengerId>,
}

/// Summary of one allocation run.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationReport {
    pub run_id: Uuid,
    pub computed_at: DateTime<Utc>,
    pub flight_id: Option<FlightId>,
    pub groups: usize,
    pub pre_seated: usize,
    pub assigned: usize,
    /// Of `assigned`, how many landed inside a contiguous block.
    pub block_placements: usize,
    /// Passengers left without a seat because their fare class ran out.
    pub unseated: Vec<PassengerId>,
}

impl AllocationReport {
    pub(crate) fn new(run_id: Uuid, flight_id: Option<FlightId>) -> Self {
        Self {
            run_id,
            computed_at: Utc::now(),
            flight_id,
            groups: 0,
            pre_seated: 0,
            assigned: 0,
            block_placements: 0,
            unseated: Vec::new(),
        }
    }

    pub(crate) fn record(&mut self, placements: Placements) {
        self.assigned += placements.assigned;
        self.block_placements += placements.block_placements;
        self.unseated.extend(placements.unseated);
    }
}

/// Passengers with their seats, plus the report for the run that placed them.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub passengers: Vec<Passenger>,
    pub report: AllocationReport,
}

/// A seated flight: the flight record with its passengers, plus the report.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightAllocation {
    pub flight: FlightPassengers,
    pub report: AllocationReport,
}
