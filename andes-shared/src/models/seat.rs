use serde::{Deserialize, Serialize};

use crate::{AirplaneId, FareClassId, SeatId};

/// A physical seat on an airplane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seat {
    pub seat_id: SeatId,
    pub seat_row: i32,
    pub seat_column: char,
    pub seat_type_id: FareClassId,
    pub airplane_id: AirplaneId,
}

impl Seat {
    pub fn new(
        seat_id: SeatId,
        seat_row: i32,
        seat_column: char,
        seat_type_id: FareClassId,
        airplane_id: AirplaneId,
    ) -> Self {
        Self {
            seat_id,
            seat_row,
            seat_column,
            seat_type_id,
            airplane_id,
        }
    }

    /// Row-major position key: row first, then column by code point.
    pub fn position(&self) -> (i32, u32) {
        (self.seat_row, self.seat_column as u32)
    }

    /// Manhattan distance between two seats, columns measured by code point.
    /// Saturates at `u32::MAX`.
    pub fn distance_to(&self, other: &Seat) -> u32 {
        let rows = self.seat_row.abs_diff(other.seat_row);
        let columns = (self.seat_column as u32).abs_diff(other.seat_column as u32);
        rows.saturating_add(columns)
    }

    /// Human-facing label such as `12C`.
    pub fn label(&self) -> String {
        format!("{}{}", self.seat_row, self.seat_column)
    }
}
