use std::collections::HashSet;

use andes_shared::{Passenger, Seat, SeatId};

/// Seats claimed so far during one allocation run.
///
/// Only ever grows; a seat id can be claimed once.
#[derive(Debug, Clone, Default)]
pub struct OccupancySet {
    claimed: HashSet<SeatId>,
}

impl OccupancySet {
    /// Seed with the seats passengers already hold.
    pub fn seeded<'a>(passengers: impl IntoIterator<Item = &'a Passenger>) -> Self {
        let mut occupancy = Self::default();
        for seat_id in passengers.into_iter().filter_map(|p| p.seat_id) {
            if !occupancy.claim(seat_id) {
                tracing::warn!(seat_id, "Seat already held by another passenger on the manifest");
            }
        }
        occupancy
    }

    pub fn is_free(&self, seat_id: SeatId) -> bool {
        !self.claimed.contains(&seat_id)
    }

    /// Returns `false` when the seat was already taken.
    pub fn claim(&mut self, seat_id: SeatId) -> bool {
        self.claimed.insert(seat_id)
    }

    /// Give `seat` to `passenger` and mark it taken.
    pub fn assign(&mut self, passenger: &mut Passenger, seat: &Seat) {
        debug_assert!(self.is_free(seat.seat_id), "seat {} claimed twice", seat.seat_id);
        self.claim(seat.seat_id);
        passenger.seat_id = Some(seat.seat_id);
        tracing::debug!(
            passenger_id = passenger.passenger_id,
            seat = %seat.label(),
            "Seat assigned"
        );
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}
