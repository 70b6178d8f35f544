use std::collections::HashMap;

use andes_shared::{FareClassId, Seat, SeatId};

use crate::occupancy::OccupancySet;

/// Read-only index over one airplane's seats.
///
/// Seats of each fare class are kept in row-major order (row ascending, then
/// column by code point), which is the order every allocator scans in.
#[derive(Debug, Default)]
pub struct SeatCatalog {
    by_class: HashMap<FareClassId, Vec<Seat>>,
    by_id: HashMap<SeatId, (FareClassId, usize)>,
}

impl SeatCatalog {
    /// Build the catalog, rejecting seat lists that repeat an id.
    pub fn new(seats: Vec<Seat>) -> Result<Self, CatalogError> {
        let mut by_class: HashMap<FareClassId, Vec<Seat>> = HashMap::new();
        let mut seen = std::collections::HashSet::with_capacity(seats.len());

        for seat in seats {
            if !seen.insert(seat.seat_id) {
                return Err(CatalogError::DuplicateSeat { seat_id: seat.seat_id });
            }
            by_class.entry(seat.seat_type_id).or_default().push(seat);
        }

        let mut by_id = HashMap::with_capacity(seen.len());
        for (class, seats) in by_class.iter_mut() {
            seats.sort_by_key(Seat::position);
            for (index, seat) in seats.iter().enumerate() {
                by_id.insert(seat.seat_id, (*class, index));
            }
        }

        Ok(Self { by_class, by_id })
    }

    pub fn get(&self, seat_id: SeatId) -> Option<&Seat> {
        let (class, index) = self.by_id.get(&seat_id)?;
        self.by_class.get(class).and_then(|seats| seats.get(*index))
    }

    /// All seats of a fare class in scan order. Unknown classes are empty.
    pub fn seats_of_class(&self, class: FareClassId) -> &[Seat] {
        self.by_class.get(&class).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Seats of a fare class nobody has claimed yet, in scan order.
    pub fn free_seats(&self, class: FareClassId, occupancy: &OccupancySet) -> Vec<&Seat> {
        self.seats_of_class(class)
            .iter()
            .filter(|seat| occupancy.is_free(seat.seat_id))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Duplicate seat id in catalog: {seat_id}")]
    DuplicateSeat { seat_id: SeatId },
}
