use andes_shared::{FareClassId, Seat};

use crate::catalog::SeatCatalog;
use crate::grouping::ManifestEntry;
use crate::occupancy::OccupancySet;
use crate::policy::AdultStrategy;
use crate::report::Placements;

/// Seats the adults of one purchase, trying to keep them side by side.
pub struct AdultAllocator<'a> {
    catalog: &'a SeatCatalog,
    strategy: AdultStrategy,
}

impl<'a> AdultAllocator<'a> {
    pub fn new(catalog: &'a SeatCatalog, strategy: AdultStrategy) -> Self {
        Self { catalog, strategy }
    }

    /// Seat every member without a seat. Members that already hold one are
    /// left alone.
    ///
    /// Unseated members are handled per requested fare class. With the block
    /// strategy, two or more members of a class first look for a contiguous
    /// run in one row; otherwise each takes the first free seat in scan order.
    pub fn allocate(
        &self,
        members: &mut [ManifestEntry],
        occupancy: &mut OccupancySet,
    ) -> Placements {
        let mut placements = Placements::default();

        for (class, waiting) in waiting_by_class(members) {
            if self.strategy == AdultStrategy::Block && waiting.len() > 1 {
                if let Some(block) = self.find_block(class, waiting.len(), occupancy) {
                    tracing::debug!(
                        fare_class = class,
                        size = block.len(),
                        first = %block[0].label(),
                        "Contiguous block found"
                    );
                    for (&index, seat) in waiting.iter().zip(block) {
                        occupancy.assign(&mut members[index].passenger, seat);
                        placements.assigned += 1;
                        placements.block_placements += 1;
                    }
                    continue;
                }
            }

            for index in waiting {
                let passenger = &mut members[index].passenger;
                match self.first_free(class, occupancy) {
                    Some(seat) => {
                        occupancy.assign(passenger, seat);
                        placements.assigned += 1;
                    }
                    None => {
                        tracing::warn!(
                            passenger_id = passenger.passenger_id,
                            fare_class = class,
                            "No free seat left in fare class"
                        );
                        placements.unseated.push(passenger.passenger_id);
                    }
                }
            }
        }

        placements
    }

    fn first_free(&self, class: FareClassId, occupancy: &OccupancySet) -> Option<&'a Seat> {
        self.catalog
            .seats_of_class(class)
            .iter()
            .find(|seat| occupancy.is_free(seat.seat_id))
    }

    /// First run of `size` free seats in a single row whose columns step by
    /// exactly one code point. Rows are scanned front to back, offsets left
    /// to right.
    fn find_block(
        &self,
        class: FareClassId,
        size: usize,
        occupancy: &OccupancySet,
    ) -> Option<Vec<&'a Seat>> {
        if size == 0 {
            return None;
        }

        let free = self.catalog.free_seats(class, occupancy);
        let mut start = 0;
        while start < free.len() {
            let row = free[start].seat_row;
            let end = free[start..]
                .iter()
                .position(|seat| seat.seat_row != row)
                .map_or(free.len(), |offset| start + offset);

            let mut windows = free[start..end].windows(size);
            if let Some(block) = windows.find(|window| is_contiguous(window)) {
                return Some(block.to_vec());
            }
            start = end;
        }

        None
    }
}

/// Indices of members still waiting for a seat, bucketed by fare class in the
/// order each class first appears.
fn waiting_by_class(members: &[ManifestEntry]) -> Vec<(FareClassId, Vec<usize>)> {
    let mut buckets: Vec<(FareClassId, Vec<usize>)> = Vec::new();

    for (index, entry) in members.iter().enumerate() {
        if entry.passenger.is_seated() {
            continue;
        }
        let class = entry.passenger.seat_type_id;
        match buckets.iter_mut().find(|(c, _)| *c == class) {
            Some((_, indices)) => indices.push(index),
            None => buckets.push((class, vec![index])),
        }
    }

    buckets
}

fn is_contiguous(seats: &[&Seat]) -> bool {
    seats
        .windows(2)
        .all(|pair| pair[1].seat_column as u32 == pair[0].seat_column as u32 + 1)
}
