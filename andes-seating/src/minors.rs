use andes_shared::Seat;

use crate::catalog::SeatCatalog;
use crate::grouping::ManifestEntry;
use crate::occupancy::OccupancySet;
use crate::report::Placements;

/// Seats minors as close as possible to an adult of their own purchase.
pub struct MinorAllocator<'a> {
    catalog: &'a SeatCatalog,
    max_distance: Option<u32>,
}

impl<'a> MinorAllocator<'a> {
    pub fn new(catalog: &'a SeatCatalog, max_distance: Option<u32>) -> Self {
        Self { catalog, max_distance }
    }

    /// Seat every minor without a seat, next to one of `guardians` when
    /// possible. Guardian seats unknown to the catalog are ignored.
    pub fn allocate(
        &self,
        minors: &mut [ManifestEntry],
        guardians: &[ManifestEntry],
        occupancy: &mut OccupancySet,
    ) -> Placements {
        let mut placements = Placements::default();
        let guardian_seats: Vec<&Seat> = guardians
            .iter()
            .filter_map(|g| g.passenger.seat_id)
            .filter_map(|seat_id| self.catalog.get(seat_id))
            .collect();

        for entry in minors.iter_mut().filter(|m| !m.passenger.is_seated()) {
            let passenger = &mut entry.passenger;
            let candidates = self.catalog.free_seats(passenger.seat_type_id, occupancy);

            let Some(first) = candidates.first().copied() else {
                tracing::warn!(
                    passenger_id = passenger.passenger_id,
                    fare_class = passenger.seat_type_id,
                    "No free seat left in fare class for minor"
                );
                placements.unseated.push(passenger.passenger_id);
                continue;
            };

            let seat = self.nearest(&candidates, &guardian_seats).unwrap_or(first);
            occupancy.assign(passenger, seat);
            placements.assigned += 1;
        }

        placements
    }

    /// Candidate with the smallest distance to any guardian seat. Ties keep
    /// the earlier candidate. `None` when there is no guardian or the best
    /// distance is past the configured limit.
    fn nearest(&self, candidates: &[&'a Seat], guardians: &[&Seat]) -> Option<&'a Seat> {
        let mut best: Option<(&'a Seat, u32)> = None;

        for &candidate in candidates {
            for guardian in guardians {
                let distance = candidate.distance_to(guardian);
                if best.map_or(true, |(_, shortest)| distance < shortest) {
                    best = Some((candidate, distance));
                }
            }
        }

        let (seat, distance) = best?;
        match self.max_distance {
            Some(limit) if distance > limit => {
                tracing::debug!(distance, limit, "Closest seat too far from guardian");
                None
            }
            _ => Some(seat),
        }
    }
}
