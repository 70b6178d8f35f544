use std::collections::HashSet;

use uuid::Uuid;

use andes_shared::{FlightId, FlightManifest, FlightPassengers, Passenger, Seat};

use crate::adults::AdultAllocator;
use crate::catalog::SeatCatalog;
use crate::grouping::group_by_purchase;
use crate::minors::MinorAllocator;
use crate::occupancy::OccupancySet;
use crate::policy::{OutputOrder, SeatingPolicy};
use crate::report::{Allocation, AllocationReport, FlightAllocation};
use crate::SeatingResult;

/// Assigns seats to a flight's passengers.
///
/// Every call starts from scratch: the only occupied seats are the ones the
/// passengers already hold. Nothing is reserved or written anywhere, so the
/// caller decides whether to persist the result.
#[derive(Debug, Clone, Default)]
pub struct SeatingEngine {
    policy: SeatingPolicy,
}

impl SeatingEngine {
    pub fn new(policy: SeatingPolicy) -> Self {
        Self { policy }
    }

    /// Seat every passenger that has no seat yet.
    ///
    /// The result has one entry per input passenger. Passengers whose fare
    /// class is full come back with `seat_id: None`. A manifest where everyone
    /// already has a seat comes back exactly as given.
    ///
    /// # Errors
    /// [`crate::SeatingError::Catalog`] when two seats share an id.
    pub fn allocate(
        &self,
        passengers: Vec<Passenger>,
        seats: Vec<Seat>,
    ) -> SeatingResult<Vec<Passenger>> {
        self.run(None, passengers, seats).map(|allocation| allocation.passengers)
    }

    pub fn allocate_with_report(
        &self,
        passengers: Vec<Passenger>,
        seats: Vec<Seat>,
    ) -> SeatingResult<Allocation> {
        self.run(None, passengers, seats)
    }

    /// Seat a whole flight, keeping the flight record next to its passengers.
    pub fn allocate_manifest(
        &self,
        manifest: FlightManifest,
    ) -> SeatingResult<FlightAllocation> {
        let FlightManifest { flight, passengers, seats } = manifest;
        let allocation = self.run(Some(flight.flight_id), passengers, seats)?;

        Ok(FlightAllocation {
            flight: FlightPassengers { flight, passengers: allocation.passengers },
            report: allocation.report,
        })
    }

    fn run(
        &self,
        flight_id: Option<FlightId>,
        passengers: Vec<Passenger>,
        seats: Vec<Seat>,
    ) -> SeatingResult<Allocation> {
        let run_id = Uuid::new_v4();
        let span = tracing::info_span!("seat_allocation", run_id = %run_id, flight_id = ?flight_id);
        let _enter = span.enter();

        let mut report = AllocationReport::new(run_id, flight_id);
        if passengers.is_empty() {
            tracing::debug!("Empty manifest, nothing to seat");
            return Ok(Allocation { passengers, report });
        }

        let catalog = SeatCatalog::new(seats)?;
        let mut occupancy = OccupancySet::seeded(&passengers);
        report.pre_seated = passengers.iter().filter(|p| p.is_seated()).count();

        if report.pre_seated == passengers.len() {
            report.groups = passengers.iter().map(|p| p.purchase_id).collect::<HashSet<_>>().len();
            tracing::debug!(passengers = passengers.len(), "Everyone already seated");
            return Ok(Allocation { passengers, report });
        }

        let total = passengers.len();
        let groups = group_by_purchase(passengers, self.policy.adult_age);
        report.groups = groups.len();

        let adults = AdultAllocator::new(&catalog, self.policy.adult_strategy);
        let minors = MinorAllocator::new(&catalog, self.policy.minor_max_distance);

        let mut entries = Vec::with_capacity(total);
        for mut group in groups {
            tracing::debug!(
                purchase_id = group.purchase_id,
                adults = group.adults.len(),
                minors = group.minors.len(),
                has_guardian = group.has_guardian,
                "Seating purchase group"
            );
            report.record(adults.allocate(&mut group.adults, &mut occupancy));
            report.record(minors.allocate(&mut group.minors, &group.adults, &mut occupancy));
            entries.extend(group.into_entries());
        }

        if self.policy.output_order == OutputOrder::Manifest {
            entries.sort_by_key(|entry| entry.position);
        }

        tracing::info!(
            seats = catalog.len(),
            passengers = total,
            pre_seated = report.pre_seated,
            assigned = report.assigned,
            unseated = report.unseated.len(),
            "Seat allocation finished"
        );

        Ok(Allocation {
            passengers: entries.into_iter().map(|entry| entry.passenger).collect(),
            report,
        })
    }
}
