pub mod catalog;
pub mod occupancy;
pub mod grouping;
pub mod adults;
pub mod minors;
pub mod policy;
pub mod report;
pub mod engine;

pub use catalog::{CatalogError, SeatCatalog};
pub use occupancy::OccupancySet;
pub use grouping::{group_by_purchase, ManifestEntry, PurchaseGroup};
pub use adults::AdultAllocator;
pub use minors::MinorAllocator;
pub use policy::{AdultStrategy, OutputOrder, SeatingPolicy};
pub use report::{Allocation, AllocationReport, FlightAllocation, Placements};
pub use engine::SeatingEngine;

#[derive(Debug, thiserror::Error)]
pub enum SeatingError {
    #[error("Invalid seat catalog: {0}")]
    Catalog(#[from] CatalogError),
}

pub type SeatingResult<T> = Result<T, SeatingError>;
