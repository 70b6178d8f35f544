use std::collections::HashMap;

use andes_shared::{Passenger, PurchaseId};

/// A passenger together with its position on the incoming manifest.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub position: usize,
    pub passenger: Passenger,
}

/// Passengers bought together on one purchase.
#[derive(Debug, Clone)]
pub struct PurchaseGroup {
    pub purchase_id: PurchaseId,
    /// Adults, or every member when nobody in the purchase is an adult.
    pub adults: Vec<ManifestEntry>,
    pub minors: Vec<ManifestEntry>,
    /// `false` when the adults above are minors travelling without a guardian.
    pub has_guardian: bool,
}

impl PurchaseGroup {
    fn new(purchase_id: PurchaseId) -> Self {
        Self {
            purchase_id,
            adults: Vec::new(),
            minors: Vec::new(),
            has_guardian: true,
        }
    }

    pub fn into_entries(self) -> impl Iterator<Item = ManifestEntry> {
        self.adults.into_iter().chain(self.minors)
    }
}

/// Split a manifest into purchase groups, in the order each purchase first
/// appears. Members keep manifest order inside their adult/minor lists.
pub fn group_by_purchase(passengers: Vec<Passenger>, adult_age: i32) -> Vec<PurchaseGroup> {
    let mut groups: Vec<PurchaseGroup> = Vec::new();
    let mut index: HashMap<PurchaseId, usize> = HashMap::new();

    for (position, passenger) in passengers.into_iter().enumerate() {
        let slot = *index.entry(passenger.purchase_id).or_insert_with(|| {
            groups.push(PurchaseGroup::new(passenger.purchase_id));
            groups.len() - 1
        });

        let group = &mut groups[slot];
        let entry = ManifestEntry { position, passenger };
        if entry.passenger.is_adult(adult_age) {
            group.adults.push(entry);
        } else {
            group.minors.push(entry);
        }
    }

    for group in groups.iter_mut().filter(|g| g.adults.is_empty()) {
        group.adults = std::mem::take(&mut group.minors);
        group.has_guardian = false;
    }

    groups
}
