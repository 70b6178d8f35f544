use std::collections::{HashMap, HashSet};

use andes_seating::{AdultStrategy, SeatingEngine, SeatingPolicy};
use andes_shared::{FareClassId, Passenger, Seat, SeatId};
use proptest::prelude::*;

/// Seats laid out six abreast, each with a random fare class.
fn arb_seats() -> impl Strategy<Value = Vec<Seat>> {
    prop::collection::vec(1i64..=3, 0..=48).prop_map(|classes| {
        classes
            .into_iter()
            .enumerate()
            .map(|(i, class)| {
                let row = (i / 6) as i32 + 1;
                let column = (b'A' + (i % 6) as u8) as char;
                Seat::new(100 + i as i64, row, column, class, 1)
            })
            .collect()
    })
}

/// (purchase, age, fare class, wants a pre-existing seat)
fn arb_travellers() -> impl Strategy<Value = Vec<(i64, i32, FareClassId, bool)>> {
    prop::collection::vec((1i64..=6, 0i32..=80, 1i64..=3, any::<bool>()), 0..=40)
}

fn arb_policy() -> impl Strategy<Value = SeatingPolicy> {
    (any::<bool>(), prop::option::of(0u32..=4)).prop_map(|(first_fit, minor_max_distance)| {
        SeatingPolicy {
            adult_strategy: if first_fit { AdultStrategy::FirstFit } else { AdultStrategy::Block },
            minor_max_distance,
            ..SeatingPolicy::default()
        }
    })
}

/// Build passengers; the ones asking for a pre-existing seat get a distinct
/// seat of their own class while any remain.
fn manifest(seats: &[Seat], travellers: Vec<(i64, i32, FareClassId, bool)>) -> Vec<Passenger> {
    let mut taken = HashSet::new();

    travellers
        .into_iter()
        .enumerate()
        .map(|(i, (purchase_id, age, class, pre_seated))| {
            let seat_id = if pre_seated {
                seats
                    .iter()
                    .find(|s| s.seat_type_id == class && !taken.contains(&s.seat_id))
                    .map(|s| s.seat_id)
            } else {
                None
            };
            if let Some(id) = seat_id {
                taken.insert(id);
            }
            Passenger {
                passenger_id: i as i64 + 1,
                dni: format!("{:08}", i).into(),
                name: format!("Traveller {}", i),
                age,
                country: "Chile".to_string(),
                boarding_pass_id: 10_000 + i as i64,
                purchase_id,
                seat_type_id: class,
                seat_id,
            }
        })
        .collect()
}

proptest! {
    #[test]
    fn test_allocation_invariants(
        seats in arb_seats(),
        travellers in arb_travellers(),
        policy in arb_policy(),
    ) {
        let input = manifest(&seats, travellers);
        let output = SeatingEngine::new(policy).allocate(input.clone(), seats.clone()).unwrap();
        let seat_class: HashMap<SeatId, FareClassId> =
            seats.iter().map(|s| (s.seat_id, s.seat_type_id)).collect();

        // Same passengers, none dropped or duplicated.
        prop_assert_eq!(output.len(), input.len());
        let mut in_ids: Vec<i64> = input.iter().map(|p| p.passenger_id).collect();
        let mut out_ids: Vec<i64> = output.iter().map(|p| p.passenger_id).collect();
        in_ids.sort_unstable();
        out_ids.sort_unstable();
        prop_assert_eq!(in_ids, out_ids);

        // No seat handed out twice.
        let held: Vec<SeatId> = output.iter().filter_map(|p| p.seat_id).collect();
        let distinct: HashSet<SeatId> = held.iter().copied().collect();
        prop_assert_eq!(held.len(), distinct.len());

        for after in &output {
            let before = input.iter().find(|p| p.passenger_id == after.passenger_id).unwrap();

            // Pre-seated passengers keep their seat and nothing else changes.
            if before.seat_id.is_some() {
                prop_assert_eq!(before, after);
            }

            // Seats always match the requested fare class.
            if let Some(seat_id) = after.seat_id {
                prop_assert_eq!(seat_class.get(&seat_id), Some(&after.seat_type_id));
            } else {
                // Nobody is left standing while a seat of their class is free.
                let free = seats
                    .iter()
                    .filter(|s| s.seat_type_id == after.seat_type_id)
                    .any(|s| !distinct.contains(&s.seat_id));
                prop_assert!(!free);
            }
        }
    }

    #[test]
    fn test_fully_seated_manifest_is_unchanged(
        seats in arb_seats(),
        travellers in arb_travellers(),
    ) {
        let engine = SeatingEngine::default();
        let first = engine.allocate(manifest(&seats, travellers), seats.clone()).unwrap();
        let seated: Vec<Passenger> = first.into_iter().filter(|p| p.is_seated()).collect();

        let second = engine.allocate(seated.clone(), seats).unwrap();
        prop_assert_eq!(second, seated);
    }

    #[test]
    fn test_allocation_is_deterministic(
        seats in arb_seats(),
        travellers in arb_travellers(),
    ) {
        let input = manifest(&seats, travellers);
        let engine = SeatingEngine::default();

        let first = engine.allocate(input.clone(), seats.clone()).unwrap();
        let second = engine.allocate(input, seats).unwrap();
        prop_assert_eq!(first, second);
    }
}
