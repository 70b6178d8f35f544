use serde::{Deserialize, Serialize};

use crate::pii::Masked;
use crate::{FareClassId, PassengerId, PurchaseId, SeatId};

/// Default age at which a passenger may sit without a guardian.
pub const ADULT_AGE: i32 = 18;

/// A passenger on a flight's manifest.
///
/// `seat_id` is `None` until a seat has been assigned; a passenger that
/// arrives with a seat keeps it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Passenger {
    pub passenger_id: PassengerId,
    pub dni: Masked<String>,
    pub name: String,
    pub age: i32,
    pub country: String,
    pub boarding_pass_id: i64,
    pub purchase_id: PurchaseId,
    pub seat_type_id: FareClassId,
    #[serde(default)]
    pub seat_id: Option<SeatId>,
}

impl Passenger {
    pub fn is_adult(&self, adult_age: i32) -> bool {
        self.age >= adult_age
    }

    pub fn is_seated(&self) -> bool {
        self.seat_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passenger(age: i32, seat_id: Option<SeatId>) -> Passenger {
        Passenger {
            passenger_id: 1,
            dni: "27459372".into(),
            name: "Olivia".to_string(),
            age,
            country: "Chile".to_string(),
            boarding_pass_id: 100,
            purchase_id: 9,
            seat_type_id: 3,
            seat_id,
        }
    }

    #[test]
    fn test_adult_threshold() {
        assert!(passenger(18, None).is_adult(ADULT_AGE));
        assert!(!passenger(17, None).is_adult(ADULT_AGE));
        assert!(passenger(16, None).is_adult(16));
        assert!(!passenger(18, None).is_adult(21));
    }

    #[test]
    fn test_unseated_passenger_serializes_null_seat() {
        let json = serde_json::to_value(passenger(30, None)).unwrap();

        assert_eq!(json["passengerId"], 1);
        assert_eq!(json["boardingPassId"], 100);
        assert_eq!(json["purchaseId"], 9);
        assert_eq!(json["seatTypeId"], 3);
        assert_eq!(json["dni"], "27459372");
        assert!(json["seatId"].is_null());
    }

    #[test]
    fn test_missing_seat_deserializes_as_unseated() {
        let json = r#"{
            "passengerId": 4, "dni": "1", "name": "Ana", "age": 7,
            "country": "Peru", "boardingPassId": 12, "purchaseId": 2, "seatTypeId": 1
        }"#;
        let p: Passenger = serde_json::from_str(json).unwrap();

        assert!(!p.is_seated());
        assert!(!p.is_adult(ADULT_AGE));
    }

    #[test]
    fn test_debug_does_not_leak_dni() {
        let rendered = format!("{:?}", passenger(30, Some(4)));
        assert!(!rendered.contains("27459372"));
    }
}
