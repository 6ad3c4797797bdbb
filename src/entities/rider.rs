use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::PhoneNumber;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Rider {
    pub id: Uuid,
    pub name: String,
    pub phone_number: PhoneNumber,
    trip_ids: Vec<u64>,
}

impl Rider {
    pub fn new(name: String, phone_number: PhoneNumber) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            trip_ids: vec![],
        }
    }

    /// Append-only ride history, in request order.
    pub fn trip_ids(&self) -> &[u64] {
        &self.trip_ids
    }

    pub fn record_trip(&mut self, trip_id: u64) {
        self.trip_ids.push(trip_id);
    }
}
