use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{PhoneNumber, Trip};
use crate::error::Error;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Driver {
    pub id: Uuid,
    pub name: String,
    pub phone_number: PhoneNumber,
    pub vehicle: String,
    available: bool,
    trip_ids: Vec<u64>,
}

impl Driver {
    pub fn new(name: String, phone_number: PhoneNumber, vehicle: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            phone_number,
            vehicle,
            available: true,
            trip_ids: vec![],
        }
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Every trip this driver has accepted, oldest first.
    pub fn trip_ids(&self) -> &[u64] {
        &self.trip_ids
    }

    pub fn status_string(&self) -> String {
        match self.available {
            true => "AVAILABLE".into(),
            false => "ASSIGNED".into(),
        }
    }

    // Does not look at `available`: a driver can be handed a second trip.
    #[tracing::instrument(skip(trip), fields(trip_id = trip.id))]
    pub fn accept_ride(&mut self, trip: &mut Trip) -> Result<(), Error> {
        trip.accept(self.id)?;

        self.available = false;
        self.trip_ids.push(trip.id);

        tracing::info!("{} accepted the ride", self.name);

        Ok(())
    }

    #[tracing::instrument(skip(trip), fields(trip_id = trip.id))]
    pub fn complete_trip(&mut self, trip: &mut Trip) -> Result<(), Error> {
        trip.complete()?;
        self.available = true;

        tracing::info!("trip completed by {}", self.name);

        Ok(())
    }

    pub fn toggle_availability(&mut self) {
        self.available = !self.available;
    }
}
