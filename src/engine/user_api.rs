use super::helpers::{collect_trips, fetch_rider};
use super::Engine;

use uuid::Uuid;

use crate::{
    api::UserAPI,
    entities::{Driver, PhoneNumber, Registration, Rider, Trip},
    error::{invalid_input_error, not_found_error, Error},
};

impl UserAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn register(&mut self, registration: Registration) -> Result<Uuid, Error> {
        if registration.name().trim().is_empty() {
            return Err(invalid_input_error("name must not be empty"));
        }

        let role = registration.role();
        let registration = registration.trimmed();

        let id = match registration {
            Registration::Rider { name, phone_number } => {
                let rider = Rider::new(name, PhoneNumber::parse(&phone_number)?);
                let id = rider.id;
                self.riders.push(rider);
                id
            }
            Registration::Driver {
                name,
                phone_number,
                vehicle,
            } => {
                let driver = Driver::new(name, PhoneNumber::parse(&phone_number)?, vehicle);
                let id = driver.id;
                self.drivers.push(driver);
                id
            }
        };

        tracing::info!("registered {} with id {}", role, id);

        Ok(id)
    }

    fn find_rider(&self, id: Uuid) -> Result<Rider, Error> {
        fetch_rider(&self.riders, &id).cloned()
    }

    fn find_rider_by_name(&self, name: &str) -> Result<Rider, Error> {
        self.riders
            .iter()
            .find(|rider| rider.name == name)
            .cloned()
            .ok_or_else(|| not_found_error(format!("rider {:?} not found", name)))
    }

    fn riders(&self) -> Vec<Rider> {
        self.riders.clone()
    }

    fn ride_history(&self, rider_id: Uuid) -> Result<Vec<Trip>, Error> {
        let rider = fetch_rider(&self.riders, &rider_id)?;

        Ok(collect_trips(&self.trips, rider.trip_ids()))
    }
}
