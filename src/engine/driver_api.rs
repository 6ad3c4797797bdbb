use super::helpers::{collect_trips, fetch_driver, fetch_driver_for_update};
use super::Engine;

use uuid::Uuid;

use crate::{
    api::DriverAPI,
    entities::{Driver, Trip},
    error::{not_found_error, Error},
};

impl DriverAPI for Engine {
    fn find_driver(&self, id: Uuid) -> Result<Driver, Error> {
        fetch_driver(&self.drivers, &id).cloned()
    }

    /// First registered driver with this name.
    fn find_driver_by_name(&self, name: &str) -> Result<Driver, Error> {
        self.drivers
            .iter()
            .find(|driver| driver.name == name)
            .cloned()
            .ok_or_else(|| not_found_error(format!("driver {:?} not found", name)))
    }

    fn drivers(&self) -> Vec<Driver> {
        self.drivers.clone()
    }

    fn driver_trips(&self, id: Uuid) -> Result<Vec<Trip>, Error> {
        let driver = fetch_driver(&self.drivers, &id)?;

        Ok(collect_trips(&self.trips, driver.trip_ids()))
    }

    #[tracing::instrument(skip(self))]
    fn toggle_availability(&mut self, id: Uuid) -> Result<Driver, Error> {
        let driver = fetch_driver_for_update(&mut self.drivers, &id)?;
        driver.toggle_availability();

        tracing::info!("driver {} is now {}", driver.name, driver.status_string());

        Ok(driver.clone())
    }
}
