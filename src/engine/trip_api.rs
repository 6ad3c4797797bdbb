use super::helpers::{
    fetch_driver_for_update, fetch_rider_for_update, fetch_trip, fetch_trip_for_update,
};
use super::Engine;

use uuid::Uuid;

use crate::{api::TripAPI, entities::Trip, error::Error};

impl TripAPI for Engine {
    #[tracing::instrument(skip(self))]
    fn request_ride(
        &mut self,
        rider_id: Uuid,
        start_location: &str,
        destination: &str,
    ) -> Result<Option<Trip>, Error> {
        let rider = fetch_rider_for_update(&mut self.riders, &rider_id)?;

        tracing::info!("scanning {} drivers for availability", self.drivers.len());

        let driver = match self.drivers.iter_mut().find(|driver| driver.is_available()) {
            Some(driver) => driver,
            None => {
                tracing::warn!("no available drivers at the moment");
                return Ok(None);
            }
        };

        self.trip_counter += 1;

        let mut trip = Trip::new(
            self.trip_counter,
            rider.id,
            start_location.into(),
            destination.into(),
            self.fares.sample(),
        );

        driver.accept_ride(&mut trip)?;
        rider.record_trip(trip.id);
        self.trips.push(trip.clone());

        tracing::info!(
            "ride {} requested successfully, matched driver {} with fare {}",
            trip.id,
            driver.name,
            trip.fare()
        );

        Ok(Some(trip))
    }

    #[tracing::instrument(skip(self))]
    fn accept_ride(&mut self, driver_id: Uuid, trip_id: u64) -> Result<Trip, Error> {
        let trip = fetch_trip_for_update(&mut self.trips, trip_id)?;
        let driver = fetch_driver_for_update(&mut self.drivers, &driver_id)?;

        if !driver.is_available() {
            tracing::warn!(
                "driver {} accepts trip {} while already assigned",
                driver.name,
                trip_id
            );
        }

        driver.accept_ride(trip)?;

        Ok(trip.clone())
    }

    #[tracing::instrument(skip(self))]
    fn start_trip(&mut self, trip_id: u64) -> Result<Trip, Error> {
        let trip = fetch_trip_for_update(&mut self.trips, trip_id)?;
        trip.start()?;

        Ok(trip.clone())
    }

    #[tracing::instrument(skip(self))]
    fn complete_trip(&mut self, trip_id: u64) -> Result<Trip, Error> {
        let trip = fetch_trip_for_update(&mut self.trips, trip_id)?;

        let driver = trip
            .driver_id()
            .and_then(|id| fetch_driver_for_update(&mut self.drivers, &id).ok());

        match driver {
            Some(driver) => driver.complete_trip(trip)?,
            None => {
                trip.complete()?;
                tracing::warn!(
                    "driver of trip {} not found, availability left unchanged",
                    trip_id
                );
            }
        }

        Ok(trip.clone())
    }

    fn find_trip(&self, trip_id: u64) -> Result<Trip, Error> {
        fetch_trip(&self.trips, trip_id).cloned()
    }

    fn list_available_trips(&self) -> Vec<Trip> {
        self.trips
            .iter()
            .filter(|trip| trip.is_requested())
            .cloned()
            .collect()
    }

    fn list_all_trips(&self) -> Vec<Trip> {
        self.trips.clone()
    }
}
