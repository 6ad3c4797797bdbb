use uuid::Uuid;

use crate::entities::{Driver, Registration, Rider, Trip};
use crate::error::Error;

pub trait UserAPI {
    fn register(&mut self, registration: Registration) -> Result<Uuid, Error>;
    fn find_rider(&self, id: Uuid) -> Result<Rider, Error>;
    fn find_rider_by_name(&self, name: &str) -> Result<Rider, Error>;
    fn riders(&self) -> Vec<Rider>;
    fn ride_history(&self, rider_id: Uuid) -> Result<Vec<Trip>, Error>;
}

pub trait DriverAPI {
    fn find_driver(&self, id: Uuid) -> Result<Driver, Error>;
    fn find_driver_by_name(&self, name: &str) -> Result<Driver, Error>;
    fn drivers(&self) -> Vec<Driver>;
    fn driver_trips(&self, id: Uuid) -> Result<Vec<Trip>, Error>;
    fn toggle_availability(&mut self, id: Uuid) -> Result<Driver, Error>;
}

pub trait TripAPI {
    /// `Ok(None)` means no driver was available; nothing was recorded.
    fn request_ride(
        &mut self,
        rider_id: Uuid,
        start_location: &str,
        destination: &str,
    ) -> Result<Option<Trip>, Error>;

    fn accept_ride(&mut self, driver_id: Uuid, trip_id: u64) -> Result<Trip, Error>;
    fn start_trip(&mut self, trip_id: u64) -> Result<Trip, Error>;
    fn complete_trip(&mut self, trip_id: u64) -> Result<Trip, Error>;
    fn find_trip(&self, trip_id: u64) -> Result<Trip, Error>;
    fn list_available_trips(&self) -> Vec<Trip>;
    fn list_all_trips(&self) -> Vec<Trip>;
}

pub trait API: UserAPI + DriverAPI + TripAPI {}
