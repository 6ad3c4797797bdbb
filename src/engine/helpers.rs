use uuid::Uuid;

use crate::{
    entities::{Driver, Rider, Trip},
    error::{not_found_error, Error},
};

pub fn fetch_trip(trips: &[Trip], id: u64) -> Result<&Trip, Error> {
    trips
        .iter()
        .find(|trip| trip.id == id)
        .ok_or_else(|| not_found_error(format!("trip {} not found", id)))
}

pub fn fetch_trip_for_update(trips: &mut [Trip], id: u64) -> Result<&mut Trip, Error> {
    trips
        .iter_mut()
        .find(|trip| trip.id == id)
        .ok_or_else(|| not_found_error(format!("trip {} not found", id)))
}

pub fn fetch_driver<'a>(drivers: &'a [Driver], id: &Uuid) -> Result<&'a Driver, Error> {
    drivers
        .iter()
        .find(|driver| driver.id == *id)
        .ok_or_else(|| not_found_error(format!("driver {} not found", id)))
}

pub fn fetch_driver_for_update<'a>(
    drivers: &'a mut [Driver],
    id: &Uuid,
) -> Result<&'a mut Driver, Error> {
    drivers
        .iter_mut()
        .find(|driver| driver.id == *id)
        .ok_or_else(|| not_found_error(format!("driver {} not found", id)))
}

pub fn fetch_rider<'a>(riders: &'a [Rider], id: &Uuid) -> Result<&'a Rider, Error> {
    riders
        .iter()
        .find(|rider| rider.id == *id)
        .ok_or_else(|| not_found_error(format!("rider {} not found", id)))
}

pub fn fetch_rider_for_update<'a>(
    riders: &'a mut [Rider],
    id: &Uuid,
) -> Result<&'a mut Rider, Error> {
    riders
        .iter_mut()
        .find(|rider| rider.id == *id)
        .ok_or_else(|| not_found_error(format!("rider {} not found", id)))
}

/// Resolves trip ids in the order given, skipping ids with no record.
pub fn collect_trips(trips: &[Trip], ids: &[u64]) -> Vec<Trip> {
    ids.iter()
        .filter_map(|id| fetch_trip(trips, *id).ok())
        .cloned()
        .collect()
}
