mod driver_api;
mod fare;
mod helpers;
mod trip_api;
mod user_api;

use crate::{
    api::API,
    config::Config,
    entities::{Driver, Rider, Trip},
    error::Error,
};

use fare::FareSampler;

/// Owns every registry for one run of the simulator.
pub struct Engine {
    riders: Vec<Rider>,
    drivers: Vec<Driver>,
    trips: Vec<Trip>,
    trip_counter: u64,
    fares: FareSampler,
}

impl Engine {
    #[tracing::instrument(name = "Engine::new")]
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;

        Ok(Self {
            riders: vec![],
            drivers: vec![],
            trips: vec![],
            trip_counter: 0,
            fares: FareSampler::new(config),
        })
    }
}

impl API for Engine {}
