use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Uniform};

use crate::config::Config;

pub struct FareSampler {
    rng: StdRng,
    distribution: Uniform<u32>,
}

impl FareSampler {
    /// `config` must already be validated so the range is non-empty.
    pub fn new(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            rng,
            distribution: Uniform::new(config.fare_min, config.fare_max),
        }
    }

    pub fn sample(&mut self) -> u32 {
        self.distribution.sample(&mut self.rng)
    }
}
