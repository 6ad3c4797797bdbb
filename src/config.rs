use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{config_error, Error};

pub const DEFAULT_FARE_MIN: u32 = 10;
pub const DEFAULT_FARE_MAX: u32 = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(config_error(format!("unknown output format: {}", other))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Lowest fare, inclusive.
    pub fare_min: u32,
    /// Highest fare, exclusive.
    pub fare_max: u32,
    pub seed: Option<u64>,
    pub output: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fare_min: DEFAULT_FARE_MIN,
            fare_max: DEFAULT_FARE_MAX,
            seed: None,
            output: OutputFormat::Text,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then reads the `RIDESHARE_*` variables.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        Self::from_lookup(|key| match env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(env::VarError::NotPresent) => Ok(None),
            Err(err) => Err(err.into()),
        })
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Result<Option<String>, Error>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("RIDESHARE_FARE_MIN")? {
            config.fare_min = parse_var("RIDESHARE_FARE_MIN", &value)?;
        }

        if let Some(value) = lookup("RIDESHARE_FARE_MAX")? {
            config.fare_max = parse_var("RIDESHARE_FARE_MAX", &value)?;
        }

        if let Some(value) = lookup("RIDESHARE_SEED")? {
            config.seed = Some(parse_var("RIDESHARE_SEED", &value)?);
        }

        if let Some(value) = lookup("RIDESHARE_OUTPUT")? {
            config.output = value.parse()?;
        }

        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.fare_min >= self.fare_max {
            return Err(config_error(format!(
                "fare range is empty: [{}, {})",
                self.fare_min, self.fare_max
            )));
        }

        Ok(())
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T, Error> {
    value
        .trim()
        .parse()
        .map_err(|_| config_error(format!("invalid value for {}: {:?}", key, value)))
}
