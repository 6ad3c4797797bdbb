use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{invalid_state_error, Error};

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Trip {
    pub id: u64,
    pub rider_id: Uuid,
    pub start_location: String,
    pub destination: String,
    pub requested_at: DateTime<Utc>,
    driver_id: Option<Uuid>,
    fare: u32,
    status: Status,
    completed_at: Option<DateTime<Utc>>,
}

/// Trip lifecycle. Transitions only move one step forward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    Requested,
    Accepted,
    InProgress,
    Completed,
}

impl Status {
    pub fn name(&self) -> String {
        match self {
            Self::Requested => "requested".into(),
            Self::Accepted => "accepted".into(),
            Self::InProgress => "in_progress".into(),
            Self::Completed => "completed".into(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Requested => "Requested",
            Self::Accepted => "Accepted",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        };

        f.write_str(label)
    }
}

impl Trip {
    /// The fare is fixed here and has no setter.
    pub fn new(
        id: u64,
        rider_id: Uuid,
        start_location: String,
        destination: String,
        fare: u32,
    ) -> Self {
        Self {
            id,
            rider_id,
            start_location,
            destination,
            requested_at: Utc::now(),
            driver_id: None,
            fare,
            status: Status::Requested,
            completed_at: None,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn fare(&self) -> u32 {
        self.fare
    }

    pub fn driver_id(&self) -> Option<Uuid> {
        self.driver_id
    }

    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    pub fn is_requested(&self) -> bool {
        self.status == Status::Requested
    }

    #[tracing::instrument]
    pub fn accept(&mut self, driver_id: Uuid) -> Result<(), Error> {
        match self.status {
            Status::Requested => {
                self.driver_id = Some(driver_id);
                self.status = Status::Accepted;
                Ok(())
            }
            _ => Err(invalid_state_error(format!(
                "trip {} cannot be accepted while {}",
                self.id,
                self.status.name()
            ))),
        }
    }

    #[tracing::instrument]
    pub fn start(&mut self) -> Result<(), Error> {
        match self.status {
            Status::Accepted => {
                self.status = Status::InProgress;
                Ok(())
            }
            _ => Err(invalid_state_error(format!(
                "trip {} cannot be started while {}",
                self.id,
                self.status.name()
            ))),
        }
    }

    #[tracing::instrument]
    pub fn complete(&mut self) -> Result<(), Error> {
        match self.status {
            Status::InProgress => {
                self.status = Status::Completed;
                self.completed_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(invalid_state_error(format!(
                "trip {} is not in progress",
                self.id
            ))),
        }
    }
}
