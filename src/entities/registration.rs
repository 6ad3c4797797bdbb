use serde::{Deserialize, Serialize};

/// Profile data for a new user. The variant decides which registry it lands in.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Registration {
    Rider {
        name: String,
        phone_number: String,
    },
    Driver {
        name: String,
        phone_number: String,
        vehicle: String,
    },
}

impl Registration {
    pub fn name(&self) -> &str {
        match self {
            Self::Rider { name, .. } | Self::Driver { name, .. } => name,
        }
    }

    pub fn trimmed(self) -> Self {
        match self {
            Self::Rider { name, phone_number } => Self::Rider {
                name: name.trim().into(),
                phone_number,
            },
            Self::Driver {
                name,
                phone_number,
                vehicle,
            } => Self::Driver {
                name: name.trim().into(),
                phone_number,
                vehicle: vehicle.trim().into(),
            },
        }
    }

    pub fn role(&self) -> String {
        match self {
            Self::Rider { .. } => "rider".into(),
            Self::Driver { .. } => "driver".into(),
        }
    }
}
