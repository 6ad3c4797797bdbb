use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

pub const PHONE_NUMBER_FORMAT: &str = "123-456-7890";

/// A phone number in `ddd-ddd-dddd` form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, Error> {
        if !Self::is_valid(raw) {
            return Err(invalid_input_error(format!(
                "invalid phone number {:?}, expected format {}",
                raw, PHONE_NUMBER_FORMAT
            )));
        }

        Ok(Self(raw.to_string()))
    }

    pub fn is_valid(raw: &str) -> bool {
        let groups: Vec<&str> = raw.split('-').collect();

        match groups.as_slice() {
            [a, b, c] => {
                a.len() == 3
                    && b.len() == 3
                    && c.len() == 4
                    && raw.bytes().filter(|byte| *byte != b'-').all(|byte| byte.is_ascii_digit())
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for PhoneNumber {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PhoneNumber> for String {
    fn from(value: PhoneNumber) -> Self {
        value.0
    }
}
