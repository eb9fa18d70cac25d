use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Room lifecycle, tied to the booking state machine: `Booked` between
/// reservation and check-in, `Occupied` until check-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Free,
    Booked,
    Occupied,
}

impl RoomStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RoomStatus::Free => "free",
            RoomStatus::Booked => "booked",
            RoomStatus::Occupied => "occupied",
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "free" => Ok(RoomStatus::Free),
            "booked" => Ok(RoomStatus::Booked),
            "occupied" => Ok(RoomStatus::Occupied),
            other => Err(Error::Validation(format!(
                "unrecognized room status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub number: String,
    /// Open-ended category; the seed inventory uses standard/luxury/suite.
    pub room_type: String,
    pub price_per_night: i64,
    pub status: RoomStatus,
    pub floor: i64,
}
