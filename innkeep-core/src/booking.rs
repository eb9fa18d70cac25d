use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::guest::NewGuest;
use crate::stay::StayWindow;

/// Booking lifecycle. Strictly forward: active → checked_in → completed.
/// There is no cancellation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Active,
    CheckedIn,
    Completed,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Active => "active",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::Completed => "completed",
        }
    }

    pub fn can_check_in(&self) -> bool {
        matches!(self, BookingStatus::Active)
    }

    pub fn can_check_out(&self) -> bool {
        matches!(self, BookingStatus::CheckedIn)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "active" => Ok(BookingStatus::Active),
            "checked_in" => Ok(BookingStatus::CheckedIn),
            "completed" => Ok(BookingStatus::Completed),
            other => Err(Error::Validation(format!(
                "unrecognized booking status '{other}'"
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub guest_id: i64,
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    /// Room cost captured at creation time. Later room price changes and
    /// service charges never touch it.
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Booking list line, joined with guest name and room number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingSummary {
    pub id: i64,
    pub guest_name: String,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: i64,
    pub status: BookingStatus,
}

/// Guest-detail line: one of the guest's bookings with its room number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestBooking {
    pub id: i64,
    pub room_number: String,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub total_price: i64,
    pub status: BookingStatus,
    pub created_at: DateTime<Utc>,
}

/// Input to booking creation. The guest is resolved (or created) by
/// passport inside the same transaction as the booking insert.
#[derive(Debug, Clone)]
pub struct CreateBooking {
    pub room_id: i64,
    pub window: StayWindow,
    pub guest: NewGuest,
}

/// Room cost for a stay, fixed at creation time.
pub fn total_price(window: &StayWindow, price_per_night: i64) -> i64 {
    window.nights() * price_per_night
}
