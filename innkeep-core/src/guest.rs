use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Guest {
    pub id: i64,
    pub full_name: String,
    /// Natural key: one guest record per passport, across all bookings.
    pub passport: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<String>,
}

/// Guest fields supplied with a booking request. When a guest with the same
/// passport already exists, that record is reused as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGuest {
    pub full_name: String,
    pub passport: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

impl NewGuest {
    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(Error::Validation("full_name must not be empty".into()));
        }
        if self.passport.trim().is_empty() {
            return Err(Error::Validation("passport must not be empty".into()));
        }
        Ok(())
    }
}

/// Guest list line: the record plus how many bookings reference it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestWithStays {
    pub id: i64,
    pub full_name: String,
    pub passport: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub preferences: Option<String>,
    pub stays_count: i64,
}
