use serde::{Deserialize, Serialize};

/// A priced ancillary charge attached to a booking. Append-only; never
/// rolled up into the booking's total price.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: i64,
    pub booking_id: i64,
    pub service_name: String,
    pub price: i64,
    pub quantity: i64,
}

#[derive(Debug, Clone)]
pub struct NewService {
    pub booking_id: i64,
    pub service_name: String,
    pub price: i64,
    /// Defaults to 1 when omitted.
    pub quantity: Option<i64>,
}
