use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpcomingCheckIn {
    pub check_in: NaiveDate,
    pub guest_name: String,
    pub room_number: String,
}

/// Front-desk overview: occupancy counts plus the five soonest check-ins
/// among active bookings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub free_rooms: i64,
    pub occupied_rooms: i64,
    pub active_bookings: i64,
    pub upcoming_checkins: Vec<UpcomingCheckIn>,
}
