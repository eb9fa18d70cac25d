use std::sync::Arc;

use innkeep_core::repository::{
    BookingRepository, GuestRepository, ReportRepository, RoomRepository, ServiceRepository,
};
use innkeep_store::{
    DbClient, SqliteBookingRepository, SqliteGuestRepository, SqliteReportRepository,
    SqliteRoomRepository, SqliteServiceRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub rooms: Arc<dyn RoomRepository>,
    pub guests: Arc<dyn GuestRepository>,
    pub bookings: Arc<dyn BookingRepository>,
    pub services: Arc<dyn ServiceRepository>,
    pub reports: Arc<dyn ReportRepository>,
}

impl AppState {
    pub fn new(db: &DbClient) -> Self {
        Self {
            rooms: Arc::new(SqliteRoomRepository::new(db.pool.clone())),
            guests: Arc::new(SqliteGuestRepository::new(db.pool.clone())),
            bookings: Arc::new(SqliteBookingRepository::new(db.pool.clone())),
            services: Arc::new(SqliteServiceRepository::new(db.pool.clone())),
            reports: Arc::new(SqliteReportRepository::new(db.pool.clone())),
        }
    }
}
