use async_trait::async_trait;

use crate::booking::{Booking, BookingSummary, CreateBooking, GuestBooking};
use crate::guest::{Guest, GuestWithStays};
use crate::report::DashboardSummary;
use crate::room::Room;
use crate::service::{NewService, Service};
use crate::stay::StayWindow;
use crate::Result;

/// Room inventory access.
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// All rooms, ordered by floor then number.
    async fn list(&self) -> Result<Vec<Room>>;

    async fn get(&self, id: i64) -> Result<Option<Room>>;

    /// Free rooms not held by an active booking in the window, optionally
    /// narrowed to an exact room type.
    async fn search_available(
        &self,
        window: StayWindow,
        room_type: Option<&str>,
    ) -> Result<Vec<Room>>;
}

/// Guest directory access.
#[async_trait]
pub trait GuestRepository: Send + Sync {
    async fn list_with_stays(&self) -> Result<Vec<GuestWithStays>>;

    async fn get(&self, id: i64) -> Result<Option<Guest>>;

    /// The guest's bookings, newest check-in first.
    async fn bookings_for(&self, guest_id: i64) -> Result<Vec<GuestBooking>>;
}

/// Booking lifecycle operations. Each multi-statement operation runs in a
/// single transaction.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, req: &CreateBooking) -> Result<Booking>;

    /// All bookings joined with guest and room, newest first.
    async fn list(&self) -> Result<Vec<BookingSummary>>;

    async fn check_in(&self, booking_id: i64) -> Result<Booking>;

    async fn check_out(&self, booking_id: i64) -> Result<Booking>;
}

/// Ancillary service ledger.
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    async fn add(&self, req: &NewService) -> Result<Service>;
}

/// Read-only dashboard aggregation.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn dashboard(&self) -> Result<DashboardSummary>;
}
