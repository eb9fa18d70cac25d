use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use innkeep_core::booking::{self, Booking, BookingStatus, BookingSummary, CreateBooking};
use innkeep_core::repository::BookingRepository;
use innkeep_core::room::{Room, RoomStatus};
use innkeep_core::stay::StayWindow;
use innkeep_core::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

use crate::room_repo::{RoomRow, ROOM_COLUMNS};

pub struct SqliteBookingRepository {
    pool: SqlitePool,
}

impl SqliteBookingRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct BookingRow {
    id: i64,
    guest_id: i64,
    room_id: i64,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    total_price: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<BookingRow> for Booking {
    type Error = Error;

    fn try_from(row: BookingRow) -> Result<Booking> {
        Ok(Booking {
            id: row.id,
            guest_id: row.guest_id,
            room_id: row.room_id,
            check_in: row.check_in_date,
            check_out: row.check_out_date,
            total_price: row.total_price,
            status: row.status.parse()?,
            created_at: row.created_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct BookingSummaryRow {
    id: i64,
    guest_name: String,
    room_number: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    total_price: i64,
    status: String,
}

#[derive(sqlx::FromRow)]
struct WindowRow {
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
}

const BOOKING_COLUMNS: &str =
    "id, guest_id, room_id, check_in_date, check_out_date, total_price, status, created_at";

#[async_trait]
impl BookingRepository for SqliteBookingRepository {
    async fn create(&self, req: &CreateBooking) -> Result<Booking> {
        req.guest.validate()?;
        let window = req.window;

        let mut tx = self.pool.begin().await?;

        // Room must exist and be free.
        let room_row =
            sqlx::query_as::<_, RoomRow>(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?"))
                .bind(req.room_id)
                .fetch_optional(&mut *tx)
                .await?;
        let room: Room = match room_row {
            Some(row) => row.try_into()?,
            None => return Err(Error::NotFound(format!("room {} not found", req.room_id))),
        };
        if room.status != RoomStatus::Free {
            return Err(Error::Conflict(format!(
                "room {} is {}",
                room.number, room.status
            )));
        }

        // Availability re-check inside the same transaction, with the full
        // interval-overlap test, against any booking still holding the room.
        let held = sqlx::query_as::<_, WindowRow>(
            "SELECT check_in_date, check_out_date FROM bookings \
             WHERE room_id = ? AND status IN ('active', 'checked_in')",
        )
        .bind(req.room_id)
        .fetch_all(&mut *tx)
        .await?;
        for existing in &held {
            let other = StayWindow {
                check_in: existing.check_in_date,
                check_out: existing.check_out_date,
            };
            if window.overlaps(&other) {
                return Err(Error::Conflict(format!(
                    "room {} is already booked from {} to {}",
                    room.number, other.check_in, other.check_out
                )));
            }
        }

        // Resolve the guest by passport, creating one on first sight.
        let guest_id: Option<i64> = sqlx::query_scalar("SELECT id FROM guests WHERE passport = ?")
            .bind(&req.guest.passport)
            .fetch_optional(&mut *tx)
            .await?;
        let guest_id = match guest_id {
            Some(id) => id,
            None => {
                let res = sqlx::query(
                    "INSERT INTO guests (full_name, passport, phone, email, preferences) \
                     VALUES (?, ?, ?, ?, ?)",
                )
                .bind(&req.guest.full_name)
                .bind(&req.guest.passport)
                .bind(&req.guest.phone)
                .bind(&req.guest.email)
                .bind(&req.guest.preferences)
                .execute(&mut *tx)
                .await?;
                res.last_insert_rowid()
            }
        };

        let total_price = booking::total_price(&window, room.price_per_night);
        let created_at = Utc::now();

        let res = sqlx::query(
            "INSERT INTO bookings \
             (guest_id, room_id, check_in_date, check_out_date, total_price, status, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(guest_id)
        .bind(req.room_id)
        .bind(window.check_in)
        .bind(window.check_out)
        .bind(total_price)
        .bind(BookingStatus::Active.as_str())
        .bind(created_at)
        .execute(&mut *tx)
        .await?;
        let booking_id = res.last_insert_rowid();

        sqlx::query("UPDATE rooms SET status = ? WHERE id = ?")
            .bind(RoomStatus::Booked.as_str())
            .bind(req.room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!(
            booking_id,
            room = %room.number,
            nights = window.nights(),
            total_price,
            "booking created"
        );

        Ok(Booking {
            id: booking_id,
            guest_id,
            room_id: req.room_id,
            check_in: window.check_in,
            check_out: window.check_out,
            total_price,
            status: BookingStatus::Active,
            created_at,
        })
    }

    async fn list(&self) -> Result<Vec<BookingSummary>> {
        let rows = sqlx::query_as::<_, BookingSummaryRow>(
            "SELECT b.id, g.full_name AS guest_name, r.number AS room_number, \
                    b.check_in_date, b.check_out_date, b.total_price, b.status \
             FROM bookings b \
             JOIN guests g ON b.guest_id = g.id \
             JOIN rooms r ON b.room_id = r.id \
             ORDER BY b.created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(BookingSummary {
                    id: row.id,
                    guest_name: row.guest_name,
                    room_number: row.room_number,
                    check_in: row.check_in_date,
                    check_out: row.check_out_date,
                    total_price: row.total_price,
                    status: row.status.parse()?,
                })
            })
            .collect()
    }

    async fn check_in(&self, booking_id: i64) -> Result<Booking> {
        self.transition(booking_id, BookingStatus::CheckedIn, RoomStatus::Occupied)
            .await
    }

    async fn check_out(&self, booking_id: i64) -> Result<Booking> {
        self.transition(booking_id, BookingStatus::Completed, RoomStatus::Free)
            .await
    }
}

impl SqliteBookingRepository {
    /// Advance a booking and its room in one transaction. The lifecycle only
    /// moves forward; anything else is rejected as a state error.
    async fn transition(
        &self,
        booking_id: i64,
        to: BookingStatus,
        room_status: RoomStatus,
    ) -> Result<Booking> {
        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, BookingRow>(&format!(
            "SELECT {BOOKING_COLUMNS} FROM bookings WHERE id = ?"
        ))
        .bind(booking_id)
        .fetch_optional(&mut *tx)
        .await?;
        let mut current: Booking = match row {
            Some(row) => row.try_into()?,
            None => return Err(Error::NotFound(format!("booking {booking_id} not found"))),
        };

        let allowed = match to {
            BookingStatus::CheckedIn => current.status.can_check_in(),
            BookingStatus::Completed => current.status.can_check_out(),
            BookingStatus::Active => false,
        };
        if !allowed {
            return Err(Error::Validation(format!(
                "booking {booking_id} is {}, cannot move to {to}",
                current.status
            )));
        }

        sqlx::query("UPDATE bookings SET status = ? WHERE id = ?")
            .bind(to.as_str())
            .bind(booking_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("UPDATE rooms SET status = ? WHERE id = ?")
            .bind(room_status.as_str())
            .bind(current.room_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        info!(booking_id, status = %to, "booking transitioned");

        current.status = to;
        Ok(current)
    }
}
