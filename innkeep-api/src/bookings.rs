use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use innkeep_core::booking::{Booking, BookingSummary, CreateBooking};
use innkeep_core::guest::NewGuest;
use innkeep_core::repository::BookingRepository;
use innkeep_core::stay::StayWindow;
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateBookingRequest {
    pub room_id: i64,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub full_name: String,
    pub passport: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub preferences: Option<String>,
}

/// POST /create_booking
/// Resolves the guest by passport (creating one on first sight), prices the
/// stay at the room's current rate and reserves the room — all in one
/// transaction.
pub async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<Booking>), AppError> {
    let window = StayWindow::new(req.check_in, req.check_out)?;
    let create = CreateBooking {
        room_id: req.room_id,
        window,
        guest: NewGuest {
            full_name: req.full_name,
            passport: req.passport,
            phone: req.phone,
            email: req.email,
            preferences: req.preferences,
        },
    };

    let booking = state.bookings.create(&create).await?;
    Ok((StatusCode::CREATED, Json(booking)))
}

/// GET /bookings
pub async fn list_bookings(
    State(state): State<AppState>,
) -> Result<Json<Vec<BookingSummary>>, AppError> {
    Ok(Json(state.bookings.list().await?))
}

/// GET /check_in/{booking_id}
pub async fn check_in(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.check_in(booking_id).await?))
}

/// GET /check_out/{booking_id}
pub async fn check_out(
    State(state): State<AppState>,
    Path(booking_id): Path<i64>,
) -> Result<Json<Booking>, AppError> {
    Ok(Json(state.bookings.check_out(booking_id).await?))
}
