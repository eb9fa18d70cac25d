use axum::{
    extract::{Path, State},
    Json,
};
use innkeep_core::booking::GuestBooking;
use innkeep_core::guest::{Guest, GuestWithStays};
use innkeep_core::repository::GuestRepository;
use innkeep_core::Error;
use serde::Serialize;

use crate::error::AppError;
use crate::state::AppState;

/// GET /guests
pub async fn list_guests(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuestWithStays>>, AppError> {
    Ok(Json(state.guests.list_with_stays().await?))
}

#[derive(Debug, Serialize)]
pub struct GuestDetailResponse {
    pub guest: Guest,
    pub bookings: Vec<GuestBooking>,
}

/// GET /guest/{id}
pub async fn guest_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<GuestDetailResponse>, AppError> {
    let guest = state
        .guests
        .get(id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("guest {id} not found")))?;
    let bookings = state.guests.bookings_for(id).await?;

    Ok(Json(GuestDetailResponse { guest, bookings }))
}
