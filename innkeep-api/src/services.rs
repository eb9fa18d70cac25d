use axum::{extract::State, http::StatusCode, Json};
use innkeep_core::repository::ServiceRepository;
use innkeep_core::service::{NewService, Service};
use serde::Deserialize;

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddServiceRequest {
    pub booking_id: i64,
    pub service_name: String,
    pub price: i64,
    #[serde(default)]
    pub quantity: Option<i64>,
}

/// POST /add_service
/// Appends a priced line item to the booking's service ledger. The booking
/// total is deliberately left untouched.
pub async fn add_service(
    State(state): State<AppState>,
    Json(req): Json<AddServiceRequest>,
) -> Result<(StatusCode, Json<Service>), AppError> {
    let service = state
        .services
        .add(&NewService {
            booking_id: req.booking_id,
            service_name: req.service_name,
            price: req.price,
            quantity: req.quantity,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(service)))
}
