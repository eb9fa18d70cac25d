use axum::{extract::State, Json};
use innkeep_core::report::DashboardSummary;
use innkeep_core::repository::ReportRepository;

use crate::error::AppError;
use crate::state::AppState;

/// GET /
/// Front-desk overview: occupancy counts plus the soonest check-ins.
pub async fn index(State(state): State<AppState>) -> Result<Json<DashboardSummary>, AppError> {
    Ok(Json(state.reports.dashboard().await?))
}
