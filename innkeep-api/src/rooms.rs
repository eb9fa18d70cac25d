use axum::{extract::State, Json};
use chrono::NaiveDate;
use innkeep_core::repository::RoomRepository;
use innkeep_core::room::Room;
use innkeep_core::stay::StayWindow;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRoomsRequest {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    #[serde(default)]
    pub room_type: Option<String>,
}

/// POST /search_rooms
pub async fn search_rooms(
    State(state): State<AppState>,
    Json(req): Json<SearchRoomsRequest>,
) -> Result<Json<Vec<Room>>, AppError> {
    let window = StayWindow::new(req.check_in, req.check_out)?;
    // An empty type string means "any type", same as omitting the field.
    let room_type = req.room_type.as_deref().filter(|t| !t.is_empty());

    Ok(Json(state.rooms.search_available(window, room_type).await?))
}

#[derive(Debug, Serialize)]
pub struct FloorRooms {
    pub floor: i64,
    pub rooms: Vec<Room>,
}

/// GET /rooms
/// Rooms grouped by floor for the floor-plan view.
pub async fn list_rooms(State(state): State<AppState>) -> Result<Json<Vec<FloorRooms>>, AppError> {
    let rooms = state.rooms.list().await?;

    // Rows arrive ordered by floor, so grouping is a single pass.
    let mut floors: Vec<FloorRooms> = Vec::new();
    for room in rooms {
        match floors.last_mut() {
            Some(group) if group.floor == room.floor => group.rooms.push(room),
            _ => floors.push(FloorRooms {
                floor: room.floor,
                rooms: vec![room],
            }),
        }
    }

    Ok(Json(floors))
}
