use async_trait::async_trait;
use innkeep_core::repository::RoomRepository;
use innkeep_core::room::Room;
use innkeep_core::stay::StayWindow;
use innkeep_core::Result;
use sqlx::SqlitePool;

pub struct SqliteRoomRepository {
    pool: SqlitePool,
}

impl SqliteRoomRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

// Raw row with the status still a string; parsing into the closed enum
// happens in the TryFrom so unknown values surface as errors, not panics.
#[derive(sqlx::FromRow)]
pub(crate) struct RoomRow {
    pub id: i64,
    pub number: String,
    pub room_type: String,
    pub price_per_night: i64,
    pub status: String,
    pub floor: i64,
}

impl TryFrom<RoomRow> for Room {
    type Error = innkeep_core::Error;

    fn try_from(row: RoomRow) -> Result<Room> {
        Ok(Room {
            id: row.id,
            number: row.number,
            room_type: row.room_type,
            price_per_night: row.price_per_night,
            status: row.status.parse()?,
            floor: row.floor,
        })
    }
}

pub(crate) const ROOM_COLUMNS: &str = "id, number, room_type, price_per_night, status, floor";

#[async_trait]
impl RoomRepository for SqliteRoomRepository {
    async fn list(&self) -> Result<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomRow>(&format!(
            "SELECT {ROOM_COLUMNS} FROM rooms ORDER BY floor, number"
        ))
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Room::try_from).collect()
    }

    async fn get(&self, id: i64) -> Result<Option<Room>> {
        let row =
            sqlx::query_as::<_, RoomRow>(&format!("SELECT {ROOM_COLUMNS} FROM rooms WHERE id = ?"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(Room::try_from).transpose()
    }

    async fn search_available(
        &self,
        window: StayWindow,
        room_type: Option<&str>,
    ) -> Result<Vec<Room>> {
        // The subquery keeps the legacy boundary-in-window form: an active
        // booking only blocks a room when one of its endpoints falls inside
        // the queried range. The creation guard closes the remaining cases.
        let mut sql = format!(
            "SELECT {ROOM_COLUMNS} FROM rooms \
             WHERE status = 'free' \
             AND id NOT IN ( \
                 SELECT room_id FROM bookings \
                 WHERE status = 'active' \
                 AND ((check_in_date BETWEEN ? AND ?) \
                 OR (check_out_date BETWEEN ? AND ?)) \
             )",
        );
        if room_type.is_some() {
            sql.push_str(" AND room_type = ?");
        }
        sql.push_str(" ORDER BY floor, number");

        let mut query = sqlx::query_as::<_, RoomRow>(&sql)
            .bind(window.check_in)
            .bind(window.check_out)
            .bind(window.check_in)
            .bind(window.check_out);
        if let Some(kind) = room_type {
            query = query.bind(kind.to_owned());
        }

        let rows = query.fetch_all(&self.pool).await?;
        rows.into_iter().map(Room::try_from).collect()
    }
}
