use async_trait::async_trait;
use chrono::NaiveDate;
use innkeep_core::report::{DashboardSummary, UpcomingCheckIn};
use innkeep_core::repository::ReportRepository;
use innkeep_core::Result;
use sqlx::SqlitePool;

pub struct SqliteReportRepository {
    pool: SqlitePool,
}

impl SqliteReportRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UpcomingRow {
    check_in_date: NaiveDate,
    guest_name: String,
    room_number: String,
}

#[async_trait]
impl ReportRepository for SqliteReportRepository {
    async fn dashboard(&self) -> Result<DashboardSummary> {
        let free_rooms: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE status = 'free'")
                .fetch_one(&self.pool)
                .await?;
        let occupied_rooms: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM rooms WHERE status = 'occupied'")
                .fetch_one(&self.pool)
                .await?;
        let active_bookings: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM bookings WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await?;

        let upcoming = sqlx::query_as::<_, UpcomingRow>(
            "SELECT b.check_in_date, g.full_name AS guest_name, r.number AS room_number \
             FROM bookings b \
             JOIN guests g ON b.guest_id = g.id \
             JOIN rooms r ON b.room_id = r.id \
             WHERE b.status = 'active' \
             ORDER BY b.check_in_date \
             LIMIT 5",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(DashboardSummary {
            free_rooms,
            occupied_rooms,
            active_bookings,
            upcoming_checkins: upcoming
                .into_iter()
                .map(|row| UpcomingCheckIn {
                    check_in: row.check_in_date,
                    guest_name: row.guest_name,
                    room_number: row.room_number,
                })
                .collect(),
        })
    }
}
