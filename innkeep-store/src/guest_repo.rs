use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use innkeep_core::booking::GuestBooking;
use innkeep_core::guest::{Guest, GuestWithStays};
use innkeep_core::repository::GuestRepository;
use innkeep_core::Result;
use sqlx::SqlitePool;

pub struct SqliteGuestRepository {
    pool: SqlitePool,
}

impl SqliteGuestRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct GuestRow {
    id: i64,
    full_name: String,
    passport: String,
    phone: Option<String>,
    email: Option<String>,
    preferences: Option<String>,
}

impl From<GuestRow> for Guest {
    fn from(row: GuestRow) -> Self {
        Guest {
            id: row.id,
            full_name: row.full_name,
            passport: row.passport,
            phone: row.phone,
            email: row.email,
            preferences: row.preferences,
        }
    }
}

#[derive(sqlx::FromRow)]
struct GuestWithStaysRow {
    id: i64,
    full_name: String,
    passport: String,
    phone: Option<String>,
    email: Option<String>,
    preferences: Option<String>,
    stays_count: i64,
}

#[derive(sqlx::FromRow)]
struct GuestBookingRow {
    id: i64,
    room_number: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    total_price: i64,
    status: String,
    created_at: DateTime<Utc>,
}

#[async_trait]
impl GuestRepository for SqliteGuestRepository {
    async fn list_with_stays(&self) -> Result<Vec<GuestWithStays>> {
        // LEFT JOIN so guests with no bookings still appear with a zero count.
        let rows = sqlx::query_as::<_, GuestWithStaysRow>(
            "SELECT g.id, g.full_name, g.passport, g.phone, g.email, g.preferences, \
                    COUNT(b.id) AS stays_count \
             FROM guests g \
             LEFT JOIN bookings b ON g.id = b.guest_id \
             GROUP BY g.id \
             ORDER BY g.id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| GuestWithStays {
                id: row.id,
                full_name: row.full_name,
                passport: row.passport,
                phone: row.phone,
                email: row.email,
                preferences: row.preferences,
                stays_count: row.stays_count,
            })
            .collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Guest>> {
        let row = sqlx::query_as::<_, GuestRow>(
            "SELECT id, full_name, passport, phone, email, preferences \
             FROM guests WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Guest::from))
    }

    async fn bookings_for(&self, guest_id: i64) -> Result<Vec<GuestBooking>> {
        let rows = sqlx::query_as::<_, GuestBookingRow>(
            "SELECT b.id, r.number AS room_number, b.check_in_date, b.check_out_date, \
                    b.total_price, b.status, b.created_at \
             FROM bookings b \
             JOIN rooms r ON b.room_id = r.id \
             WHERE b.guest_id = ? \
             ORDER BY b.check_in_date DESC",
        )
        .bind(guest_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(GuestBooking {
                    id: row.id,
                    room_number: row.room_number,
                    check_in: row.check_in_date,
                    check_out: row.check_out_date,
                    total_price: row.total_price,
                    status: row.status.parse()?,
                    created_at: row.created_at,
                })
            })
            .collect()
    }
}
