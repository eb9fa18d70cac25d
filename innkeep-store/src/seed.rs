use innkeep_core::Result;
use sqlx::SqlitePool;
use tracing::info;

/// Demo inventory: five rooms across three floors and one guest on record.
/// Runs after migrations; a non-empty rooms table makes it a no-op.
pub async fn seed(pool: &SqlitePool) -> Result<()> {
    let existing: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
        .fetch_one(pool)
        .await?;
    if existing > 0 {
        return Ok(());
    }

    let rooms: [(&str, &str, i64, i64); 5] = [
        ("101", "standard", 2500, 1),
        ("102", "standard", 2500, 1),
        ("201", "luxury", 5000, 2),
        ("202", "luxury", 5000, 2),
        ("301", "suite", 7500, 3),
    ];

    let mut tx = pool.begin().await?;
    for (number, room_type, price_per_night, floor) in rooms {
        sqlx::query(
            "INSERT INTO rooms (number, room_type, price_per_night, status, floor) \
             VALUES (?, ?, ?, 'free', ?)",
        )
        .bind(number)
        .bind(room_type)
        .bind(price_per_night)
        .bind(floor)
        .execute(&mut *tx)
        .await?;
    }

    sqlx::query("INSERT INTO guests (full_name, passport, phone, email) VALUES (?, ?, ?, ?)")
        .bind("Ivan Ivanov")
        .bind("4510123456")
        .bind("+79161234567")
        .bind("ivanov@mail.ru")
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    info!("Seeded 5 rooms and 1 guest");
    Ok(())
}
