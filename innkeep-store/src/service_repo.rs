use async_trait::async_trait;
use innkeep_core::repository::ServiceRepository;
use innkeep_core::service::{NewService, Service};
use innkeep_core::{Error, Result};
use sqlx::SqlitePool;
use tracing::info;

pub struct SqliteServiceRepository {
    pool: SqlitePool,
}

impl SqliteServiceRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ServiceRepository for SqliteServiceRepository {
    async fn add(&self, req: &NewService) -> Result<Service> {
        if req.service_name.trim().is_empty() {
            return Err(Error::Validation("service_name must not be empty".into()));
        }
        let quantity = req.quantity.unwrap_or(1);
        if quantity < 1 {
            return Err(Error::Validation(format!(
                "quantity must be at least 1, got {quantity}"
            )));
        }

        let mut tx = self.pool.begin().await?;

        let booking: Option<i64> = sqlx::query_scalar("SELECT id FROM bookings WHERE id = ?")
            .bind(req.booking_id)
            .fetch_optional(&mut *tx)
            .await?;
        if booking.is_none() {
            return Err(Error::NotFound(format!(
                "booking {} not found",
                req.booking_id
            )));
        }

        let res = sqlx::query(
            "INSERT INTO services (booking_id, service_name, price, quantity) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(req.booking_id)
        .bind(&req.service_name)
        .bind(req.price)
        .bind(quantity)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        info!(
            booking_id = req.booking_id,
            service = %req.service_name,
            "service added"
        );

        Ok(Service {
            id: res.last_insert_rowid(),
            booking_id: req.booking_id,
            service_name: req.service_name.clone(),
            price: req.price,
            quantity,
        })
    }
}
