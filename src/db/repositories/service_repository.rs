use sqlx::types::Uuid;
use sqlx::PgPool;

use crate::db::error::DatabaseError;
use crate::db::models::{NewSalonService, SalonService};

const SERVICE_COLUMNS: &str =
    "id, name, description, approximate_duration, price_cents, active, created_at, updated_at";

pub struct ServiceRepository;

impl ServiceRepository {
    pub async fn get(pool: &PgPool, id: Uuid) -> Result<SalonService, DatabaseError> {
        sqlx::query_as::<_, SalonService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM salon_services WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn list_active(pool: &PgPool) -> Result<Vec<SalonService>, DatabaseError> {
        let services = sqlx::query_as::<_, SalonService>(&format!(
            "SELECT {SERVICE_COLUMNS} FROM salon_services WHERE active ORDER BY name"
        ))
        .fetch_all(pool)
        .await?;

        Ok(services)
    }

    pub async fn insert(
        pool: &PgPool,
        new_service: &NewSalonService,
    ) -> Result<SalonService, DatabaseError> {
        let service = sqlx::query_as::<_, SalonService>(&format!(
            "INSERT INTO salon_services (name, description, approximate_duration, price_cents)
             VALUES ($1, $2, $3, $4)
             RETURNING {SERVICE_COLUMNS}"
        ))
        .bind(&new_service.name)
        .bind(new_service.description.as_deref())
        .bind(&new_service.approximate_duration)
        .bind(new_service.price_cents)
        .fetch_one(pool)
        .await?;

        Ok(service)
    }
}
