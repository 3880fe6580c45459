use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::OffsetDateTime;
use validator::Validate;

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct SalonService {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Free-form operator text ("2:30", "90", "2 horas e 30 minutos").
    /// Interpreted by `schedule::parse_service_duration` at booking time.
    pub approximate_duration: String,
    pub price_cents: i64,
    pub active: bool,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewSalonService {
    #[validate(length(min = 1))]
    pub name: String,
    pub description: Option<String>,
    pub approximate_duration: String,
    #[validate(range(min = 0))]
    pub price_cents: i64,
}
