use sqlx::types::Uuid;
use sqlx::PgPool;
use time::OffsetDateTime;

use crate::db::error::DatabaseError;
use crate::db::models::{Appointment, AppointmentStatus, NewAppointment};

const APPOINTMENT_COLUMNS: &str = "id, professional_id, client_id, service_id, start_time, \
     duration_minutes, status, notes, created_at, updated_at";

pub struct AppointmentRepository;

impl AppointmentRepository {
    /// All of a professional's appointments starting in `[from, to)`,
    /// regardless of status. The slot validator does its own status
    /// and date filtering over this snapshot.
    pub async fn list_for_professional(
        pool: &PgPool,
        professional_id: Uuid,
        from: OffsetDateTime,
        to: OffsetDateTime,
    ) -> Result<Vec<Appointment>, DatabaseError> {
        let appointments = sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS}
             FROM appointments
             WHERE professional_id = $1 AND start_time >= $2 AND start_time < $3
             ORDER BY start_time"
        ))
        .bind(professional_id)
        .bind(from)
        .bind(to)
        .fetch_all(pool)
        .await?;

        Ok(appointments)
    }

    pub async fn get(pool: &PgPool, id: Uuid) -> Result<Appointment, DatabaseError> {
        sqlx::query_as::<_, Appointment>(&format!(
            "SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn insert(
        pool: &PgPool,
        new_appointment: &NewAppointment,
        duration_minutes: i64,
    ) -> Result<Appointment, DatabaseError> {
        let appointment = sqlx::query_as::<_, Appointment>(&format!(
            "INSERT INTO appointments
                 (professional_id, client_id, service_id, start_time, duration_minutes, status, notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(new_appointment.professional_id)
        .bind(new_appointment.client_id)
        .bind(new_appointment.service_id)
        .bind(new_appointment.start_time)
        .bind(duration_minutes)
        .bind(AppointmentStatus::Pending)
        .bind(new_appointment.notes.as_deref())
        .fetch_one(pool)
        .await?;

        Ok(appointment)
    }

    pub async fn update_start_time(
        pool: &PgPool,
        id: Uuid,
        start_time: OffsetDateTime,
    ) -> Result<Appointment, DatabaseError> {
        sqlx::query_as::<_, Appointment>(&format!(
            "UPDATE appointments
             SET start_time = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(start_time)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }

    pub async fn update_status(
        pool: &PgPool,
        id: Uuid,
        status: AppointmentStatus,
    ) -> Result<Appointment, DatabaseError> {
        sqlx::query_as::<_, Appointment>(&format!(
            "UPDATE appointments
             SET status = $1, updated_at = NOW()
             WHERE id = $2
             RETURNING {APPOINTMENT_COLUMNS}"
        ))
        .bind(status)
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or(DatabaseError::NotFound)
    }
}
