use serde::{Deserialize, Serialize};
use sqlx::types::Uuid;
use time::{Duration, OffsetDateTime};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type, Serialize, Deserialize)]
#[sqlx(type_name = "appointment_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

impl AppointmentStatus {
    /// Allowed status transitions. Cancelled and completed are terminal.
    pub fn can_transition_to(self, next: AppointmentStatus) -> bool {
        use AppointmentStatus::*;
        matches!(
            (self, next),
            (Pending, Confirmed)
                | (Pending, Cancelled)
                | (Confirmed, Completed)
                | (Confirmed, Cancelled)
        )
    }
}

/// Who is requesting a status change. Passed explicitly with the
/// request rather than read from any ambient session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingActor {
    Client,
    Staff,
}

#[derive(Debug, Clone, sqlx::FromRow, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub client_id: Uuid,
    pub service_id: Uuid,
    pub start_time: OffsetDateTime,
    // Snapshotted from the service's approximate duration at booking
    // time; later catalog edits do not move existing appointments.
    pub duration_minutes: i64,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

impl Appointment {
    pub fn end_time(&self) -> OffsetDateTime {
        self.start_time + Duration::minutes(self.duration_minutes)
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct NewAppointment {
    pub professional_id: Uuid,
    pub client_id: Uuid,
    pub service_id: Uuid,
    pub start_time: OffsetDateTime,
    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RescheduleAppointment {
    pub start_time: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct AppointmentStatusChange {
    pub status: AppointmentStatus,
    pub actor: BookingActor,
}
