use sqlx::types::Uuid;
use time::{Date, Duration, OffsetDateTime, UtcOffset};
use tracing::info;

use crate::app_state::AppState;
use crate::db::{
    Appointment, AppointmentRepository, AppointmentStatus, AppointmentStatusChange, BookingActor,
    NewAppointment, RescheduleAppointment, ServiceRepository,
};
use crate::error::{AppError, AppResult};
use crate::schedule::{evaluate_slot, parse_service_duration, CandidateSlot};

/// Book a new appointment. The service's free-form duration is
/// snapshotted into minutes here, and the slot check plus the insert
/// run under the professional's lock so no concurrent booking can
/// slip into the same slot.
pub async fn book_appointment(
    state: &AppState,
    new_appointment: NewAppointment,
) -> AppResult<Appointment> {
    let service = ServiceRepository::get(&state.db, new_appointment.service_id).await?;
    let duration_minutes = parse_service_duration(&service.approximate_duration).total_minutes();

    // The parser is permissive; "0" or "0:0" legitimately parse to
    // zero minutes, which the validator treats as a contract breach.
    if duration_minutes <= 0 {
        return Err(AppError::Validation(format!(
            "service {} has a zero-length duration ({:?})",
            service.id, service.approximate_duration
        )));
    }

    let candidate = CandidateSlot {
        professional_id: new_appointment.professional_id,
        start_time: new_appointment.start_time,
        duration_minutes,
    };

    let _guard = state.locks.acquire(new_appointment.professional_id).await;
    ensure_slot_free(state, &candidate, None).await?;

    let appointment =
        AppointmentRepository::insert(&state.db, &new_appointment, duration_minutes).await?;
    info!(
        appointment_id = %appointment.id,
        professional_id = %appointment.professional_id,
        start_time = %appointment.start_time,
        "appointment booked"
    );
    Ok(appointment)
}

/// Move an existing appointment to a new start time. The appointment
/// keeps its snapshotted duration, and its own id is excluded from
/// the conflict set so it cannot collide with itself.
pub async fn reschedule_appointment(
    state: &AppState,
    id: Uuid,
    reschedule: RescheduleAppointment,
) -> AppResult<Appointment> {
    let appointment = AppointmentRepository::get(&state.db, id).await?;

    if matches!(
        appointment.status,
        AppointmentStatus::Cancelled | AppointmentStatus::Completed
    ) {
        return Err(AppError::BadRequest(format!(
            "cannot reschedule a {:?} appointment",
            appointment.status
        )));
    }

    let candidate = CandidateSlot {
        professional_id: appointment.professional_id,
        start_time: reschedule.start_time,
        duration_minutes: appointment.duration_minutes,
    };

    let _guard = state.locks.acquire(appointment.professional_id).await;
    ensure_slot_free(state, &candidate, Some(appointment.id)).await?;

    let updated =
        AppointmentRepository::update_start_time(&state.db, id, reschedule.start_time).await?;
    info!(
        appointment_id = %updated.id,
        start_time = %updated.start_time,
        "appointment rescheduled"
    );
    Ok(updated)
}

/// Apply a status transition. Staff may confirm, cancel or complete;
/// clients may only cancel, and only while the appointment is further
/// away than the configured lead time.
pub async fn change_appointment_status(
    state: &AppState,
    id: Uuid,
    change: AppointmentStatusChange,
) -> AppResult<Appointment> {
    let appointment = AppointmentRepository::get(&state.db, id).await?;

    if change.actor == BookingActor::Client {
        if change.status != AppointmentStatus::Cancelled {
            return Err(AppError::Forbidden(
                "clients may only cancel appointments".to_string(),
            ));
        }
        let lead = Duration::minutes(state.env.booking.cancel_lead_minutes);
        if !cancellation_window_open(OffsetDateTime::now_utc(), appointment.start_time, lead) {
            return Err(AppError::Forbidden(format!(
                "cancellation closes {} minutes before the appointment",
                state.env.booking.cancel_lead_minutes
            )));
        }
    }

    if !appointment.status.can_transition_to(change.status) {
        return Err(AppError::BadRequest(format!(
            "cannot change appointment status from {:?} to {:?}",
            appointment.status, change.status
        )));
    }

    let updated = AppointmentRepository::update_status(&state.db, id, change.status).await?;
    info!(
        appointment_id = %updated.id,
        status = ?updated.status,
        actor = ?change.actor,
        "appointment status changed"
    );
    Ok(updated)
}

/// Snapshot the professional's salon-local day and run the slot
/// validator over it. Must be called with the professional's lock held.
async fn ensure_slot_free(
    state: &AppState,
    candidate: &CandidateSlot,
    exclude: Option<Uuid>,
) -> AppResult<()> {
    let offset = state.env.booking.salon_utc_offset;
    let (day_start, day_end) = salon_day_bounds(candidate.start_time, offset);

    let existing = AppointmentRepository::list_for_professional(
        &state.db,
        candidate.professional_id,
        day_start,
        day_end,
    )
    .await?;

    let decision = evaluate_slot(candidate, &existing, exclude, offset);
    if decision.is_bookable() {
        Ok(())
    } else {
        Err(AppError::SlotConflict {
            conflicts: decision.conflicts,
        })
    }
}

/// `[midnight, midnight + 24h)` around `at` in salon-local time,
/// expressed as absolute timestamps for the repository query.
pub fn salon_day_bounds(
    at: OffsetDateTime,
    offset: UtcOffset,
) -> (OffsetDateTime, OffsetDateTime) {
    let local_date: Date = at.to_offset(offset).date();
    let day_start = local_date.midnight().assume_offset(offset);
    (day_start, day_start + Duration::days(1))
}

fn cancellation_window_open(
    now: OffsetDateTime,
    appointment_start: OffsetDateTime,
    lead: Duration,
) -> bool {
    now + lead <= appointment_start
}
