use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use sqlx::types::Uuid;
use time::macros::format_description;
use time::Date;
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{
    Appointment, AppointmentRepository, AppointmentStatusChange, NewAppointment,
    RescheduleAppointment,
};
use crate::error::{AppError, AppResult};
use crate::modules::booking::workflow;

pub async fn create_appointment(
    State(state): State<AppState>,
    Json(payload): Json<NewAppointment>,
) -> AppResult<(StatusCode, Json<Appointment>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = workflow::book_appointment(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(appointment)))
}

pub async fn get_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Appointment>> {
    let appointment = AppointmentRepository::get(&state.db, id).await?;
    Ok(Json(appointment))
}

pub async fn reschedule_appointment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RescheduleAppointment>,
) -> AppResult<Json<Appointment>> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = workflow::reschedule_appointment(&state, id, payload).await?;
    Ok(Json(appointment))
}

pub async fn change_appointment_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AppointmentStatusChange>,
) -> AppResult<Json<Appointment>> {
    let appointment = workflow::change_appointment_status(&state, id, payload).await?;
    Ok(Json(appointment))
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    /// Calendar date in salon-local time, `YYYY-MM-DD`.
    pub date: String,
}

pub async fn list_professional_appointments(
    State(state): State<AppState>,
    Path(professional_id): Path<Uuid>,
    Query(query): Query<DayQuery>,
) -> AppResult<Json<Vec<Appointment>>> {
    let format = format_description!("[year]-[month]-[day]");
    let date = Date::parse(&query.date, &format)
        .map_err(|_| AppError::BadRequest(format!("invalid date: {}", query.date)))?;

    let offset = state.env.booking.salon_utc_offset;
    let day_start = date.midnight().assume_offset(offset);
    let day_end = day_start + time::Duration::days(1);

    let appointments =
        AppointmentRepository::list_for_professional(&state.db, professional_id, day_start, day_end)
            .await?;
    Ok(Json(appointments))
}
