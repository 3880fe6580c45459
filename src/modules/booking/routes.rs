use axum::{
    routing::{get, post, put},
    Router,
};

use super::handlers::{
    change_appointment_status, create_appointment, get_appointment,
    list_professional_appointments, reschedule_appointment,
};
use crate::app_state::AppState;

pub fn booking_routes() -> Router<AppState> {
    Router::new()
        .route("/appointments", post(create_appointment))
        .route("/appointments/:id", get(get_appointment))
        .route("/appointments/:id/schedule", put(reschedule_appointment))
        .route("/appointments/:id/status", post(change_appointment_status))
        .route(
            "/professionals/:id/appointments",
            get(list_professional_appointments),
        )
}
