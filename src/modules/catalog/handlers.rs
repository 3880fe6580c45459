use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::app_state::AppState;
use crate::db::{NewSalonService, SalonService, ServiceRepository};
use crate::error::{AppError, AppResult};

pub async fn list_services(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<SalonService>>> {
    let services = ServiceRepository::list_active(&state.db).await?;
    Ok(Json(services))
}

pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<NewSalonService>,
) -> AppResult<(StatusCode, Json<SalonService>)> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let service = ServiceRepository::insert(&state.db, &payload).await?;
    Ok((StatusCode::CREATED, Json(service)))
}
