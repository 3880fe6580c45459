use axum::{middleware, routing::get, Json, Router};
use serde_json::json;

use crate::{
    app_state::AppState, middleware::tracing::observability_middleware,
    modules::booking::routes::booking_routes, modules::catalog::routes::catalog_routes,
};

pub fn create_router(state: AppState) -> Router {
    let api = booking_routes().merge(catalog_routes());

    let media_dir = state.env.app.media_dir.to_string();

    Router::new()
        .route("/", get(hello))
        .route("/health", get(health_check))
        .nest("/api", api)
        .nest_service(
            "/media",
            tower_http::services::ServeDir::new(media_dir),
        )
        .layer(middleware::from_fn(observability_middleware))
        .with_state(state)
}

async fn hello() -> &'static str {
    "Salon backend says hello!\n"
}

async fn health_check(
    axum::extract::State(state): axum::extract::State<AppState>,
) -> Json<serde_json::Value> {
    let db_result = sqlx::query("SELECT 1").execute(&state.db).await;

    let db_status = match db_result {
        Ok(_) => "healthy",
        Err(e) => {
            tracing::info!("Database health check failed: {}", e);
            "unhealthy"
        }
    };

    Json(json!({
        "status": "ok",
        "timestamp": time::OffsetDateTime::now_utc().to_string(),
        "version": env!("CARGO_PKG_VERSION"),
        "services": {
            "database": db_status,
        }
    }))
}
