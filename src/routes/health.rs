use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::routes::AppState;

pub async fn health() -> &'static str {
    "OK"
}

pub async fn ready(State(app): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(&app.pool).await {
        Ok(_) => (StatusCode::OK, "ready").into_response(),
        Err(err) => {
            tracing::error!("{err}");

            (StatusCode::SERVICE_UNAVAILABLE, "database unavailable").into_response()
        }
    }
}
