use axum::{
    Router,
    response::IntoResponse,
    routing::{get, post},
};
use sqlx::SqlitePool;

use crate::template::{NotFoundTemplate, Template};

mod health;
mod login;
mod roster;
mod staff;

#[derive(Clone)]
pub struct AppState {
    pub config: crate::config::Config,
    pub staff_command: shiftboard_staff::Command,
    pub staff_query: shiftboard_staff::Query,
    pub pool: SqlitePool,
}

pub async fn fallback(template: Template) -> impl IntoResponse {
    template.render(NotFoundTemplate)
}

pub fn router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/", get(roster::index))
        .route("/roster", get(roster::page))
        .route("/roster/quick-cycle/{id}/{date}", post(roster::quick_cycle))
        .route(
            "/roster/override/{id}/{date}",
            get(roster::override_page).post(roster::override_action),
        )
        .route(
            "/roster/override/{id}/{date}/clear",
            post(roster::override_clear),
        )
        .route("/staff", get(staff::page))
        .route("/staff/create", get(staff::create_page).post(staff::create_action))
        .route(
            "/staff/edit/{id}",
            get(staff::edit_page).post(staff::edit_action),
        )
        .route("/staff/delete/{id}", post(staff::delete_action))
        .route("/login", get(login::page).post(login::action))
        .route("/logout", get(login::logout))
        .fallback(fallback)
        .with_state(app_state)
}
