use std::path::PathBuf;

use shiftboard::config::{
    AuthConfig, Config, DatabaseConfig, ObservabilityConfig, ServerConfig,
};
use shiftboard::routes::AppState;
use sqlx_migrator::{Migrate, Plan};

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "roster-test-password";
pub const SESSION_SECRET: &str = "test_secret_key_minimum_32_characters_long";

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_owned(),
            port: 3000,
        },
        database: DatabaseConfig {
            url: "sqlite::memory:".to_owned(),
            max_connections: 2,
        },
        auth: AuthConfig {
            username: ADMIN_USERNAME.to_owned(),
            password: ADMIN_PASSWORD.to_owned(),
            session_secret: SESSION_SECRET.to_owned(),
            session_hours: 1,
        },
        observability: ObservabilityConfig::default(),
    }
}

pub async fn setup_state(path: PathBuf) -> anyhow::Result<AppState> {
    let url = format!("sqlite:{}", path.to_str().unwrap());
    let pool = shiftboard::db::create_pool(&url, 2).await?;

    let mut conn = pool.acquire().await?;
    shiftboard_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(AppState {
        config: test_config(),
        staff_command: shiftboard_staff::Command(pool.clone()),
        staff_query: shiftboard_staff::Query(pool.clone()),
        pool,
    })
}

#[allow(dead_code)]
pub fn session_cookie() -> String {
    let token = shiftboard::auth::issue_session(SESSION_SECRET, ADMIN_USERNAME, 1)
        .expect("test session token");

    format!("{}={}", shiftboard::auth::SESSION_COOKIE, token)
}

#[allow(dead_code)]
pub fn five_two_input(name: &str) -> shiftboard_staff::CreateStaffInput {
    shiftboard_staff::CreateStaffInput {
        name: name.to_owned(),
        role: "Operator".to_owned(),
        status: shiftboard_staff::StaffStatus::Permanent,
        shift_type: shiftboard_staff::ShiftType::Normal,
        cycle_start: "2024-01-01".to_owned(),
        pattern_on: 5,
        pattern_off: 2,
        display_order: 0,
    }
}
