use std::{path::PathBuf, str::FromStr};

use shiftboard_staff::{CreateStaffInput, ShiftType, StaffStatus};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub async fn setup_pool(path: PathBuf) -> anyhow::Result<SqlitePool> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_str().unwrap()))?
        .create_if_missing(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    shiftboard_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(pool)
}

#[allow(dead_code)]
pub fn five_two_input(name: impl Into<String>) -> CreateStaffInput {
    CreateStaffInput {
        name: name.into(),
        role: "Operator".to_owned(),
        status: StaffStatus::Permanent,
        shift_type: ShiftType::Normal,
        cycle_start: "2024-01-01".to_owned(),
        pattern_on: 5,
        pattern_off: 2,
        display_order: 0,
    }
}
