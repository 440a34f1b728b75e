mod staff;
mod staff_override;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "shiftboard",
    "m0001",
    vec_box![],
    vec_box![
        staff::CreateTable,
        staff::CreateIdx1,
        staff_override::CreateTable,
        staff_override::CreateIdx1
    ]
);
