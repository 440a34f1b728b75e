use sea_query::{OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::StaffOverride;

use crate::ShiftType;

pub struct SetOverrideInput {
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_day_off: bool,
    pub shift_type: Option<ShiftType>,
}

impl super::Command {
    /// Writes or replaces the single override for (staff, date).
    pub async fn set_override(
        &self,
        staff_id: impl Into<String>,
        input: SetOverrideInput,
    ) -> shiftboard_shared::Result<()> {
        let staff_id = staff_id.into();

        let date = shiftboard_shared::parse_date(&input.date)?;

        match (&input.start_time, &input.end_time) {
            (Some(start), Some(end)) => {
                shiftboard_shared::parse_hhmm(start)?;
                shiftboard_shared::parse_hhmm(end)?;
            }
            (None, None) => {}
            _ => shiftboard_shared::bail!("start and end times must be provided together"),
        }

        self.staff_required(&staff_id).await?;

        let statement = sea_query::Query::insert()
            .into_table(StaffOverride::Table)
            .columns([
                StaffOverride::StaffId,
                StaffOverride::Date,
                StaffOverride::StartTime,
                StaffOverride::EndTime,
                StaffOverride::IsDayOff,
                StaffOverride::ShiftType,
            ])
            .values_panic([
                staff_id.into(),
                shiftboard_shared::format_date(date).into(),
                input.start_time.into(),
                input.end_time.into(),
                input.is_day_off.into(),
                input.shift_type.map(|t| t.to_string()).into(),
            ])
            .on_conflict(
                OnConflict::columns([StaffOverride::StaffId, StaffOverride::Date])
                    .update_columns([
                        StaffOverride::StartTime,
                        StaffOverride::EndTime,
                        StaffOverride::IsDayOff,
                        StaffOverride::ShiftType,
                    ])
                    .to_owned(),
            )
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
