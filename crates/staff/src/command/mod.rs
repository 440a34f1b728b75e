use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::{Staff, StaffOverride};
use sqlx::SqlitePool;

use crate::{OverrideEntry, OverrideRow, StaffRow};

mod clear_override;
mod create;
mod delete;
mod quick_cycle;
mod set_override;
mod update;

pub use create::CreateStaffInput;
pub use set_override::SetOverrideInput;
pub use update::UpdateStaffInput;

/// Write side of the staff domain. Constructed over the write pool so
/// concurrent updates to one staff record serialize.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

impl Command {
    pub(crate) async fn staff_required(
        &self,
        id: &str,
    ) -> shiftboard_shared::Result<StaffRow> {
        let statement = sea_query::Query::select()
            .columns([
                Staff::Id,
                Staff::Name,
                Staff::Role,
                Staff::Status,
                Staff::ShiftType,
                Staff::CycleStart,
                Staff::PatternOn,
                Staff::PatternOff,
                Staff::DisplayOrder,
                Staff::CreatedAt,
                Staff::UpdatedAt,
            ])
            .from(Staff::Table)
            .and_where(Expr::col(Staff::Id).eq(id))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        sqlx::query_as_with::<_, StaffRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?
            .ok_or(shiftboard_shared::Error::NotFound)
    }

    pub(crate) async fn override_entries(
        &self,
        staff_id: &str,
        date: &str,
    ) -> shiftboard_shared::Result<Vec<OverrideEntry>> {
        let statement = sea_query::Query::select()
            .columns([
                StaffOverride::StaffId,
                StaffOverride::Date,
                StaffOverride::StartTime,
                StaffOverride::EndTime,
                StaffOverride::IsDayOff,
                StaffOverride::ShiftType,
            ])
            .from(StaffOverride::Table)
            .and_where(Expr::col(StaffOverride::StaffId).eq(staff_id))
            .and_where(Expr::col(StaffOverride::Date).eq(date))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        let rows = sqlx::query_as_with::<_, OverrideRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?;

        rows.iter().map(|row| row.entry()).collect()
    }
}
