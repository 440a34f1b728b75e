use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::Staff;
use time::OffsetDateTime;
use validator::Validate;

use crate::{ShiftType, StaffStatus};

#[derive(Validate)]
pub struct UpdateStaffInput {
    #[validate(length(min = 1, max = 60))]
    pub name: String,
    #[validate(length(max = 60))]
    pub role: String,
    pub status: StaffStatus,
    pub shift_type: ShiftType,
    pub cycle_start: String,
    #[validate(range(max = 365))]
    pub pattern_on: u32,
    #[validate(range(max = 365))]
    pub pattern_off: u32,
    pub display_order: u32,
}

impl super::Command {
    pub async fn update(
        &self,
        id: impl Into<String>,
        input: UpdateStaffInput,
    ) -> shiftboard_shared::Result<()> {
        input.validate()?;

        if input.pattern_on + input.pattern_off == 0 {
            shiftboard_shared::bail!("cycle length must be positive");
        }

        let cycle_start = shiftboard_shared::parse_date(&input.cycle_start)?;
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = sea_query::Query::update()
            .table(Staff::Table)
            .values([
                (Staff::Name, input.name.into()),
                (Staff::Role, input.role.into()),
                (Staff::Status, input.status.to_string().into()),
                (Staff::ShiftType, input.shift_type.to_string().into()),
                (
                    Staff::CycleStart,
                    shiftboard_shared::format_date(cycle_start).into(),
                ),
                (Staff::PatternOn, input.pattern_on.into()),
                (Staff::PatternOff, input.pattern_off.into()),
                (Staff::DisplayOrder, input.display_order.into()),
                (Staff::UpdatedAt, now.into()),
            ])
            .and_where(Expr::col(Staff::Id).eq(id.into()))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(shiftboard_shared::Error::NotFound);
        }

        Ok(())
    }
}
