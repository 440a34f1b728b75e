use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::Staff;
use time::OffsetDateTime;
use ulid::Ulid;
use validator::Validate;

use crate::{ShiftType, StaffStatus};

#[derive(Validate)]
pub struct CreateStaffInput {
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
    pub async fn create(&self, input: CreateStaffInput) -> shiftboard_shared::Result<String> {
        input.validate()?;

        if input.pattern_on + input.pattern_off == 0 {
            shiftboard_shared::bail!("cycle length must be positive");
        }

        let cycle_start = shiftboard_shared::parse_date(&input.cycle_start)?;

        let id = Ulid::new().to_string();
        let now = OffsetDateTime::now_utc().unix_timestamp();

        let statement = sea_query::Query::insert()
            .into_table(Staff::Table)
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
            .values_panic([
                id.to_owned().into(),
                input.name.into(),
                input.role.into(),
                input.status.to_string().into(),
                input.shift_type.to_string().into(),
                shiftboard_shared::format_date(cycle_start).into(),
                input.pattern_on.into(),
                input.pattern_off.into(),
                input.display_order.into(),
                now.into(),
                now.into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        tracing::debug!(id, "staff member created");

        Ok(id)
    }
}
