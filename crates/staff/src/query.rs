use std::collections::HashMap;

use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::{Staff, StaffOverride};
use sqlx::prelude::FromRow;
use time::Date;

use crate::{
    DayStatus, EffectiveShift, OverrideEntry, Rotation, ShiftState, ShiftType, StaffStatus,
    resolve_shift_times, shift_state,
};

#[derive(Debug, Clone, FromRow)]
pub struct StaffRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub status: sqlx::types::Text<StaffStatus>,
    pub shift_type: sqlx::types::Text<ShiftType>,
    pub cycle_start: String,
    pub pattern_on: u32,
    pub pattern_off: u32,
    pub display_order: u32,
    pub created_at: u64,
    pub updated_at: u64,
}

impl StaffRow {
    pub fn rotation(&self) -> shiftboard_shared::Result<Rotation> {
        Ok(Rotation {
            cycle_start: shiftboard_shared::parse_date(&self.cycle_start)?,
            pattern_on: self.pattern_on,
            pattern_off: self.pattern_off,
        })
    }

    pub fn is_casual(&self) -> bool {
        self.status.0 == StaffStatus::Casual
    }
}

#[derive(Debug, Clone, FromRow)]
pub struct OverrideRow {
    pub staff_id: String,
    pub date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub is_day_off: bool,
    pub shift_type: Option<sqlx::types::Text<ShiftType>>,
}

impl OverrideRow {
    pub fn entry(&self) -> shiftboard_shared::Result<OverrideEntry> {
        Ok(OverrideEntry {
            date: shiftboard_shared::parse_date(&self.date)?,
            start_time: self.start_time.to_owned(),
            end_time: self.end_time.to_owned(),
            is_day_off: self.is_day_off,
            shift_type: self.shift_type.as_ref().map(|t| t.0.to_owned()),
        })
    }
}

const STAFF_COLUMNS: [Staff; 11] = [
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
];

const OVERRIDE_COLUMNS: [StaffOverride; 6] = [
    StaffOverride::StaffId,
    StaffOverride::Date,
    StaffOverride::StartTime,
    StaffOverride::EndTime,
    StaffOverride::IsDayOff,
    StaffOverride::ShiftType,
];

#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

impl Query {
    pub async fn list(&self) -> shiftboard_shared::Result<Vec<StaffRow>> {
        let statement = sea_query::Query::select()
            .columns(STAFF_COLUMNS)
            .from(Staff::Table)
            .order_by(Staff::DisplayOrder, Order::Asc)
            .order_by(Staff::CreatedAt, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, StaffRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn find(&self, id: impl Into<String>) -> shiftboard_shared::Result<Option<StaffRow>> {
        let statement = sea_query::Query::select()
            .columns(STAFF_COLUMNS)
            .from(Staff::Table)
            .and_where(Expr::col(Staff::Id).eq(id.into()))
            .limit(1)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, StaffRow, _>(&sql, values)
            .fetch_optional(&self.0)
            .await?)
    }

    pub async fn overrides_between(
        &self,
        from: Date,
        to: Date,
    ) -> shiftboard_shared::Result<Vec<OverrideRow>> {
        let statement = sea_query::Query::select()
            .columns(OVERRIDE_COLUMNS)
            .from(StaffOverride::Table)
            .and_where(Expr::col(StaffOverride::Date).between(
                shiftboard_shared::format_date(from),
                shiftboard_shared::format_date(to),
            ))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, OverrideRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    pub async fn overrides_for(
        &self,
        staff_id: &str,
        from: Date,
        to: Date,
    ) -> shiftboard_shared::Result<Vec<OverrideRow>> {
        let statement = sea_query::Query::select()
            .columns(OVERRIDE_COLUMNS)
            .from(StaffOverride::Table)
            .and_where(Expr::col(StaffOverride::StaffId).eq(staff_id))
            .and_where(Expr::col(StaffOverride::Date).between(
                shiftboard_shared::format_date(from),
                shiftboard_shared::format_date(to),
            ))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        Ok(sqlx::query_as_with::<_, OverrideRow, _>(&sql, values)
            .fetch_all(&self.0)
            .await?)
    }

    /// Assemble the roster grid for a date range: one `DayStatus` column per
    /// day, one row per staff member with the computed state in every cell.
    pub async fn roster(&self, from: Date, to: Date) -> shiftboard_shared::Result<Roster> {
        let staff = self.list().await?;
        let overrides = self.overrides_between(from, to).await?;

        let mut by_staff: HashMap<String, Vec<OverrideEntry>> = HashMap::new();
        for row in &overrides {
            by_staff
                .entry(row.staff_id.to_owned())
                .or_default()
                .push(row.entry()?);
        }

        let mut days = vec![];
        let mut day = from;
        while day <= to {
            days.push(DayStatus::of(day));
            let Some(next) = day.next_day() else { break };
            day = next;
        }

        let mut rows = vec![];
        for member in staff {
            let rotation = member.rotation()?;
            let entries = by_staff.get(&member.id).map(Vec::as_slice).unwrap_or(&[]);

            let cells = days
                .iter()
                .map(|status| RosterCell::compute(&rotation, entries, status))
                .collect();

            rows.push(RosterRow {
                staff: member,
                cells,
            });
        }

        Ok(Roster { days, rows })
    }
}

pub struct Roster {
    pub days: Vec<DayStatus>,
    pub rows: Vec<RosterRow>,
}

pub struct RosterRow {
    pub staff: StaffRow,
    pub cells: Vec<RosterCell>,
}

pub struct RosterCell {
    pub date: String,
    pub state: ShiftState,
    pub window: String,
}

impl RosterCell {
    fn compute(rotation: &Rotation, entries: &[OverrideEntry], status: &DayStatus) -> Self {
        let state = shift_state(rotation, entries, status.date);

        let window = match state.shift_type.as_shift_type() {
            Some(shift_type) => {
                let (start, end) = resolve_shift_times(entries, status.date, shift_type);
                format!("{start} - {end}")
            }
            None => String::new(),
        };

        Self {
            date: status.iso.to_owned(),
            state,
            window,
        }
    }

    pub fn effective(&self) -> &EffectiveShift {
        &self.state.shift_type
    }
}
