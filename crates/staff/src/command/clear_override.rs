use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::StaffOverride;

impl super::Command {
    /// Clearing an absent override is a no-op.
    pub async fn clear_override(
        &self,
        staff_id: impl Into<String>,
        date: &str,
    ) -> shiftboard_shared::Result<()> {
        let date = shiftboard_shared::parse_date(date)?;

        let statement = sea_query::Query::delete()
            .from_table(StaffOverride::Table)
            .and_where(Expr::col(StaffOverride::StaffId).eq(staff_id.into()))
            .and_where(Expr::col(StaffOverride::Date).eq(shiftboard_shared::format_date(date)))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        Ok(())
    }
}
