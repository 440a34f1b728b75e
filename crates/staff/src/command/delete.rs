use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use shiftboard_db::table::{Staff, StaffOverride};

impl super::Command {
    /// Removes the staff record together with its overrides.
    pub async fn delete(&self, id: impl Into<String>) -> shiftboard_shared::Result<()> {
        let id = id.into();

        let statement = sea_query::Query::delete()
            .from_table(StaffOverride::Table)
            .and_where(Expr::col(StaffOverride::StaffId).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&self.0).await?;

        let statement = sea_query::Query::delete()
            .from_table(Staff::Table)
            .and_where(Expr::col(Staff::Id).eq(&id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

        if result.rows_affected() == 0 {
            return Err(shiftboard_shared::Error::NotFound);
        }

        tracing::debug!(id, "staff member deleted");

        Ok(())
    }
}
