use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::StaffOverride;

pub struct CreateTable;

// One override per (staff, date): the composite primary key makes duplicate
// dates unrepresentable, writes go through an upsert.
fn create_table() -> TableCreateStatement {
    Table::create()
        .table(StaffOverride::Table)
        .col(
            ColumnDef::new(StaffOverride::StaffId)
                .string()
                .not_null()
                .string_len(26),
        )
        .col(
            ColumnDef::new(StaffOverride::Date)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(StaffOverride::StartTime).string().string_len(5))
        .col(ColumnDef::new(StaffOverride::EndTime).string().string_len(5))
        .col(
            ColumnDef::new(StaffOverride::IsDayOff)
                .boolean()
                .not_null()
                .default(false),
        )
        .col(ColumnDef::new(StaffOverride::ShiftType).string().string_len(10))
        .primary_key(
            Index::create()
                .col(StaffOverride::StaffId)
                .col(StaffOverride::Date),
        )
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(StaffOverride::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateTable {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_table().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}

pub struct CreateIdx1;

fn create_idx_1() -> IndexCreateStatement {
    Index::create()
        .name("idx_staff_override_date")
        .table(StaffOverride::Table)
        .col(StaffOverride::Date)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_staff_override_date")
        .table(StaffOverride::Table)
        .to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for CreateIdx1 {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = create_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = drop_idx_1().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
