use sea_query::{
    ColumnDef, Index, IndexCreateStatement, IndexDropStatement, Table, TableCreateStatement,
    TableDropStatement,
};

use crate::table::Staff;

pub struct CreateTable;

fn create_table() -> TableCreateStatement {
    Table::create()
        .table(Staff::Table)
        .col(
            ColumnDef::new(Staff::Id)
                .string()
                .not_null()
                .string_len(26)
                .primary_key(),
        )
        .col(
            ColumnDef::new(Staff::Name)
                .string()
                .not_null()
                .string_len(60),
        )
        .col(
            ColumnDef::new(Staff::Role)
                .string()
                .not_null()
                .string_len(60),
        )
        .col(
            ColumnDef::new(Staff::Status)
                .string()
                .not_null()
                .string_len(15),
        )
        .col(
            ColumnDef::new(Staff::ShiftType)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(
            ColumnDef::new(Staff::CycleStart)
                .string()
                .not_null()
                .string_len(10),
        )
        .col(ColumnDef::new(Staff::PatternOn).integer().not_null())
        .col(ColumnDef::new(Staff::PatternOff).integer().not_null())
        .col(
            ColumnDef::new(Staff::DisplayOrder)
                .big_integer()
                .not_null()
                .default(0),
        )
        .col(ColumnDef::new(Staff::CreatedAt).big_integer().not_null())
        .col(ColumnDef::new(Staff::UpdatedAt).big_integer().not_null())
        .to_owned()
}

fn drop_table() -> TableDropStatement {
    Table::drop().table(Staff::Table).to_owned()
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
        .name("idx_staff_display_order")
        .table(Staff::Table)
        .col(Staff::DisplayOrder)
        .to_owned()
}

fn drop_idx_1() -> IndexDropStatement {
    Index::drop()
        .name("idx_staff_display_order")
        .table(Staff::Table)
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
