use sea_query::{ColumnDef, Table, TableCreateStatement, TableDropStatement};

use crate::table::Cuisine;

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Cuisine::Table)
        .col(
            ColumnDef::new(Cuisine::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Cuisine::Name)
                .string()
                .not_null()
                .string_len(100)
                .unique_key(),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Cuisine::Table).to_owned()
}

#[async_trait::async_trait]
impl sqlx_migrator::Operation<sqlx::Sqlite> for Operation {
    async fn up(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = up_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }

    async fn down(
        &self,
        connection: &mut sqlx::SqliteConnection,
    ) -> Result<(), sqlx_migrator::Error> {
        let statement = down_statement().to_string(sea_query::SqliteQueryBuilder);
        sqlx::query(&statement).execute(connection).await?;

        Ok(())
    }
}
