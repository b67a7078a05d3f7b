use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Cuisine, Recipe};

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(Recipe::Table)
        .col(
            ColumnDef::new(Recipe::Id)
                .integer()
                .not_null()
                .auto_increment()
                .primary_key(),
        )
        .col(
            ColumnDef::new(Recipe::Title)
                .string()
                .not_null()
                .string_len(500),
        )
        .col(
            ColumnDef::new(Recipe::TitleLower)
                .string()
                .not_null()
                .string_len(500),
        )
        .col(
            ColumnDef::new(Recipe::Instructions)
                .text()
                .not_null()
                .default(""),
        )
        .col(
            ColumnDef::new(Recipe::PreparationTime)
                .integer()
                .not_null(),
        )
        .col(ColumnDef::new(Recipe::CookingTime).integer().not_null())
        .col(ColumnDef::new(Recipe::Difficulty).integer().not_null())
        .col(ColumnDef::new(Recipe::CuisineId).integer().not_null())
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_cuisine")
                .from(Recipe::Table, Recipe::CuisineId)
                .to(Cuisine::Table, Cuisine::Id)
                .on_delete(ForeignKeyAction::Restrict),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(Recipe::Table).to_owned()
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
