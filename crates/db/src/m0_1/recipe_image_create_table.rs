use sea_query::{
    ColumnDef, ForeignKey, ForeignKeyAction, Table, TableCreateStatement, TableDropStatement,
};

use crate::table::{Recipe, RecipeImage};

pub struct Operation;

fn up_statement() -> TableCreateStatement {
    Table::create()
        .table(RecipeImage::Table)
        .col(
            ColumnDef::new(RecipeImage::RecipeId)
                .integer()
                .not_null()
                .primary_key(),
        )
        .col(
            ColumnDef::new(RecipeImage::ImageLink)
                .string()
                .not_null()
                .string_len(2048),
        )
        .foreign_key(
            ForeignKey::create()
                .name("fk_recipe_image_recipe")
                .from(RecipeImage::Table, RecipeImage::RecipeId)
                .to(Recipe::Table, Recipe::Id)
                .on_delete(ForeignKeyAction::Cascade),
        )
        .to_owned()
}

fn down_statement() -> TableDropStatement {
    Table::drop().table(RecipeImage::Table).to_owned()
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
