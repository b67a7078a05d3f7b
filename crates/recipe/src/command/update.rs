use recipebook_db::table::{Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, RecipeInput, Result, error::bounded};

use super::{Command, checked, cuisine_id, write_image, write_ingredients};

impl Command {
    /// Rewrites a recipe's fields, image link included. Ingredients are
    /// replaced only when `input.ingredients` is set.
    #[tracing::instrument(skip(self, input))]
    pub async fn update(&self, id: i64, input: RecipeInput) -> Result<()> {
        let difficulty = checked(&input)?;

        if id < 1 {
            return Err(Error::NotFound);
        }

        bounded(async {
            let mut tx = self.0.begin().await?;
            let cuisine_id = cuisine_id(&mut tx, &input.cuisine_name).await?;

            let statement = sea_query::Query::update()
                .table(Recipe::Table)
                .values([
                    (Recipe::Title, input.title.as_str().into()),
                    (Recipe::TitleLower, input.title.to_lowercase().into()),
                    (Recipe::Instructions, input.instructions.as_str().into()),
                    (Recipe::PreparationTime, input.preparation_time.0.into()),
                    (Recipe::CookingTime, input.cooking_time.0.into()),
                    (Recipe::Difficulty, difficulty.rank().into()),
                    (Recipe::CuisineId, cuisine_id.into()),
                ])
                .and_where(Expr::col(Recipe::Id).eq(id))
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let result = sqlx::query_with(&sql, values).execute(&mut *tx).await?;

            if result.rows_affected() == 0 {
                return Err(Error::NotFound);
            }

            if let Some(ingredients) = &input.ingredients {
                let statement = sea_query::Query::delete()
                    .from_table(RecipeIngredient::Table)
                    .and_where(Expr::col(RecipeIngredient::RecipeId).eq(id))
                    .to_owned();

                let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
                sqlx::query_with(&sql, values).execute(&mut *tx).await?;

                write_ingredients(&mut tx, id, ingredients).await?;
            }

            write_image(&mut tx, id, input.image_link.as_deref()).await?;

            tx.commit().await?;
            tracing::info!(id, "recipe updated");

            Ok(())
        })
        .await
    }
}
