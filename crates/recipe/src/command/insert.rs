use recipebook_db::table::Recipe;
use sea_query::SqliteQueryBuilder;
use sea_query_sqlx::SqlxBinder;

use crate::{Error, RecipeInput, Result, error::bounded};

use super::{Command, checked, cuisine_id, write_image, write_ingredients};

impl Command {
    /// Stores a new recipe with its ingredients and returns the generated id.
    #[tracing::instrument(skip_all, fields(title = %input.title))]
    pub async fn insert(&self, input: RecipeInput) -> Result<i64> {
        let difficulty = checked(&input)?;

        bounded(async {
            let mut tx = self.0.begin().await?;
            let cuisine_id = cuisine_id(&mut tx, &input.cuisine_name).await?;

            let statement = sea_query::Query::insert()
                .into_table(Recipe::Table)
                .columns([
                    Recipe::Title,
                    Recipe::TitleLower,
                    Recipe::Instructions,
                    Recipe::PreparationTime,
                    Recipe::CookingTime,
                    Recipe::Difficulty,
                    Recipe::CuisineId,
                ])
                .values_panic([
                    input.title.as_str().into(),
                    input.title.to_lowercase().into(),
                    input.instructions.as_str().into(),
                    input.preparation_time.0.into(),
                    input.cooking_time.0.into(),
                    difficulty.rank().into(),
                    cuisine_id.into(),
                ])
                .to_owned();

            let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
            let id = sqlx::query_with(&sql, values)
                .execute(&mut *tx)
                .await?
                .last_insert_rowid();

            if let Some(ingredients) = &input.ingredients {
                write_ingredients(&mut tx, id, ingredients).await?;
            }

            write_image(&mut tx, id, input.image_link.as_deref()).await?;

            tx.commit().await?;
            tracing::info!(id, "recipe created");

            Ok::<_, Error>(id)
        })
        .await
    }
}
