mod delete;
mod insert;
mod update;

use recipebook_db::table::{Cuisine, Ingredient, RecipeImage, RecipeIngredient};
use sea_query::{Expr, ExprTrait, OnConflict, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;
use sqlx::{SqliteConnection, SqlitePool};

use crate::{Difficulty, RecipeInput, Result, Validator, bail, validate_recipe};

/// Write side of the catalog. Each operation runs in one transaction.
#[derive(Clone)]
pub struct Command(pub SqlitePool);

/// Validates `input` and returns its parsed difficulty.
fn checked(input: &RecipeInput) -> Result<Difficulty> {
    let mut v = Validator::new();
    validate_recipe(&mut v, input);
    v.finish()?;

    let Ok(difficulty) = input.difficulty.parse::<Difficulty>() else {
        bail!("unknown difficulty {}", input.difficulty);
    };

    Ok(difficulty)
}

/// Resolves a cuisine display name, ignoring ASCII case.
async fn cuisine_id(conn: &mut SqliteConnection, name: &str) -> Result<i64> {
    let statement = sea_query::Query::select()
        .column(Cuisine::Id)
        .from(Cuisine::Table)
        .and_where(Expr::cust_with_values(
            r#"LOWER("name") = LOWER(?)"#,
            [name.trim()],
        ))
        .limit(1)
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    let id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
        .fetch_optional(&mut *conn)
        .await?;

    let Some(id) = id else {
        return Err(Validator::rejected("cuisine_name", "unknown cuisine"));
    };

    Ok(id)
}

/// Appends `ingredients` to a recipe in order, adding unseen names to the
/// dictionary.
async fn write_ingredients(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    ingredients: &[crate::Ingredient],
) -> Result<()> {
    for (position, ingredient) in ingredients.iter().enumerate() {
        let name = ingredient.name.trim();

        let statement = sea_query::Query::insert()
            .into_table(Ingredient::Table)
            .columns([Ingredient::Name, Ingredient::NameLower])
            .values_panic([name.into(), name.to_lowercase().into()])
            .on_conflict(OnConflict::column(Ingredient::Name).do_nothing().to_owned())
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;

        let statement = sea_query::Query::select()
            .column(Ingredient::Id)
            .from(Ingredient::Table)
            .and_where(Expr::col(Ingredient::Name).eq(name))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let ingredient_id = sqlx::query_scalar_with::<_, i64, _>(&sql, values)
            .fetch_one(&mut *conn)
            .await?;

        let statement = sea_query::Query::insert()
            .into_table(RecipeIngredient::Table)
            .columns([
                RecipeIngredient::RecipeId,
                RecipeIngredient::Position,
                RecipeIngredient::IngredientId,
                RecipeIngredient::Quantity,
                RecipeIngredient::Unit,
            ])
            .values_panic([
                recipe_id.into(),
                i64::try_from(position).unwrap_or(i64::MAX).into(),
                ingredient_id.into(),
                ingredient.quantity.into(),
                ingredient.unit.trim().into(),
            ])
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        sqlx::query_with(&sql, values).execute(&mut *conn).await?;
    }

    Ok(())
}

/// Stores or clears the image link of a recipe.
async fn write_image(
    conn: &mut SqliteConnection,
    recipe_id: i64,
    image_link: Option<&str>,
) -> Result<()> {
    let statement = sea_query::Query::delete()
        .from_table(RecipeImage::Table)
        .and_where(Expr::col(RecipeImage::RecipeId).eq(recipe_id))
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    let Some(link) = image_link else {
        return Ok(());
    };

    let statement = sea_query::Query::insert()
        .into_table(RecipeImage::Table)
        .columns([RecipeImage::RecipeId, RecipeImage::ImageLink])
        .values_panic([recipe_id.into(), link.trim().into()])
        .to_owned();

    let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
    sqlx::query_with(&sql, values).execute(&mut *conn).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, Minutes, messages};

    fn input(difficulty: &str) -> RecipeInput {
        RecipeInput {
            title: "Pancakes".to_owned(),
            instructions: "Whisk, rest, fry".to_owned(),
            preparation_time: Minutes(10),
            cooking_time: Minutes(15),
            difficulty: difficulty.to_owned(),
            cuisine_name: "American".to_owned(),
            ingredients: None,
            image_link: None,
        }
    }

    #[test]
    fn checked_parses_difficulty_labels() {
        assert_eq!(checked(&input("Easy")).unwrap(), Difficulty::Easy);
        assert_eq!(checked(&input("Intermediate")).unwrap(), Difficulty::Medium);
        assert_eq!(checked(&input("advanced")).unwrap(), Difficulty::Advanced);
    }

    #[test]
    fn checked_reports_unknown_difficulty_as_field_error() {
        let Err(Error::Validate(errors)) = checked(&input("Expert")) else {
            panic!("expected a validation error");
        };
        assert_eq!(
            messages(&errors)["difficulty"],
            "must be one of Easy, Medium, Advanced"
        );
    }
}
