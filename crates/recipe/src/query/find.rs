use recipebook_db::table::{Cuisine, Ingredient, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, RecipeRow, Result, aggregate, error::bounded};

use super::{Query, by_position, recipe_rows};

impl Query {
    pub async fn find(&self, id: i64) -> Result<crate::Recipe> {
        if id < 1 {
            return Err(Error::NotFound);
        }

        let mut statement = recipe_rows()
            .and_where(Expr::col((Recipe::Table, Recipe::Id)).eq(id))
            .to_owned();
        by_position(&mut statement);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?;

            aggregate(rows).into_iter().next().ok_or(Error::NotFound)
        })
        .await
    }

    /// Names of ingredients used by at least one recipe.
    pub async fn list_ingredients(&self) -> Result<Vec<String>> {
        let statement = sea_query::Query::select()
            .distinct()
            .column(Ingredient::Name)
            .from(Ingredient::Table)
            .and_where(
                Expr::col(Ingredient::Id).in_subquery(
                    sea_query::Query::select()
                        .column(RecipeIngredient::IngredientId)
                        .from(RecipeIngredient::Table)
                        .to_owned(),
                ),
            )
            .order_by(Ingredient::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let rows = sqlx::query_scalar_with::<_, String, _>(&sql, values)
                .fetch_all(&self.0)
                .await?;

            Ok::<_, Error>(rows)
        })
        .await
    }

    pub async fn list_cuisines(&self) -> Result<Vec<crate::Cuisine>> {
        let statement = sea_query::Query::select()
            .columns([Cuisine::Id, Cuisine::Name])
            .from(Cuisine::Table)
            .order_by(Cuisine::Name, Order::Asc)
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let rows = sqlx::query_as_with::<_, crate::Cuisine, _>(&sql, values)
                .fetch_all(&self.0)
                .await?;

            Ok::<_, Error>(rows)
        })
        .await
    }
}
