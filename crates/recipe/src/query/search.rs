use std::collections::BTreeSet;

use recipebook_db::table::{Ingredient, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{RecipeRow, Result, aggregate, bail, error::bounded};

use super::{Query, by_position, recipe_rows};

impl Query {
    /// Recipes whose ingredients cover every requested name, compared
    /// case-insensitively. Extra ingredients on a recipe do not matter.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, names: &[String]) -> Result<Vec<crate::Recipe>> {
        if names.is_empty() {
            bail!("at least one ingredient name is required");
        }

        let names = names
            .iter()
            .map(|name| name.trim().to_lowercase())
            .collect::<BTreeSet<_>>();
        let required = i64::try_from(names.len()).unwrap_or(i64::MAX);

        let covering = sea_query::Query::select()
            .column((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .from(RecipeIngredient::Table)
            .inner_join(
                Ingredient::Table,
                Expr::col((Ingredient::Table, Ingredient::Id))
                    .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
            )
            .and_where(Expr::col((Ingredient::Table, Ingredient::NameLower)).is_in(names))
            .group_by_col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
            .and_having(Expr::cust(r#"COUNT(DISTINCT "ingredient"."name_lower")"#).eq(required))
            .to_owned();

        let mut statement = recipe_rows()
            .and_where(Expr::col((Recipe::Table, Recipe::Id)).in_subquery(covering))
            .order_by((Recipe::Table, Recipe::Id), Order::Asc)
            .to_owned();
        by_position(&mut statement);

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?;

            Ok::<_, crate::Error>(aggregate(rows))
        })
        .await
    }
}
