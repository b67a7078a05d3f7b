use recipebook_db::table::{Cuisine, Recipe, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Func, SelectStatement, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{
    Filters, Metadata, RecipeRow, Result, SortKey, Validator, aggregate, bail,
    calculate_metadata, error::bounded, validate_filters,
};

use super::{Query, by_position, recipe_rows};

/// Listing input. An empty `title` and a `cuisine_id` of 0 disable their
/// filters.
#[derive(Debug, Clone, Default)]
pub struct RecipesQuery {
    pub title: String,
    pub cuisine_id: i64,
    pub filters: Filters,
}

impl RecipesQuery {
    /// Recipes matching the filters that have at least one ingredient row.
    fn matching(&self) -> SelectStatement {
        let mut statement = sea_query::Query::select()
            .from(Recipe::Table)
            .inner_join(
                Cuisine::Table,
                Expr::col((Cuisine::Table, Cuisine::Id))
                    .equals((Recipe::Table, Recipe::CuisineId)),
            )
            .and_where(
                Expr::col((Recipe::Table, Recipe::Id)).in_subquery(
                    sea_query::Query::select()
                        .column(RecipeIngredient::RecipeId)
                        .from(RecipeIngredient::Table)
                        .to_owned(),
                ),
            )
            .to_owned();

        if !self.title.is_empty() {
            statement.and_where(Expr::cust_with_values(
                r#""recipe"."title_lower" LIKE ? ESCAPE '!'"#,
                [like_pattern(&self.title)],
            ));
        }

        if self.cuisine_id != 0 {
            statement
                .and_where(Expr::col((Recipe::Table, Recipe::CuisineId)).eq(self.cuisine_id));
        }

        statement
    }
}

/// `%needle%`, lower-cased, with LIKE wildcards taken literally.
fn like_pattern(title: &str) -> String {
    let mut pattern = String::with_capacity(title.len() + 2);
    pattern.push('%');
    for c in title.to_lowercase().chars() {
        if matches!(c, '!' | '%' | '_') {
            pattern.push('!');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl Query {
    #[tracing::instrument(skip(self))]
    pub async fn list(&self, query: RecipesQuery) -> Result<(Vec<crate::Recipe>, Metadata)> {
        let mut v = Validator::new();
        validate_filters(&mut v, &query.filters);
        v.finish()?;

        let Ok(sort) = query.filters.sort.parse::<SortKey>() else {
            bail!("unsupported sort key {}", query.filters.sort);
        };

        let mut page = query
            .matching()
            .column((Recipe::Table, Recipe::Id))
            .limit(query.filters.limit())
            .offset(query.filters.offset())
            .to_owned();
        sort.apply(&mut page);

        let mut statement = recipe_rows()
            .and_where(Expr::col((Recipe::Table, Recipe::Id)).in_subquery(page))
            .to_owned();
        sort.apply(&mut statement);
        by_position(&mut statement);

        let count = query
            .matching()
            .expr(Func::count(Expr::col((Recipe::Table, Recipe::Id))))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);
        let (count_sql, count_values) = count.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let rows = sqlx::query_as_with::<_, RecipeRow, _>(&sql, values)
                .fetch_all(&self.0)
                .await?;

            let total = sqlx::query_scalar_with::<_, i64, _>(&count_sql, count_values)
                .fetch_one(&self.0)
                .await?;

            let recipes = aggregate(rows);
            let metadata = calculate_metadata(
                total.try_into().unwrap_or_default(),
                query.filters.page,
                query.filters.page_size,
            );

            tracing::debug!(returned = recipes.len(), total, "listed recipes");

            Ok::<_, crate::Error>((recipes, metadata))
        })
        .await
    }
}
