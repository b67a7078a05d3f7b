use recipebook_db::table::Recipe;
use sea_query::{Expr, ExprTrait, SqliteQueryBuilder};
use sea_query_sqlx::SqlxBinder;

use crate::{Error, Result, error::bounded};

use super::Command;

impl Command {
    /// Removes a recipe. Its ingredient rows go with it.
    #[tracing::instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> Result<()> {
        if id < 1 {
            return Err(Error::NotFound);
        }

        let statement = sea_query::Query::delete()
            .from_table(Recipe::Table)
            .and_where(Expr::col(Recipe::Id).eq(id))
            .to_owned();

        let (sql, values) = statement.build_sqlx(SqliteQueryBuilder);

        bounded(async {
            let result = sqlx::query_with(&sql, values).execute(&self.0).await?;

            if result.rows_affected() == 0 {
                return Err(Error::NotFound);
            }

            tracing::info!(id, "recipe deleted");

            Ok(())
        })
        .await
    }
}
