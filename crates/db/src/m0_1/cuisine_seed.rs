use sea_query::{DeleteStatement, Expr, ExprTrait, InsertStatement, Query};

use crate::table::Cuisine;

const CUISINES: [&str; 12] = [
    "American",
    "Chinese",
    "French",
    "Greek",
    "Indian",
    "Italian",
    "Japanese",
    "Korean",
    "Mediterranean",
    "Mexican",
    "Spanish",
    "Thai",
];

pub struct Operation;

fn up_statement() -> InsertStatement {
    let mut statement = Query::insert()
        .into_table(Cuisine::Table)
        .columns([Cuisine::Name])
        .to_owned();

    for name in CUISINES {
        statement.values_panic([name.into()]);
    }

    statement
}

fn down_statement() -> DeleteStatement {
    Query::delete()
        .from_table(Cuisine::Table)
        .and_where(Expr::col(Cuisine::Name).is_in(CUISINES))
        .to_owned()
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
