#![allow(dead_code)]

use std::{path::PathBuf, str::FromStr};

use recipebook_recipe::{Command, Ingredient, Minutes, Query, RecipeInput};
use sqlx::{SqlitePool, sqlite::SqliteConnectOptions};
use sqlx_migrator::{Migrate, Plan};

pub struct State {
    pub pool: SqlitePool,
    pub query: Query,
    pub command: Command,
}

pub async fn setup_test_state(path: PathBuf) -> anyhow::Result<State> {
    let opts = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.to_string_lossy()))?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePool::connect_with(opts).await?;
    let mut conn = pool.acquire().await?;
    recipebook_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;

    Ok(State {
        query: Query(pool.clone()),
        command: Command(pool.clone()),
        pool,
    })
}

pub fn recipe(title: &str, difficulty: &str, cuisine: &str, ingredients: &[&str]) -> RecipeInput {
    RecipeInput {
        title: title.to_owned(),
        instructions: format!("Prepare {title}"),
        preparation_time: Minutes(10),
        cooking_time: Minutes(15),
        difficulty: difficulty.to_owned(),
        cuisine_name: cuisine.to_owned(),
        ingredients: Some(
            ingredients
                .iter()
                .map(|name| Ingredient {
                    name: (*name).to_owned(),
                    quantity: 1.0,
                    unit: "cup".to_owned(),
                })
                .collect(),
        ),
        image_link: None,
    }
}

pub fn names(recipe: &recipebook_recipe::Recipe) -> Vec<&str> {
    recipe.ingredients.iter().map(|i| i.name.as_str()).collect()
}
