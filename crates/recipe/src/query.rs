mod find;
mod list;
mod search;

use recipebook_db::table::{Cuisine, Ingredient, Joined, Recipe, RecipeImage, RecipeIngredient};
use sea_query::{Expr, ExprTrait, Order, SelectStatement};

pub use list::RecipesQuery;

/// Read side of the catalog.
#[derive(Clone)]
pub struct Query(pub sqlx::SqlitePool);

/// Joined recipe rows, one per ingredient, shaped for [`crate::RecipeRow`].
/// Recipes without ingredient rows fall out of the inner join. The image
/// link is optional.
fn recipe_rows() -> SelectStatement {
    sea_query::Query::select()
        .columns([
            (Recipe::Table, Recipe::Id),
            (Recipe::Table, Recipe::Title),
            (Recipe::Table, Recipe::Instructions),
            (Recipe::Table, Recipe::PreparationTime),
            (Recipe::Table, Recipe::CookingTime),
            (Recipe::Table, Recipe::Difficulty),
        ])
        .expr_as(
            Expr::col((Cuisine::Table, Cuisine::Name)),
            Joined::CuisineName,
        )
        .expr_as(
            Expr::col((Ingredient::Table, Ingredient::Name)),
            Joined::IngredientName,
        )
        .columns([
            (RecipeIngredient::Table, RecipeIngredient::Quantity),
            (RecipeIngredient::Table, RecipeIngredient::Unit),
        ])
        .column((RecipeImage::Table, RecipeImage::ImageLink))
        .from(Recipe::Table)
        .inner_join(
            Cuisine::Table,
            Expr::col((Cuisine::Table, Cuisine::Id)).equals((Recipe::Table, Recipe::CuisineId)),
        )
        .inner_join(
            RecipeIngredient::Table,
            Expr::col((RecipeIngredient::Table, RecipeIngredient::RecipeId))
                .equals((Recipe::Table, Recipe::Id)),
        )
        .inner_join(
            Ingredient::Table,
            Expr::col((Ingredient::Table, Ingredient::Id))
                .equals((RecipeIngredient::Table, RecipeIngredient::IngredientId)),
        )
        .left_join(
            RecipeImage::Table,
            Expr::col((RecipeImage::Table, RecipeImage::RecipeId))
                .equals((Recipe::Table, Recipe::Id)),
        )
        .to_owned()
}

/// Keeps each recipe's ingredients in their stored order.
fn by_position(statement: &mut SelectStatement) {
    statement.order_by(
        (RecipeIngredient::Table, RecipeIngredient::Position),
        Order::Asc,
    );
}
