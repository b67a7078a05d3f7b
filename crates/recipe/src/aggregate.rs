use std::collections::HashMap;

use sqlx::prelude::FromRow;

use crate::{Difficulty, Ingredient, Minutes, Recipe};

/// One recipe-ingredient pair as produced by the joined read queries.
#[derive(Debug, Clone, FromRow)]
pub struct RecipeRow {
    pub id: i64,
    pub title: String,
    pub instructions: String,
    pub preparation_time: Minutes,
    pub cooking_time: Minutes,
    pub difficulty: Difficulty,
    pub cuisine_name: String,
    pub ingredient_name: String,
    pub quantity: f64,
    pub unit: String,
    pub image_link: Option<String>,
}

impl RecipeRow {
    fn split(self) -> (Recipe, Ingredient) {
        let ingredient = Ingredient {
            name: self.ingredient_name,
            quantity: self.quantity,
            unit: self.unit,
        };
        let recipe = Recipe {
            id: self.id,
            title: self.title,
            instructions: self.instructions,
            preparation_time: self.preparation_time,
            cooking_time: self.cooking_time,
            difficulty: self.difficulty,
            cuisine_name: self.cuisine_name,
            ingredients: Vec::new(),
            image_link: self.image_link,
        };

        (recipe, ingredient)
    }
}

/// Folds fanned-out rows into recipes. Rows of one recipe need not be
/// contiguous; output keeps the order in which each id first appears.
pub fn aggregate(rows: impl IntoIterator<Item = RecipeRow>) -> Vec<Recipe> {
    let mut recipes: Vec<Recipe> = Vec::new();
    let mut positions: HashMap<i64, usize> = HashMap::new();

    for row in rows {
        let (recipe, ingredient) = row.split();

        match positions.get(&recipe.id) {
            Some(&index) => recipes[index].ingredients.push(ingredient),
            None => {
                positions.insert(recipe.id, recipes.len());
                recipes.push(Recipe {
                    ingredients: vec![ingredient],
                    ..recipe
                });
            }
        }
    }

    recipes
}
