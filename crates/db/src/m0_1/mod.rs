mod cuisine_create_table;
mod cuisine_seed;
mod ingredient_create_name_lower_idx;
mod ingredient_create_table;
mod recipe_create_cuisine_id_idx;
mod recipe_create_table;
mod recipe_image_create_table;
mod recipe_ingredient_create_ingredient_id_idx;
mod recipe_ingredient_create_table;

use sqlx_migrator::vec_box;

pub struct Migration;

sqlx_migrator::sqlite_migration!(
    Migration,
    "main",
    "m0_1",
    vec_box![],
    vec_box![
        cuisine_create_table::Operation,
        cuisine_seed::Operation,
        recipe_create_table::Operation,
        recipe_create_cuisine_id_idx::Operation,
        recipe_image_create_table::Operation,
        ingredient_create_table::Operation,
        ingredient_create_name_lower_idx::Operation,
        recipe_ingredient_create_table::Operation,
        recipe_ingredient_create_ingredient_id_idx::Operation,
    ]
);
