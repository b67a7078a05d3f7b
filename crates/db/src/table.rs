use sea_query::Iden;

#[derive(Iden, Clone, Copy)]
pub enum Cuisine {
    Table,
    Id,
    Name,
}

#[derive(Iden, Clone, Copy)]
pub enum Recipe {
    Table,
    Id,
    Title,
    TitleLower,
    Instructions,
    PreparationTime,
    CookingTime,
    Difficulty,
    CuisineId,
}

#[derive(Iden, Clone, Copy)]
pub enum Ingredient {
    Table,
    Id,
    Name,
    NameLower,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeIngredient {
    Table,
    RecipeId,
    Position,
    IngredientId,
    Quantity,
    Unit,
}

#[derive(Iden, Clone, Copy)]
pub enum RecipeImage {
    Table,
    RecipeId,
    ImageLink,
}

/// Output aliases for joined columns whose names would otherwise collide.
#[derive(Iden, Clone, Copy)]
pub enum Joined {
    CuisineName,
    IngredientName,
}
