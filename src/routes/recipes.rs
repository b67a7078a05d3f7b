use std::{collections::HashMap, str::FromStr};

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{StatusCode, header},
    response::IntoResponse,
};
use recipebook_recipe::{
    DEFAULT_PAGE, DEFAULT_PAGE_SIZE, DEFAULT_SORT, Filters, Recipe, RecipeInput, RecipesQuery,
    Validator,
};
use serde_json::{Value, json};

use super::{ApiError, AppState};

/// Parses a path id. Anything that is not a positive integer is treated as
/// a missing resource.
fn read_id(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    let Path(raw) = path?;

    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::NotFound),
    }
}

fn read_string(qs: &HashMap<String, String>, key: &str, default: &str) -> String {
    qs.get(key)
        .filter(|value| !value.is_empty())
        .cloned()
        .unwrap_or_else(|| default.to_owned())
}

fn read_int<T: FromStr>(
    qs: &HashMap<String, String>,
    key: &'static str,
    default: T,
    v: &mut Validator,
) -> T {
    let Some(raw) = qs.get(key).filter(|value| !value.is_empty()) else {
        return default;
    };

    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            v.check(false, key, "must be an integer value");
            default
        }
    }
}

/// Negative values become 0 and oversized ones saturate, so range checks
/// report them.
fn page_number(value: i64) -> u32 {
    if value < 0 {
        0
    } else {
        u32::try_from(value).unwrap_or(u32::MAX)
    }
}

/// The stored recipe, or the input itself when the recipe has no
/// ingredient rows to read back. The fallback carries the cuisine's
/// dictionary spelling.
async fn stored(state: &AppState, id: i64, input: RecipeInput) -> Result<Recipe, ApiError> {
    match state.query.find(id).await {
        Err(recipebook_recipe::Error::NotFound) => {
            let mut recipe = input.into_recipe(id)?;
            let cuisines = state.query.list_cuisines().await?;

            if let Some(cuisine) = cuisines
                .into_iter()
                .find(|c| c.name.eq_ignore_ascii_case(recipe.cuisine_name.trim()))
            {
                recipe.cuisine_name = cuisine.name;
            }

            Ok(recipe)
        }
        other => Ok(other?),
    }
}

/// GET /v1/recipes
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(qs): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let mut v = Validator::new();

    let query = RecipesQuery {
        title: read_string(&qs, "title", ""),
        cuisine_id: read_int(&qs, "cuisineid", 0, &mut v),
        filters: Filters {
            page: page_number(read_int(&qs, "page", DEFAULT_PAGE.into(), &mut v)),
            page_size: page_number(read_int(&qs, "pagesize", DEFAULT_PAGE_SIZE.into(), &mut v)),
            sort: read_string(&qs, "sort", DEFAULT_SORT),
        },
    };

    v.finish()?;

    let (recipes, metadata) = state.query.list(query).await?;

    Ok(Json(json!({ "recipes": recipes, "metadata": metadata })))
}

/// POST /v1/recipes
#[tracing::instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(input) = payload?;

    let id = state.command.insert(input.clone()).await?;
    let recipe = stored(&state, id, input).await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/v1/recipes/{id}"))],
        Json(json!({ "recipe": recipe })),
    ))
}

/// GET /v1/recipes/{id}
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = read_id(path)?;
    let recipe = state.query.find(id).await?;

    Ok(Json(json!({ "recipe": recipe })))
}

/// PUT /v1/recipes/{id}
#[tracing::instrument(skip(state, payload))]
pub async fn update(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    payload: Result<Json<RecipeInput>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = read_id(path)?;
    let Json(input) = payload?;

    state.command.update(id, input.clone()).await?;
    let recipe = stored(&state, id, input).await?;

    Ok(Json(json!({ "recipe": recipe })))
}

/// DELETE /v1/recipes/{id}
pub async fn delete(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = read_id(path)?;
    state.command.delete(id).await?;

    Ok(Json(json!({ "message": "recipe successfully deleted" })))
}
