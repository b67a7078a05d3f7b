use std::collections::HashMap;

use axum::{
    Json,
    extract::{Query, State},
};
use serde_json::{Value, json};

use super::{ApiError, AppState};

/// GET /v1/search?ingredients=flour,egg
#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<AppState>,
    Query(qs): Query<HashMap<String, String>>,
) -> Result<Json<Value>, ApiError> {
    let names = qs
        .get("ingredients")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    let recipes = state.query.search(&names).await?;

    Ok(Json(json!({ "recipes": recipes })))
}

/// GET /v1/listingredients
pub async fn list_ingredients(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let ingredients = state.query.list_ingredients().await?;

    Ok(Json(json!({ "ingredients": ingredients })))
}

/// GET /v1/cuisines
pub async fn list_cuisines(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let cuisines = state.query.list_cuisines().await?;

    Ok(Json(json!({ "cuisines": cuisines })))
}
