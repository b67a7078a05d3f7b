mod error;
mod health;
mod recipes;
mod search;

use axum::{Router, routing::get};
use sqlx::SqlitePool;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use error::ApiError;

#[derive(Clone)]
pub struct AppState {
    pub environment: String,
    pub pool: SqlitePool,
    pub query: recipebook_recipe::Query,
    pub command: recipebook_recipe::Command,
}

impl AppState {
    pub fn new(environment: impl Into<String>, pool: SqlitePool) -> Self {
        Self {
            environment: environment.into(),
            query: recipebook_recipe::Query(pool.clone()),
            command: recipebook_recipe::Command(pool.clone()),
            pool,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/v1/healthcheck", get(health::healthcheck))
        .route("/v1/ready", get(health::ready))
        .route("/v1/recipes", get(recipes::list).post(recipes::create))
        .route(
            "/v1/recipes/{id}",
            get(recipes::show)
                .put(recipes::update)
                .delete(recipes::delete),
        )
        .route("/v1/search", get(search::search))
        .route("/v1/listingredients", get(search::list_ingredients))
        .route("/v1/cuisines", get(search::list_cuisines))
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
