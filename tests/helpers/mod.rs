#![allow(dead_code)]

use std::path::Path;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use recipebook::{AppState, config::DatabaseConfig};
use serde_json::Value;
use sqlx_migrator::{Migrate, Plan};
use tower::ServiceExt;

pub async fn setup_app(path: &Path) -> anyhow::Result<Router> {
    let pool = recipebook::db::create_pool(&DatabaseConfig {
        url: format!("sqlite:{}", path.to_string_lossy()),
        max_connections: 2,
        idle_timeout_secs: 60,
    })
    .await?;

    let mut conn = pool.acquire().await?;
    recipebook_db::migrator()?
        .run(&mut conn, &Plan::apply_all())
        .await?;
    drop(conn);

    Ok(recipebook::router(AppState::new("test", pool)))
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, Value)> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = response.into_body().collect().await?.to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)?
    };

    Ok((status, value))
}

pub fn pancakes() -> Value {
    serde_json::json!({
        "title": "Pancakes",
        "instructions": "Whisk and fry",
        "preparation_time": "10 mins",
        "cooking_time": "15 mins",
        "difficulty": "Easy",
        "cuisine_name": "American",
        "ingredients": [
            { "ingredient_name": "Flour", "quantity": 200.0, "unit": "g" },
            { "ingredient_name": "Egg", "quantity": 2.0, "unit": "pc" }
        ]
    })
}
