use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use sqlx::SqlitePool;
use tracing::warn;

use crate::services::registration_service;

pub async fn root_handler() -> Redirect {
    Redirect::to("/static/index.html")
}

pub async fn list_activities_handler(State(pool): State<SqlitePool>) -> impl IntoResponse {
    match registration_service::list_activities(&pool).await {
        Ok(activities) => Json(activities).into_response(),
        Err(e) => {
            warn!("Listing activities failed: {}", e);
            e.into_response()
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: String,
}

pub async fn signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    match registration_service::signup(&pool, &activity_name, &query.email).await {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!("Signup for {} failed: {}", activity_name, e);
            e.into_response()
        }
    }
}

pub async fn unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<EmailQuery>,
    State(pool): State<SqlitePool>,
) -> impl IntoResponse {
    match registration_service::unregister(&pool, &activity_name, &query.email).await {
        Ok(message) => Json(json!({ "message": message })).into_response(),
        Err(e) => {
            warn!("Unregister from {} failed: {}", activity_name, e);
            e.into_response()
        }
    }
}
