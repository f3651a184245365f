use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;
use gearbox_catalog::{Part, PartFilter};
use gearbox_core::ApiResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/parts", get(part_list))
        .route("/api/parts/{part_id}", get(part_detail))
}

/// GET /api/parts
/// Part search; `name`, `car_id`, `min_price` and `max_price` query
/// parameters narrow the result and are echoed back under `filters`.
async fn part_list(
    State(state): State<AppState>,
    Query(filter): Query<PartFilter>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let parts = state.catalog.list_parts(&filter).await?;
    let count = parts.len();

    Ok(Json(ApiResponse::success(json!({
        "parts": parts,
        "count": count,
        "filters": filter,
    }))))
}

/// GET /api/parts/{part_id}
async fn part_detail(
    State(state): State<AppState>,
    Path(part_id): Path<i64>,
) -> Result<Json<ApiResponse<Part>>, AppError> {
    let part = state.catalog.get_part(part_id).await?;
    Ok(Json(ApiResponse::success(part)))
}
