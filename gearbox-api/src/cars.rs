use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::AppError;
use crate::state::AppState;
use gearbox_catalog::Car;
use gearbox_core::ApiResponse;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/cars", get(car_list))
        .route("/api/cars/{car_id}", get(car_detail))
        .route("/api/cars/{car_id}/parts", get(car_parts))
}

/// GET /api/cars
/// Every car in the catalog, oldest entry first.
async fn car_list(State(state): State<AppState>) -> Result<Json<ApiResponse<Value>>, AppError> {
    let cars = state.catalog.list_cars().await?;
    let count = cars.len();

    Ok(Json(ApiResponse::success(json!({
        "cars": cars,
        "count": count,
    }))))
}

/// GET /api/cars/{car_id}
async fn car_detail(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let car = state.catalog.get_car(car_id).await?;
    Ok(Json(ApiResponse::success(car)))
}

/// GET /api/cars/{car_id}/parts
/// The car plus every part fitted to it. Universal parts carry no owner
/// and are not listed here.
async fn car_parts(
    State(state): State<AppState>,
    Path(car_id): Path<i64>,
) -> Result<Json<ApiResponse<Value>>, AppError> {
    let (car, parts) = state.catalog.car_parts(car_id).await?;
    let count = parts.len();

    Ok(Json(ApiResponse::success(json!({
        "car": car,
        "parts": parts,
        "count": count,
    }))))
}
