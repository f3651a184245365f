use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;
use gearbox_core::ApiResponse;
use gearbox_order::{
    validate_order_input, GeneratedOrderId, OrderCreated, OrderReport, PriceQuote,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/calculate-price", post(calculate_price))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{order_id}/report", get(order_report))
        .route("/api/generate-order-id", post(generate_order_id))
}

/// POST /api/calculate-price
/// Prices a list of lines without persisting anything.
async fn calculate_price(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ApiResponse<PriceQuote>>, AppError> {
    let Json(payload) = payload?;
    let lines = validate_order_input(&payload)?;
    let quote = state.orders.calculate_price(&lines).await?;
    Ok(Json(ApiResponse::success(quote)))
}

/// POST /api/orders
/// Validates the payload, prices it and stores the order in one step.
async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<OrderCreated>>), AppError> {
    let Json(payload) = payload?;
    let created = state.orders.create_order(&payload).await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(created))))
}

/// GET /api/orders/{order_id}/report
async fn order_report(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> Result<Json<ApiResponse<OrderReport>>, AppError> {
    let report = state.orders.get_order_report(order_id).await?;
    Ok(Json(ApiResponse::success(report)))
}

/// POST /api/generate-order-id
/// Mints a fresh order id. Nothing is reserved; order placement always
/// generates its own id.
async fn generate_order_id(State(state): State<AppState>) -> Json<ApiResponse<GeneratedOrderId>> {
    Json(ApiResponse::success(state.orders.generate_order_id()))
}
