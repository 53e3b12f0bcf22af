//! Axum HTTP surface: order-code validation at the edge, one JSON endpoint,
//! permissive CORS. No explicit timeouts; the transport defaults apply.

use crate::config::AppConfig;
use crate::core::transform::transform_order;
use crate::domain::ports::OrderSource;
use crate::utils::error::Result;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Customer-facing order codes look like SONA-<orderNumber>-<randomNumber>.
const ORDER_CODE_PREFIX: &str = "SONA-";

#[derive(Clone)]
pub struct AppState {
    pub orders: Arc<dyn OrderSource>,
}

#[derive(Debug, Deserialize)]
pub struct OrderQuery {
    pub oid: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/orders", get(handle_orders))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(config: &AppConfig, state: AppState) -> Result<()> {
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Sona Bikes API running on port {}", config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /api/orders?oid=SONA-1001-8392
///
/// Fetch failures map to the upstream status (500 when none); transform
/// failures still answer 200, since they are data-quality issues rather
/// than transport ones.
async fn handle_orders(
    State(state): State<AppState>,
    Query(params): Query<OrderQuery>,
) -> impl IntoResponse {
    let Some(order_number) = params.oid.as_deref().and_then(parse_order_code) else {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": false, "message": "Invalid order ID format"})),
        )
            .into_response();
    };

    let raw_order = match state.orders.find_by_number(order_number).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Json(json!({"status": false})).into_response(),
        Err(e) => {
            tracing::error!("Shopify API error: {}", e);
            let status = e
                .upstream_status()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            return (
                status,
                Json(json!({"status": false, "message": "Error fetching order from Shopify"})),
            )
                .into_response();
        }
    };

    match transform_order(&raw_order) {
        Ok(result) => Json(result).into_response(),
        Err(e) => {
            tracing::error!("Error transforming order data: {}", e);
            Json(json!({"status": false, "error": "Error processing order data"})).into_response()
        }
    }
}

/// Validate the code prefix and pull out the human-facing order number.
/// The trailing random segment is ignored.
fn parse_order_code(oid: &str) -> Option<&str> {
    if !oid.starts_with(ORDER_CODE_PREFIX) {
        return None;
    }
    oid.split('-').nth(1)
}
