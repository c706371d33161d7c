//! Ping Handler
//!
//! 健康检查端点，附带引擎可用性

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub engine_ready: bool,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
pub async fn ping(State(state): State<Arc<AppState>>) -> Json<PingResponse> {
    let engine_ready = state.engine.health_check().await;
    Json(PingResponse {
        status: if engine_ready { "ok" } else { "degraded" },
        engine_ready,
        version: env!("CARGO_PKG_VERSION"),
    })
}
