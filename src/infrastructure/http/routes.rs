//! HTTP Routes
//!
//! API Endpoints:
//! - /run    POST  处理一个合成任务（同步，响应即结果）
//! - /ping   GET   健康检查（含引擎状态）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/run", post(handlers::run_job))
        .route("/ping", get(handlers::ping))
}
