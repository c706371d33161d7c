//! HTTP Error Handling
//!
//! 未被 Handler 本地恢复的失败在这里呈现给调用方。
//! 结构化拒绝（缺少必填字段）不走这里，它是 200 响应体的一部分。

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 失败通道的响应体
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    ServiceUnavailable(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Bad request");
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(error = %msg, "Engine unavailable");
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::InvalidPayload(msg) => ApiError::BadRequest(msg),
            ApplicationError::Engine(err) => ApiError::ServiceUnavailable(err.to_string()),
        }
    }
}
