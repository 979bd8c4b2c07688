//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// 核心错误类型
///
/// 每个变体对应一种对外可见的失败：
/// - `BadRequest`: 创建时缺少必填字段
/// - `NotFound`: 按 id 查找不到产品
/// - `RouteNotFound`: 没有处理器匹配 method+path
#[derive(Debug)]
pub enum CoreError {
    BadRequest(String),
    NotFound(String),
    RouteNotFound,
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CoreError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            CoreError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CoreError::RouteNotFound => (StatusCode::NOT_FOUND, "Route not found".to_string()),
        };

        let body = ErrorResponse {
            success: false,
            error: message,
        };

        (status, axum::Json(body)).into_response()
    }
}
