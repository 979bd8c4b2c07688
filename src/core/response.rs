//! 核心响应处理模块

use serde::Serialize;

/// API 成功响应结构
///
/// `message` 与 `count` 只在对应操作需要时序列化，
/// 其它操作的响应体中不出现这两个字段。
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
            count: None,
        }
    }

    pub fn with_message(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: Some(message.to_string()),
            data,
            count: None,
        }
    }

    pub fn with_count(data: T, count: usize) -> Self {
        Self {
            success: true,
            message: None,
            data,
            count: Some(count),
        }
    }
}
