//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::info;

/// 请求日志中间件
///
/// 记录方法、路径、状态码和耗时。失败的请求（400/404）与正常请求
/// 以相同方式记录，不单独输出错误日志。
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let status = response.status();
    let duration = start.elapsed();

    info!("{} {} - {} - {}ms", method, uri, status, duration.as_millis());

    response
}
