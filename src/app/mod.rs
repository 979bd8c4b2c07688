//! 应用层模块

pub mod products;

use axum::{middleware, routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::core::error::CoreError;
use crate::core::middleware::request_logging_middleware;
use products::handler::{self, AppState};

/// 组装完整路由
///
/// 产品路由 + 健康检查 + CORS/追踪/请求日志中间件 + 统一 404 兜底。
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handler::health_check))
        .route(
            "/api/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/api/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .route(
            "/api/products/price/:min_price/:max_price",
            get(handler::filter_products_by_price),
        )
        .fallback(route_not_found)
        .layer(middleware::from_fn(request_logging_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// 未匹配的 method+path 统一返回 404
async fn route_not_found() -> CoreError {
    CoreError::RouteNotFound
}
