//! 产品处理器
//!
//! 处理器只做三件事：提取参数、调用服务、包装响应，
//! 业务规则都在服务层。

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use chrono::Utc;

use super::model::{
    CreateProductRequest, PriceRange, PriceRangeResponse, Product, UpdateProductRequest,
};
use super::service::{self, ProductService};
use crate::core::error::CoreError;
use crate::core::response::ApiResponse;

/// 应用共享状态
#[derive(Clone)]
pub struct AppState {
    pub product_service: ProductService,
}

/// 健康检查
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "Microservice is running",
        "timestamp": Utc::now().to_rfc3339(),
        "service": "Product Management Service"
    }))
}

/// 获取全部产品
pub async fn list_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    let products = state.product_service.list_products();
    let count = products.len();
    Json(ApiResponse::with_count(products, count))
}

/// 按 id 获取产品
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.product_service.get_product(parse_id(&id)?)?;
    Ok(Json(ApiResponse::success(product)))
}

/// 创建产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let product = state.product_service.create_product(payload)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            product,
            "Product created successfully",
        )),
    ))
}

/// 更新产品（部分更新）
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<UpdateProductRequest>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.product_service.update_product(parse_id(&id)?, payload)?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product updated successfully",
    )))
}

/// 删除产品，响应带回被删除的记录
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    let product = state.product_service.delete_product(parse_id(&id)?)?;
    Ok(Json(ApiResponse::with_message(
        product,
        "Product deleted successfully",
    )))
}

/// 按价格区间过滤产品
///
/// 区间参数按路径中的原始字符串回显；无法解析的边界让所有比较
/// 失败，返回空结果而不是报错。
pub async fn filter_products_by_price(
    State(state): State<AppState>,
    Path((min_price, max_price)): Path<(String, String)>,
) -> Json<PriceRangeResponse> {
    let products = match (min_price.parse::<i64>(), max_price.parse::<i64>()) {
        (Ok(min), Ok(max)) => state.product_service.filter_by_price(min, max),
        _ => Vec::new(),
    };
    let count = products.len();

    Json(PriceRangeResponse {
        success: true,
        price_range: PriceRange {
            min_price,
            max_price,
        },
        data: products,
        count,
    })
}

// id 宽松解析：非数字 id 不匹配任何记录，统一按 404 处理而不是 400
fn parse_id(raw: &str) -> Result<u64, CoreError> {
    raw.parse().map_err(|_| service::not_found())
}
