//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 产品记录
///
/// `id` 由服务端分配，在所有存活记录中唯一。
/// `price` 和 `stock` 不做符号或范围校验。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    pub stock: i64,
}

/// 创建产品请求
///
/// 所有字段在反序列化层面都是可选的，是否缺失由服务层判断，
/// 这样缺字段得到的是 400 业务错误而不是反序列化失败。
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// 更新产品请求
///
/// 部分更新：只覆盖显式提供的字段。空字符串的 name 视为未提供，
/// price/stock 只要出现就覆盖，包括 0。
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i64>,
}

/// 价格区间查询响应
#[derive(Serialize)]
pub struct PriceRangeResponse {
    pub success: bool,
    #[serde(rename = "priceRange")]
    pub price_range: PriceRange,
    pub data: Vec<Product>,
    pub count: usize,
}

/// 回显的区间参数，保持路径中的原始字符串
#[derive(Serialize)]
pub struct PriceRange {
    #[serde(rename = "minPrice")]
    pub min_price: String,
    #[serde(rename = "maxPrice")]
    pub max_price: String,
}
