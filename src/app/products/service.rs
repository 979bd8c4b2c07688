//! 产品业务服务

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::model::{CreateProductRequest, Product, UpdateProductRequest};
use crate::core::error::CoreError;

/// 产品服务
///
/// 持有进程内的有序产品列表，是列表唯一的访问入口。
/// 列表按插入顺序保存并以该顺序对外返回；没有二级索引，
/// 所有按 id 的查找都是线性扫描。每个操作在一次短临界区内完成，
/// 临界区内没有 await 点，用标准库 Mutex 即可。
#[derive(Clone)]
pub struct ProductService {
    products: Arc<Mutex<Vec<Product>>>,
}

impl ProductService {
    /// 创建空服务
    pub fn new() -> Self {
        Self {
            products: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// 创建带启动种子数据的服务（id 1-3）
    pub fn with_seed_data() -> Self {
        let service = Self::new();
        {
            let mut products = service.lock();
            products.push(Product {
                id: 1,
                name: "Laptop".to_string(),
                price: 50000.0,
                stock: 10,
            });
            products.push(Product {
                id: 2,
                name: "Phone".to_string(),
                price: 25000.0,
                stock: 20,
            });
            products.push(Product {
                id: 3,
                name: "Headphones".to_string(),
                price: 5000.0,
                stock: 50,
            });
        }
        service
    }

    // 锁中毒时直接恢复：任何操作都不会让列表处于中间状态，
    // 一个失败的请求不能影响后续请求
    fn lock(&self) -> MutexGuard<'_, Vec<Product>> {
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 获取全部产品（插入顺序）
    pub fn list_products(&self) -> Vec<Product> {
        self.lock().clone()
    }

    /// 按 id 获取产品
    pub fn get_product(&self, id: u64) -> Result<Product, CoreError> {
        let products = self.lock();
        find_by_id(&products, id)
            .map(|index| products[index].clone())
            .ok_or_else(not_found)
    }

    /// 创建产品
    ///
    /// name 缺失或为空、price/stock 缺失时拒绝；0 是合法值。
    /// 新 id = 现有最大 id + 1，列表为空时为 1。
    pub fn create_product(&self, request: CreateProductRequest) -> Result<Product, CoreError> {
        let name = match request.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(invalid_input()),
        };
        let (Some(price), Some(stock)) = (request.price, request.stock) else {
            return Err(invalid_input());
        };

        let mut products = self.lock();
        let product = Product {
            id: next_id(&products),
            name,
            price,
            stock,
        };
        products.push(product.clone());
        Ok(product)
    }

    /// 更新产品（部分更新）
    pub fn update_product(
        &self,
        id: u64,
        request: UpdateProductRequest,
    ) -> Result<Product, CoreError> {
        let mut products = self.lock();
        let index = find_by_id(&products, id).ok_or_else(not_found)?;
        let product = &mut products[index];

        // 空字符串视为"未提供"，保留旧名称；price/stock 显式出现就覆盖，包括 0
        if let Some(name) = request.name {
            if !name.is_empty() {
                product.name = name;
            }
        }
        if let Some(price) = request.price {
            product.price = price;
        }
        if let Some(stock) = request.stock {
            product.stock = stock;
        }

        Ok(product.clone())
    }

    /// 删除产品，返回被删除的记录
    pub fn delete_product(&self, id: u64) -> Result<Product, CoreError> {
        let mut products = self.lock();
        let index = find_by_id(&products, id).ok_or_else(not_found)?;
        Ok(products.remove(index))
    }

    /// 按价格闭区间 [min, max] 过滤
    ///
    /// 不校验 min <= max，区间颠倒时自然得到空结果。
    pub fn filter_by_price(&self, min_price: i64, max_price: i64) -> Vec<Product> {
        self.lock()
            .iter()
            .filter(|p| p.price >= min_price as f64 && p.price <= max_price as f64)
            .cloned()
            .collect()
    }
}

fn find_by_id(products: &[Product], id: u64) -> Option<usize> {
    products.iter().position(|p| p.id == id)
}

fn next_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

pub(crate) fn not_found() -> CoreError {
    CoreError::NotFound("Product not found".to_string())
}

fn invalid_input() -> CoreError {
    CoreError::BadRequest("Please provide name, price, and stock".to_string())
}
