//! 产品管理微服务入口

use tokio::net::TcpListener;
use tracing::info;

use product_service::app::products::handler::AppState;
use product_service::app::products::service::ProductService;
use product_service::app::create_app;
use product_service::config::Config;
use product_service::infrastructure::logger::Logger;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    Logger::init();

    // 加载配置（文件缺失时使用默认值，端口 3000）
    let config = Config::load()?;

    // 创建共享状态并写入种子数据
    let state = AppState {
        product_service: ProductService::with_seed_data(),
    };

    let app = create_app(state);

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;

    info!("🚀 产品管理服务已启动");
    info!("📍 监听地址: http://{}", addr);
    info!("🏥 健康检查: GET /health");
    info!("📦 产品接口:");
    info!("   GET    /api/products                 - 获取全部产品");
    info!("   POST   /api/products                 - 创建产品");
    info!("   GET    /api/products/:id             - 获取单个产品");
    info!("   PUT    /api/products/:id             - 更新产品");
    info!("   DELETE /api/products/:id             - 删除产品");
    info!("   GET    /api/products/price/:min/:max - 按价格区间过滤");

    axum::serve(listener, app).await?;

    Ok(())
}
