use anyhow::Context;
use product_crud::infrastructure::{build_repository, config::Config, logger::Logger};
use product_crud::{create_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let _log_guard = Logger::init(&config.logging)?;

    info!("启动产品服务...");

    let products = build_repository(&config.storage).await?;
    let state = AppState::new(products);

    let static_dir = match &config.http.static_dir {
        Some(dir) if dir.is_dir() => Some(dir.as_path()),
        Some(dir) => {
            warn!("静态资源目录 {} 不存在，已忽略", dir.display());
            None
        }
        None => None,
    };

    let app = create_router(state, static_dir);

    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("无法绑定到 {}", addr))?;

    info!("🚀 产品服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /api/products      - 获取所有产品");
    info!("   POST   /api/products      - 创建产品");
    info!("   GET    /api/products/:id  - 获取特定产品");
    info!("   PUT    /api/products/:id  - 更新产品");
    info!("   DELETE /api/products/:id  - 删除产品");
    info!("   GET    /health            - 健康检查");

    axum::serve(listener, app).await.context("服务器运行失败")?;

    Ok(())
}
