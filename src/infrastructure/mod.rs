//! 基础设施层：配置、日志、数据库连接

pub mod config;
#[cfg(feature = "database")]
pub mod database;
pub mod logger;

use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use crate::app::product::memory::MemoryProductRepository;
use crate::app::product::repository::ProductRepository;
use config::{StorageBackend, StorageConfig};

/// 根据配置构造产品仓储
pub async fn build_repository(config: &StorageConfig) -> Result<Arc<dyn ProductRepository>> {
    match config.backend {
        StorageBackend::Memory => {
            info!("使用内存存储");
            Ok(Arc::new(MemoryProductRepository::new()))
        }
        #[cfg(feature = "database")]
        StorageBackend::Postgres => {
            use crate::app::product::postgres::PgProductRepository;

            let url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("postgres 存储需要配置 database_url"))?;
            let manager = database::DatabaseManager::new(url, config).await?;
            let repository = PgProductRepository::new(manager.get_pool().clone());
            repository.create_table().await?;

            info!("使用 PostgreSQL 存储");
            Ok(Arc::new(repository))
        }
        #[cfg(not(feature = "database"))]
        StorageBackend::Postgres => {
            anyhow::bail!("postgres 存储需要启用 `database` feature")
        }
    }
}
