//! 产品数据访问层

use async_trait::async_trait;

use super::model::{Product, ProductRecord};

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("产品 {0} 不存在")]
    NotFound(i64),
    #[cfg(feature = "database")]
    #[error("数据库错误: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// 产品仓储接口
///
/// 启动时显式构造具体实现，并通过 `AppState` 注入到处理器。
#[async_trait]
pub trait ProductRepository: Send + Sync + 'static {
    /// 存储后端名称，用于健康检查
    fn backend(&self) -> &'static str;

    /// 返回全部产品，按 id 升序
    async fn list_all(&self) -> RepositoryResult<Vec<Product>>;

    /// 按 id 查找，不存在时返回 `None`
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    /// 保存记录：`id` 为空时插入并分配新 id，否则整体覆盖该 id 的记录
    async fn save(&self, record: ProductRecord) -> RepositoryResult<Product>;

    async fn exists(&self, id: i64) -> RepositoryResult<bool>;

    /// 删除记录；id 不存在时返回 `RepositoryError::NotFound`
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()>;
}
