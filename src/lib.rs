//! # 产品 CRUD 服务
//!
//! 基于 Axum 的单资源 REST 服务，分层结构：
//! - `app`：路由、处理器、产品模型与仓储
//! - `core`：错误处理与中间件
//! - `infrastructure`：配置、日志、数据库连接

pub mod app;
pub mod core;
pub mod infrastructure;

pub use app::{create_router, AppState};
pub use app::product::model::{Product, ProductPayload, ProductRecord};
pub use app::product::repository::{ProductRepository, RepositoryError};
