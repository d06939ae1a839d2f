//! 产品模块：模型、仓储与处理器

pub mod handler;
pub mod memory;
pub mod model;
#[cfg(feature = "database")]
pub mod postgres;
pub mod repository;

use axum::{routing::get, Router};

use super::AppState;

/// 产品路由，挂载在 `/api/products` 下
pub fn routes() -> Router<AppState> {
    Router::new()
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
}
