//! 产品处理器

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::info;

use super::model::{Product, ProductPayload, ProductRecord};
use crate::app::AppState;
use crate::core::error::CoreError;

/// 获取所有产品
pub async fn list_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, CoreError> {
    let products = state.products.list_all().await?;
    Ok(Json(products))
}

/// 获取特定产品
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Product>, CoreError> {
    state
        .products
        .find_by_id(id)
        .await?
        .map(Json)
        .ok_or(CoreError::NotFound)
}

/// 创建产品
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Result<(StatusCode, Json<Product>), CoreError> {
    let product = state.products.save(ProductRecord::from(payload)).await?;

    info!("Created product: {:?} ({})", product.name, product.id);

    Ok((StatusCode::CREATED, Json(product)))
}

/// 更新产品：读取现有记录，覆盖 name/description/price 后保存
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<ProductPayload>,
) -> Result<Json<Product>, CoreError> {
    let existing = state
        .products
        .find_by_id(id)
        .await?
        .ok_or(CoreError::NotFound)?;

    let mut record = ProductRecord::from(existing);
    record.apply(payload);
    let product = state.products.save(record).await?;

    info!("Updated product: {:?} ({})", product.name, product.id);

    Ok(Json(product))
}

/// 删除产品
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, CoreError> {
    if !state.products.exists(id).await? {
        return Err(CoreError::NotFound);
    }

    state.products.delete_by_id(id).await?;

    info!("Deleted product: {}", id);

    Ok(StatusCode::NO_CONTENT)
}
