//! 内存存储实现

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::model::{Product, ProductRecord};
use super::repository::{ProductRepository, RepositoryError, RepositoryResult};

#[derive(Debug)]
struct Table {
    rows: BTreeMap<i64, Product>,
    next_id: i64,
}

/// 基于 `BTreeMap` 的产品仓储，id 从 1 开始递增且不复用
#[derive(Debug)]
pub struct MemoryProductRepository {
    table: RwLock<Table>,
}

impl MemoryProductRepository {
    pub fn new() -> Self {
        Self {
            table: RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for MemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductRepository for MemoryProductRepository {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn save(&self, record: ProductRecord) -> RepositoryResult<Product> {
        let mut table = self.table.write().await;

        let id = match record.id {
            Some(id) => {
                // 显式 id 插入后，后续分配的 id 必须跳过它
                if id >= table.next_id {
                    table.next_id = id.saturating_add(1);
                }
                id
            }
            None => {
                let id = table.next_id;
                table.next_id += 1;
                id
            }
        };

        let product = record.into_product(id);
        table.rows.insert(id, product.clone());
        Ok(product)
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        let table = self.table.read().await;
        Ok(table.rows.contains_key(&id))
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let mut table = self.table.write().await;
        table
            .rows
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, price: f64) -> ProductRecord {
        ProductRecord {
            id: None,
            name: Some(name.to_string()),
            description: None,
            price,
        }
    }

    #[tokio::test]
    async fn test_save_assigns_sequential_ids() {
        let repo = MemoryProductRepository::new();

        let a = repo.save(record("Pen", 1.5)).await.unwrap();
        let b = repo.save(record("Ink", 3.0)).await.unwrap();

        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
        assert_eq!(repo.list_all().await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = MemoryProductRepository::new();

        let first = repo.save(record("Pen", 1.5)).await.unwrap();
        repo.delete_by_id(first.id).await.unwrap();
        let second = repo.save(record("Pen", 1.5)).await.unwrap();

        assert_ne!(first.id, second.id);
    }

    #[tokio::test]
    async fn test_save_with_id_overwrites() {
        let repo = MemoryProductRepository::new();
        let saved = repo.save(record("Pen", 1.5)).await.unwrap();

        let mut update = ProductRecord::from(saved.clone());
        update.name = Some("Pencil".to_string());
        let updated = repo.save(update).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
        assert_eq!(
            repo.find_by_id(saved.id).await.unwrap().unwrap().name.as_deref(),
            Some("Pencil")
        );
    }

    #[tokio::test]
    async fn test_upsert_with_unknown_id_advances_counter() {
        let repo = MemoryProductRepository::new();

        let mut explicit = record("Pen", 1.5);
        explicit.id = Some(10);
        repo.save(explicit).await.unwrap();

        let next = repo.save(record("Ink", 3.0)).await.unwrap();
        assert_eq!(next.id, 11);
    }

    #[tokio::test]
    async fn test_upsert_with_max_id_does_not_overflow() {
        let repo = MemoryProductRepository::new();

        let mut explicit = record("Pen", 1.5);
        explicit.id = Some(i64::MAX);
        let saved = repo.save(explicit).await.unwrap();

        assert_eq!(saved.id, i64::MAX);
        assert!(repo.exists(i64::MAX).await.unwrap());
    }

    #[tokio::test]
    async fn test_exists_and_delete_missing() {
        let repo = MemoryProductRepository::new();

        assert!(!repo.exists(1).await.unwrap());
        assert!(matches!(
            repo.delete_by_id(1).await,
            Err(RepositoryError::NotFound(1))
        ));
        assert!(repo.find_by_id(1).await.unwrap().is_none());
    }
}
