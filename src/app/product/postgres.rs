//! PostgreSQL 存储实现

use async_trait::async_trait;
use sqlx::postgres::PgPool;
use tracing::debug;

use super::model::{Product, ProductRecord};
use super::repository::{ProductRepository, RepositoryError, RepositoryResult};

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 创建 products 表（已存在时跳过）
    pub async fn create_table(&self) -> Result<(), sqlx::Error> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id BIGSERIAL PRIMARY KEY,
                name TEXT,
                description TEXT,
                price DOUBLE PRECISION NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn insert(&self, record: &ProductRecord) -> RepositoryResult<Product> {
        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (name, description, price) VALUES ($1, $2, $3) \
             RETURNING id, name, description, price",
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .fetch_one(&self.pool)
        .await?;

        Ok(product)
    }

    async fn upsert(&self, id: i64, record: &ProductRecord) -> RepositoryResult<Product> {
        let updated = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $1, description = $2, price = $3 WHERE id = $4 \
             RETURNING id, name, description, price",
        )
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(product) = updated {
            return Ok(product);
        }

        debug!("product {} absent, inserting with explicit id", id);

        let product = sqlx::query_as::<_, Product>(
            "INSERT INTO products (id, name, description, price) VALUES ($1, $2, $3, $4) \
             ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name, \
             description = EXCLUDED.description, price = EXCLUDED.price \
             RETURNING id, name, description, price",
        )
        .bind(id)
        .bind(&record.name)
        .bind(&record.description)
        .bind(record.price)
        .fetch_one(&self.pool)
        .await?;

        // 显式 id 不经过序列，需要把序列推进到当前最大 id
        sqlx::query(
            "SELECT setval(pg_get_serial_sequence('products', 'id'), \
             (SELECT MAX(id) FROM products))",
        )
        .execute(&self.pool)
        .await?;

        Ok(product)
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    fn backend(&self) -> &'static str {
        "postgres"
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, description, price FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    async fn save(&self, record: ProductRecord) -> RepositoryResult<Product> {
        match record.id {
            Some(id) => self.upsert(id, &record).await,
            None => self.insert(&record).await,
        }
    }

    async fn exists(&self, id: i64) -> RepositoryResult<bool> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM products WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;

        Ok(exists)
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<()> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(id));
        }

        Ok(())
    }
}
