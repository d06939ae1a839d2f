//! 产品数据模型

use serde::{Deserialize, Serialize};

/// 已持久化的产品，`id` 由存储层分配
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "database", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: f64,
}

/// 创建/更新请求体
///
/// 所有字段都可省略：name/description 缺省为 null，price 缺省为 0.0。
/// 请求体中的 `id` 等未知字段会被忽略。
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPayload {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: f64,
}

/// 交给存储层保存的记录
///
/// `id` 为 `None` 时由存储层分配新 id；为 `Some` 时覆盖该 id 的记录。
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: f64,
}

impl ProductRecord {
    /// 用请求体覆盖 name、description、price，保留 id
    pub fn apply(&mut self, payload: ProductPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
    }

    /// 以分配好的 id 生成持久化后的产品
    pub fn into_product(self, id: i64) -> Product {
        Product {
            id,
            name: self.name,
            description: self.description,
            price: self.price,
        }
    }
}

impl From<ProductPayload> for ProductRecord {
    fn from(payload: ProductPayload) -> Self {
        Self {
            id: None,
            name: payload.name,
            description: payload.description,
            price: payload.price,
        }
    }
}

impl From<Product> for ProductRecord {
    fn from(product: Product) -> Self {
        Self {
            id: Some(product.id),
            name: product.name,
            description: product.description,
            price: product.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_ignores_client_id() {
        let payload: ProductPayload = serde_json::from_str(
            r#"{"id":42,"name":"Pen","description":"Blue ink","price":1.5}"#,
        )
        .unwrap();

        let record = ProductRecord::from(payload);
        assert_eq!(record.id, None);
        assert_eq!(record.name.as_deref(), Some("Pen"));
        assert_eq!(record.description.as_deref(), Some("Blue ink"));
    }

    #[test]
    fn test_payload_description_optional() {
        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":"Pen","price":2.0}"#).unwrap();
        assert!(payload.description.is_none());
    }

    #[test]
    fn test_payload_fields_default() {
        let payload: ProductPayload = serde_json::from_str(r#"{"description":"x"}"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.price, 0.0);

        let payload: ProductPayload =
            serde_json::from_str(r#"{"name":null,"price":1.0}"#).unwrap();
        assert_eq!(payload.name, None);
        assert_eq!(payload.price, 1.0);
    }

    #[test]
    fn test_apply_keeps_id() {
        let existing = Product {
            id: 7,
            name: Some("Pen".to_string()),
            description: Some("Blue ink".to_string()),
            price: 1.5,
        };

        let mut record = ProductRecord::from(existing);
        record.apply(ProductPayload {
            name: Some("Pencil".to_string()),
            description: None,
            price: 0.5,
        });

        assert_eq!(record.id, Some(7));
        assert_eq!(record.name.as_deref(), Some("Pencil"));
        assert_eq!(record.description, None);
        assert_eq!(record.price, 0.5);
    }
}
