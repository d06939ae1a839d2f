//! 核心错误处理模块

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::app::product::repository::RepositoryError;

/// 核心错误类型
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// 资源不存在，响应 404 且无响应体
    #[error("资源不存在")]
    NotFound,
    #[error(transparent)]
    Repository(RepositoryError),
}

/// 错误响应结构
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub code: u16,
    pub timestamp: String,
}

impl From<RepositoryError> for CoreError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(_) => CoreError::NotFound,
            #[cfg(feature = "database")]
            err @ RepositoryError::Database(_) => CoreError::Repository(err),
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        match self {
            CoreError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CoreError::Repository(err) => {
                error!("存储层错误: {}", err);

                let status = StatusCode::INTERNAL_SERVER_ERROR;
                let error_response = ErrorResponse {
                    error: "INTERNAL_SERVER_ERROR".to_string(),
                    message: "Internal server error".to_string(),
                    code: status.as_u16(),
                    timestamp: chrono::Utc::now().to_rfc3339(),
                };

                (status, Json(error_response)).into_response()
            }
        }
    }
}
