use shared::error::AppError;
use thiserror::Error;

use crate::auth::JwtError;
use crate::services::ServiceError;

/// Errors that stop the server from starting or keep it from serving
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("数据库错误: {0}")]
    Database(#[source] AppError),

    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("监听失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<JwtError> for ServerError {
    fn from(e: JwtError) -> Self {
        ServerError::Config(e.to_string())
    }
}

/// 服务器启动的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
