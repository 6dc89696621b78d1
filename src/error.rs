//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("顶点不存在: {0}")]
    VertexNotFound(String),
}

impl Error {
    /// 根据缺失的顶点键构造 VertexNotFound
    pub fn vertex_not_found(key: &impl std::fmt::Debug) -> Self {
        Error::VertexNotFound(format!("{:?}", key))
    }
}
