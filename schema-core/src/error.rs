use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SchemaError>;

#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("无法连接到数据库 {host}:{port}: {source}")]
    Connection {
        host: String,
        port: u16,
        #[source]
        source: sqlx::Error,
    },

    #[error("连接数据库 {host}:{port} 超时 ({timeout_secs}秒)")]
    ConnectTimeout {
        host: String,
        port: u16,
        timeout_secs: u64,
    },

    #[error("读取表 {table} 的元数据失败 ({query}): {source}")]
    MetadataQuery {
        table: String,
        query: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("获取表列表失败: {0}")]
    ListTables(#[source] sqlx::Error),

    #[error("关闭数据库连接失败: {0}")]
    Close(#[source] sqlx::Error),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置解析错误: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("配置文件未找到: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("配置错误: {0}")]
    Config(String),

    #[error("静态文件服务错误: {0}")]
    Server(String),
}

impl SchemaError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// 连接类错误会中止整个比对流程
    pub fn is_connection_failure(&self) -> bool {
        matches!(
            self,
            SchemaError::Connection { .. } | SchemaError::ConnectTimeout { .. }
        )
    }
}
