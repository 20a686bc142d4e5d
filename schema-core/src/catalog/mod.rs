// 数据库目录读取模块
//
// 通过 `CatalogConnection` 抽象一条只读的目录连接，
// 由 `reader` 把三类元数据查询组合成 `TableStructure`。
//
// 主要组件：
// - CatalogConnection: 连接能力（列表、列、索引、建表语句、关闭）
// - MySqlCatalog: 基于 sqlx 的 MySQL 实现
// - list_tables / read_structure: 容错的读取入口

mod mysql;
mod reader;
mod types;

#[cfg(test)]
pub(crate) mod memory;

use crate::error::Result;
use async_trait::async_trait;

pub use mysql::MySqlCatalog;
pub(crate) use mysql::quote_identifier;
pub use reader::{list_tables, read_structure};
pub use types::{ColumnDescriptor, IndexDescriptor, KeyRole, TableStructure};

/// 一条已建立的目录连接
///
/// 所有方法只发出只读查询；连接的建立与释放由调用方负责。
#[async_trait]
pub trait CatalogConnection: Send {
    /// 当前库中的表名，按目录返回的顺序
    async fn list_tables(&mut self) -> Result<Vec<String>>;

    /// 表的列定义，按目录中的列顺序
    async fn describe_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>>;

    async fn describe_indexes(&mut self, table: &str) -> Result<Vec<IndexDescriptor>>;

    /// 完整的建表语句；表不存在时为 `None`
    async fn show_create_table(&mut self, table: &str) -> Result<Option<String>>;

    async fn close(self) -> Result<()>
    where
        Self: Sized;
}
