use super::{CatalogConnection, TableStructure};
use tracing::{debug, warn};

/// 获取表列表，失败时记录警告并返回空列表
pub async fn list_tables<C>(conn: &mut C) -> Vec<String>
where
    C: CatalogConnection,
{
    match conn.list_tables().await {
        Ok(tables) => tables,
        Err(e) => {
            warn!("⚠️  获取表列表失败: {}", e);
            Vec::new()
        }
    }
}

/// 读取一张表的结构快照
///
/// 列、索引、建表语句三个查询相互独立：任何一个失败只会让对应字段
/// 退化为空（或 `None`），并记录警告，不会中断整体流程。
pub async fn read_structure<C>(conn: &mut C, table: &str) -> TableStructure
where
    C: CatalogConnection,
{
    let columns = conn.describe_columns(table).await.unwrap_or_else(|e| {
        warn!("⚠️  读取表 {} 的列定义失败: {}", table, e);
        Vec::new()
    });

    let indexes = conn.describe_indexes(table).await.unwrap_or_else(|e| {
        warn!("⚠️  读取表 {} 的索引失败: {}", table, e);
        Vec::new()
    });

    let create_statement = conn.show_create_table(table).await.unwrap_or_else(|e| {
        warn!("⚠️  读取表 {} 的建表语句失败: {}", table, e);
        None
    });

    debug!(
        "表 {}: {} 列, {} 个索引条目, 建表语句{}",
        table,
        columns.len(),
        indexes.len(),
        if create_statement.is_some() { "已获取" } else { "缺失" }
    );

    TableStructure {
        columns,
        indexes,
        create_statement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::{Failure, MemoryCatalog, column};

    fn users_catalog() -> MemoryCatalog {
        MemoryCatalog::new().with_table(
            "users",
            vec![
                column("id", "int(11)", false, None, "auto_increment"),
                column("email", "varchar(255)", true, None, ""),
            ],
        )
    }

    #[tokio::test]
    async fn test_read_structure_collects_all_fields() {
        let mut catalog = users_catalog();

        let structure = read_structure(&mut catalog, "users").await;

        assert_eq!(structure.columns.len(), 2);
        assert_eq!(structure.columns[0].name, "id");
        assert_eq!(structure.indexes.len(), 1);
        assert!(structure.indexes[0].is_primary());
        assert!(
            structure
                .create_statement
                .as_deref()
                .unwrap()
                .starts_with("CREATE TABLE `users`")
        );
    }

    #[tokio::test]
    async fn test_column_failure_degrades_only_columns() {
        let mut catalog = users_catalog().failing(Failure::Columns);

        let structure = read_structure(&mut catalog, "users").await;

        assert!(structure.columns.is_empty());
        assert_eq!(structure.indexes.len(), 1);
        assert!(structure.create_statement.is_some());
    }

    #[tokio::test]
    async fn test_index_failure_degrades_only_indexes() {
        let mut catalog = users_catalog().failing(Failure::Indexes);

        let structure = read_structure(&mut catalog, "users").await;

        assert_eq!(structure.columns.len(), 2);
        assert!(structure.indexes.is_empty());
        assert!(structure.create_statement.is_some());
    }

    #[tokio::test]
    async fn test_create_statement_failure_degrades_to_none() {
        let mut catalog = users_catalog().failing(Failure::CreateStatement);

        let structure = read_structure(&mut catalog, "users").await;

        assert_eq!(structure.columns.len(), 2);
        assert!(structure.create_statement.is_none());
    }

    #[tokio::test]
    async fn test_list_tables_failure_returns_empty() {
        let mut catalog = users_catalog().failing(Failure::ListTables);

        assert!(list_tables(&mut catalog).await.is_empty());
    }

    #[tokio::test]
    async fn test_list_tables_preserves_catalog_order() {
        let mut catalog = MemoryCatalog::new()
            .with_table("zeta", vec![])
            .with_table("alpha", vec![]);

        assert_eq!(list_tables(&mut catalog).await, vec!["zeta", "alpha"]);
    }
}
