//! 测试用的内存目录

use super::{CatalogConnection, ColumnDescriptor, IndexDescriptor, KeyRole};
use crate::error::{Result, SchemaError};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// 注入的查询失败
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Failure {
    ListTables,
    Columns,
    Indexes,
    CreateStatement,
}

#[derive(Debug, Clone)]
struct MemoryTable {
    name: String,
    columns: Vec<ColumnDescriptor>,
    create_statement: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    tables: Vec<MemoryTable>,
    failures: HashSet<Failure>,
    closed: Arc<AtomicBool>,
}

pub fn column(
    name: &str,
    declared_type: &str,
    nullable: bool,
    default_value: Option<&str>,
    extra: &str,
) -> ColumnDescriptor {
    ColumnDescriptor {
        name: name.to_string(),
        declared_type: declared_type.to_string(),
        nullable,
        key_role: KeyRole::None,
        default_value: default_value.map(str::to_string),
        extra_attributes: extra.to_string(),
    }
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// 添加一张表，并按列生成建表语句
    pub fn with_table(mut self, name: &str, columns: Vec<ColumnDescriptor>) -> Self {
        let body = columns
            .iter()
            .map(|c| format!("  `{}` {}", c.name, c.declared_type))
            .collect::<Vec<_>>()
            .join(",\n");
        self.tables.push(MemoryTable {
            name: name.to_string(),
            create_statement: Some(format!("CREATE TABLE `{name}` (\n{body}\n) ENGINE=InnoDB")),
            columns,
        });
        self
    }

    pub fn without_create_statement(mut self, name: &str) -> Self {
        if let Some(table) = self.tables.iter_mut().find(|t| t.name == name) {
            table.create_statement = None;
        }
        self
    }

    pub fn failing(mut self, failure: Failure) -> Self {
        self.failures.insert(failure);
        self
    }

    /// `close()` 执行后置为 true
    pub fn close_flag(&self) -> Arc<AtomicBool> {
        self.closed.clone()
    }

    fn table(&self, name: &str) -> Option<&MemoryTable> {
        self.tables.iter().find(|t| t.name == name)
    }

    fn injected(&self, failure: Failure, table: &str, query: &'static str) -> Result<()> {
        if self.failures.contains(&failure) {
            return Err(SchemaError::MetadataQuery {
                table: table.to_string(),
                query,
                source: sqlx::Error::Protocol("injected failure".to_string()),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl CatalogConnection for MemoryCatalog {
    async fn list_tables(&mut self) -> Result<Vec<String>> {
        if self.failures.contains(&Failure::ListTables) {
            return Err(SchemaError::ListTables(sqlx::Error::Protocol(
                "injected failure".to_string(),
            )));
        }
        Ok(self.tables.iter().map(|t| t.name.clone()).collect())
    }

    async fn describe_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.injected(Failure::Columns, table, "columns")?;
        Ok(self
            .table(table)
            .map(|t| t.columns.clone())
            .unwrap_or_default())
    }

    async fn describe_indexes(&mut self, table: &str) -> Result<Vec<IndexDescriptor>> {
        self.injected(Failure::Indexes, table, "indexes")?;
        let Some(first) = self.table(table).and_then(|t| t.columns.first()) else {
            return Ok(Vec::new());
        };
        Ok(vec![IndexDescriptor {
            table: table.to_string(),
            non_unique: false,
            index_name: "PRIMARY".to_string(),
            seq_in_index: 1,
            column_name: Some(first.name.clone()),
            collation: Some("A".to_string()),
            cardinality: Some(0),
            sub_part: None,
            packed: None,
            nullable: false,
            index_type: "BTREE".to_string(),
        }])
    }

    async fn show_create_table(&mut self, table: &str) -> Result<Option<String>> {
        self.injected(Failure::CreateStatement, table, "create")?;
        Ok(self.table(table).and_then(|t| t.create_statement.clone()))
    }

    async fn close(self) -> Result<()> {
        self.closed.store(true, Ordering::SeqCst);
        Ok(())
    }
}
