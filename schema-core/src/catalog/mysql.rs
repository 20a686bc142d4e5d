use super::{CatalogConnection, ColumnDescriptor, IndexDescriptor, KeyRole};
use crate::config::DatabaseConfig;
use crate::error::{Result, SchemaError};
use async_trait::async_trait;
use sqlx::{Connection, MySqlConnection, Row};
use std::time::Duration;
use tracing::debug;

// information_schema 的字符串列在 MySQL 8 中可能是二进制排序规则，
// 统一 CAST 成 CHAR / SIGNED 以便按 String / i64 解码。

const LIST_TABLES_SQL: &str = r#"
SELECT CAST(TABLE_NAME AS CHAR) AS table_name
FROM information_schema.TABLES
WHERE TABLE_SCHEMA = DATABASE()
ORDER BY TABLE_NAME
"#;

const DESCRIBE_COLUMNS_SQL: &str = r#"
SELECT
    CAST(COLUMN_NAME AS CHAR)    AS field,
    CAST(COLUMN_TYPE AS CHAR)    AS column_type,
    CAST(IS_NULLABLE AS CHAR)    AS is_nullable,
    CAST(COLUMN_KEY AS CHAR)     AS column_key,
    CAST(COLUMN_DEFAULT AS CHAR) AS column_default,
    CAST(EXTRA AS CHAR)          AS extra
FROM information_schema.COLUMNS
WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
ORDER BY ORDINAL_POSITION
"#;

const DESCRIBE_INDEXES_SQL: &str = r#"
SELECT
    CAST(TABLE_NAME AS CHAR)     AS table_name,
    CAST(NON_UNIQUE AS SIGNED)   AS non_unique,
    CAST(INDEX_NAME AS CHAR)     AS index_name,
    CAST(SEQ_IN_INDEX AS SIGNED) AS seq_in_index,
    CAST(COLUMN_NAME AS CHAR)    AS column_name,
    CAST(COLLATION AS CHAR)      AS collation,
    CAST(CARDINALITY AS SIGNED)  AS cardinality,
    CAST(SUB_PART AS SIGNED)     AS sub_part,
    CAST(PACKED AS CHAR)         AS packed,
    CAST(NULLABLE AS CHAR)       AS nullable,
    CAST(INDEX_TYPE AS CHAR)     AS index_type
FROM information_schema.STATISTICS
WHERE TABLE_SCHEMA = DATABASE() AND TABLE_NAME = ?
ORDER BY INDEX_NAME, SEQ_IN_INDEX
"#;

/// `DESCRIBE` 等价查询的原始行
#[derive(Debug, sqlx::FromRow)]
struct ColumnRow {
    field: String,
    column_type: String,
    is_nullable: String,
    column_key: Option<String>,
    column_default: Option<String>,
    extra: Option<String>,
}

impl From<ColumnRow> for ColumnDescriptor {
    fn from(row: ColumnRow) -> Self {
        ColumnDescriptor {
            name: row.field,
            declared_type: row.column_type,
            nullable: row.is_nullable.eq_ignore_ascii_case("YES"),
            key_role: KeyRole::from_catalog(row.column_key.as_deref().unwrap_or_default()),
            default_value: row.column_default,
            extra_attributes: row.extra.unwrap_or_default(),
        }
    }
}

/// `SHOW INDEX` 等价查询的原始行
#[derive(Debug, sqlx::FromRow)]
struct IndexRow {
    table_name: String,
    non_unique: i64,
    index_name: String,
    seq_in_index: i64,
    column_name: Option<String>,
    collation: Option<String>,
    cardinality: Option<i64>,
    sub_part: Option<i64>,
    packed: Option<String>,
    nullable: Option<String>,
    index_type: Option<String>,
}

impl From<IndexRow> for IndexDescriptor {
    fn from(row: IndexRow) -> Self {
        IndexDescriptor {
            table: row.table_name,
            non_unique: row.non_unique != 0,
            index_name: row.index_name,
            seq_in_index: u32::try_from(row.seq_in_index).unwrap_or_default(),
            column_name: row.column_name,
            collation: row.collation,
            cardinality: row.cardinality,
            sub_part: row.sub_part,
            packed: row.packed,
            nullable: row
                .nullable
                .is_some_and(|v| v.eq_ignore_ascii_case("YES")),
            index_type: row.index_type.unwrap_or_default(),
        }
    }
}

/// 反引号包裹标识符，内部的反引号加倍
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

/// 基于单条 sqlx 连接的 MySQL 目录
#[derive(Debug)]
pub struct MySqlCatalog {
    conn: MySqlConnection,
    address: String,
}

impl MySqlCatalog {
    /// 建立连接，超时或失败都视为连接错误
    pub async fn connect(config: &DatabaseConfig, timeout: Duration) -> Result<Self> {
        let options = config.connect_options();
        let conn = match tokio::time::timeout(timeout, MySqlConnection::connect_with(&options)).await
        {
            Ok(Ok(conn)) => conn,
            Ok(Err(source)) => {
                return Err(SchemaError::Connection {
                    host: config.host.clone(),
                    port: config.port,
                    source,
                });
            }
            Err(_) => {
                return Err(SchemaError::ConnectTimeout {
                    host: config.host.clone(),
                    port: config.port,
                    timeout_secs: timeout.as_secs(),
                });
            }
        };

        let address = config.display_address();
        debug!("已连接: {}", address);
        Ok(Self { conn, address })
    }
}

#[async_trait]
impl CatalogConnection for MySqlCatalog {
    async fn list_tables(&mut self) -> Result<Vec<String>> {
        let rows = sqlx::query(LIST_TABLES_SQL)
            .fetch_all(&mut self.conn)
            .await
            .map_err(SchemaError::ListTables)?;

        rows.iter()
            .map(|row| row.try_get::<String, _>("table_name"))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(SchemaError::ListTables)
    }

    async fn describe_columns(&mut self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows: Vec<ColumnRow> = sqlx::query_as(DESCRIBE_COLUMNS_SQL)
            .bind(table)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| SchemaError::MetadataQuery {
                table: table.to_string(),
                query: "DESCRIBE",
                source,
            })?;

        Ok(rows.into_iter().map(ColumnDescriptor::from).collect())
    }

    async fn describe_indexes(&mut self, table: &str) -> Result<Vec<IndexDescriptor>> {
        let rows: Vec<IndexRow> = sqlx::query_as(DESCRIBE_INDEXES_SQL)
            .bind(table)
            .fetch_all(&mut self.conn)
            .await
            .map_err(|source| SchemaError::MetadataQuery {
                table: table.to_string(),
                query: "SHOW INDEX",
                source,
            })?;

        Ok(rows.into_iter().map(IndexDescriptor::from).collect())
    }

    async fn show_create_table(&mut self, table: &str) -> Result<Option<String>> {
        let sql = format!("SHOW CREATE TABLE {}", quote_identifier(table));
        let to_error = |source| SchemaError::MetadataQuery {
            table: table.to_string(),
            query: "SHOW CREATE TABLE",
            source,
        };

        let row = sqlx::query(&sql)
            .fetch_optional(&mut self.conn)
            .await
            .map_err(to_error)?;

        // 第二列是建表语句（视图同样如此）
        row.map(|row| row.try_get::<String, _>(1))
            .transpose()
            .map_err(to_error)
    }

    async fn close(self) -> Result<()> {
        debug!("关闭连接: {}", self.address);
        self.conn.close().await.map_err(SchemaError::Close)
    }
}
