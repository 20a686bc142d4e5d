/// 列在目录中的键角色（仅用于展示，不参与差异比较）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyRole {
    Primary,
    Unique,
    Multiple,
    #[default]
    None,
}

impl KeyRole {
    /// 解析 `COLUMN_KEY` / `DESCRIBE` 中的 Key 字段
    pub fn from_catalog(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "PRI" => KeyRole::Primary,
            "UNI" => KeyRole::Unique,
            "MUL" => KeyRole::Multiple,
            _ => KeyRole::None,
        }
    }
}

/// 表列定义
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub name: String,
    /// 目录报告的原始类型，例如 `varchar(255)`，逐字比较
    pub declared_type: String,
    pub nullable: bool,
    pub key_role: KeyRole,
    /// `None` 表示没有默认值，与显式默认值区分
    pub default_value: Option<String>,
    pub extra_attributes: String,
}

impl ColumnDescriptor {
    pub fn is_auto_increment(&self) -> bool {
        self.extra_attributes
            .to_ascii_lowercase()
            .contains("auto_increment")
    }

    /// 结构性比较：类型、可空性、默认值
    pub fn same_definition(&self, other: &ColumnDescriptor) -> bool {
        self.declared_type == other.declared_type
            && self.nullable == other.nullable
            && self.default_value == other.default_value
    }
}

/// 表索引条目，每个 (索引名, 列, 序号) 一条
///
/// 目前只收集，不参与差异计算。
#[derive(Debug, Clone, PartialEq)]
pub struct IndexDescriptor {
    pub table: String,
    pub non_unique: bool,
    pub index_name: String,
    pub seq_in_index: u32,
    pub column_name: Option<String>,
    pub collation: Option<String>,
    pub cardinality: Option<i64>,
    pub sub_part: Option<i64>,
    pub packed: Option<String>,
    pub nullable: bool,
    pub index_type: String,
}

impl IndexDescriptor {
    pub fn is_unique(&self) -> bool {
        !self.non_unique
    }

    pub fn is_primary(&self) -> bool {
        self.index_name == "PRIMARY"
    }
}

/// 表结构快照
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableStructure {
    pub columns: Vec<ColumnDescriptor>,
    pub indexes: Vec<IndexDescriptor>,
    /// 源库报告的完整 `CREATE TABLE` 语句，读取失败时为 `None`
    pub create_statement: Option<String>,
}
