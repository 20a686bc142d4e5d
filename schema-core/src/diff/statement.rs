use crate::catalog::{ColumnDescriptor, quote_identifier};
use crate::constants::script::EXTRA_COLUMN_NOTE;
use std::fmt;

/// 列定义语句构建器
///
/// 每个子句（类型、可空性、默认值、自增）单独渲染，再以空格拼接，
/// 这样 ADD / MODIFY 两种语句可以逐个子句测试。
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDefinition {
    pub name: String,
    pub declared_type: String,
    pub nullable: bool,
    pub default_value: Option<String>,
    pub auto_increment: bool,
}

impl ColumnDefinition {
    pub fn from_descriptor(column: &ColumnDescriptor) -> Self {
        Self {
            name: column.name.clone(),
            declared_type: column.declared_type.clone(),
            nullable: column.nullable,
            default_value: column.default_value.clone(),
            auto_increment: column.is_auto_increment(),
        }
    }

    /// MODIFY 语句不重复声明自增属性
    pub fn without_auto_increment(mut self) -> Self {
        self.auto_increment = false;
        self
    }

    pub fn name_clause(&self) -> String {
        quote_identifier(&self.name)
    }

    pub fn type_clause(&self) -> &str {
        &self.declared_type
    }

    pub fn nullability_clause(&self) -> &'static str {
        if self.nullable { "NULL" } else { "NOT NULL" }
    }

    /// 默认值按目录中的表示原样输出，不加引号
    pub fn default_clause(&self) -> Option<String> {
        self.default_value
            .as_ref()
            .map(|value| format!("DEFAULT {value}"))
    }

    pub fn auto_increment_clause(&self) -> Option<&'static str> {
        self.auto_increment.then_some("AUTO_INCREMENT")
    }

    fn clauses(&self) -> Vec<String> {
        let mut clauses = vec![
            self.name_clause(),
            self.type_clause().to_string(),
            self.nullability_clause().to_string(),
        ];
        clauses.extend(self.default_clause());
        clauses.extend(self.auto_increment_clause().map(str::to_string));
        clauses
    }
}

impl fmt::Display for ColumnDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.clauses().join(" "))
    }
}

/// 单条差异：可执行语句或仅供参考的注释
#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceStatement {
    /// 源库有、目标库没有的列
    AddColumn {
        table: String,
        column: ColumnDefinition,
    },
    /// 目标库有、源库没有的列，只记录不删除
    ExtraColumnNote { table: String, column: String },
    /// 两边都有但定义不同的列，以源库为准
    ModifyColumn {
        table: String,
        column: ColumnDefinition,
    },
}

impl DifferenceStatement {
    pub fn is_executable(&self) -> bool {
        !matches!(self, DifferenceStatement::ExtraColumnNote { .. })
    }
}

impl fmt::Display for DifferenceStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DifferenceStatement::AddColumn { table, column } => {
                write!(
                    f,
                    "ALTER TABLE {} ADD COLUMN {column};",
                    quote_identifier(table)
                )
            }
            DifferenceStatement::ExtraColumnNote { table, column } => {
                write!(f, "{EXTRA_COLUMN_NOTE} {table}.{column}")
            }
            DifferenceStatement::ModifyColumn { table, column } => {
                write!(
                    f,
                    "ALTER TABLE {} MODIFY COLUMN {column};",
                    quote_identifier(table)
                )
            }
        }
    }
}
