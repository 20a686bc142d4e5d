use crate::constants::script::{HEADER_BANNER, TIMESTAMP_FORMAT};
use crate::error::Result;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::info;

/// 脚本头部：说明、生成时间与 `USE` 语句
#[derive(Debug, Clone)]
pub struct ScriptHeader {
    pub target_database: String,
    pub generated_at: NaiveDateTime,
}

impl ScriptHeader {
    pub fn new(target_database: impl Into<String>, generated_at: NaiveDateTime) -> Self {
        Self {
            target_database: target_database.into(),
            generated_at,
        }
    }

    /// 以本地当前时间生成
    pub fn now(target_database: impl Into<String>) -> Self {
        Self::new(target_database, chrono::Local::now().naive_local())
    }

    pub fn lines(&self) -> Vec<String> {
        vec![
            HEADER_BANNER.to_string(),
            format!("-- 生成时间: {}", self.generated_at.format(TIMESTAMP_FORMAT)),
            String::new(),
            format!("USE {};", self.target_database),
            String::new(),
        ]
    }
}

/// 表的三分区：目标库缺失 / 两边共有 / 目标库多出
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TablePartition {
    /// 按源库顺序
    pub missing: Vec<String>,
    /// 按源库顺序
    pub common: Vec<String>,
    /// 按目标库顺序
    pub extra: Vec<String>,
}

impl TablePartition {
    pub fn new(source_tables: &[String], target_tables: &[String]) -> Self {
        let source_set: HashSet<&str> = source_tables.iter().map(String::as_str).collect();
        let target_set: HashSet<&str> = target_tables.iter().map(String::as_str).collect();

        let (common, missing) = source_tables
            .iter()
            .cloned()
            .partition(|t| target_set.contains(t.as_str()));
        let extra = target_tables
            .iter()
            .filter(|t| !source_set.contains(t.as_str()))
            .cloned()
            .collect();

        Self {
            missing,
            common,
            extra,
        }
    }
}

/// 汇总统计
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SummaryCounts {
    pub source_tables: usize,
    pub target_tables: usize,
    pub missing_tables: Vec<String>,
    pub common_tables: usize,
    pub extra_tables: Vec<String>,
    /// 产生了差异块的共有表数量
    pub modified_tables: usize,
    /// 可执行语句数量（不含注释）
    pub statements: usize,
}

/// 生成的同步脚本，组装完成后不再修改
#[derive(Debug, Clone, PartialEq)]
pub struct ReconciliationScript {
    lines: Vec<String>,
}

impl ReconciliationScript {
    pub(crate) fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 以换行拼接，末尾不追加换行
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// 写入文件，覆盖已有内容
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(&path, self.render())?;
        info!("脚本已写入: {}", path.as_ref().display());
        Ok(())
    }
}

impl fmt::Display for ReconciliationScript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
