use super::statement::{ColumnDefinition, DifferenceStatement};
use crate::catalog::{ColumnDescriptor, TableStructure};
use std::collections::HashMap;

/// 生成表差异
///
/// `source` 为期望结构（本地），`target` 为当前结构（远程）。输出顺序固定：
/// 1. 目标库缺失的列 → ADD COLUMN（按源库列顺序）
/// 2. 目标库多出的列 → 注释（按目标库列顺序），从不生成 DROP
/// 3. 两边定义不同的列 → MODIFY COLUMN（按源库列顺序）
///
/// 索引与约束虽然已读取，但不参与比较。
pub fn diff_table(
    source: &TableStructure,
    target: &TableStructure,
    table_name: &str,
) -> Vec<DifferenceStatement> {
    let source_columns = column_map(&source.columns);
    let target_columns = column_map(&target.columns);

    let mut diffs = Vec::new();

    // 检查新增的列
    for column in &source.columns {
        if !target_columns.contains_key(column.name.as_str()) {
            diffs.push(DifferenceStatement::AddColumn {
                table: table_name.to_string(),
                column: ColumnDefinition::from_descriptor(column),
            });
        }
    }

    // 目标库多出的列，仅提示
    for column in &target.columns {
        if !source_columns.contains_key(column.name.as_str()) {
            diffs.push(DifferenceStatement::ExtraColumnNote {
                table: table_name.to_string(),
                column: column.name.clone(),
            });
        }
    }

    // 检查修改的列
    for column in &source.columns {
        if let Some(current) = target_columns.get(column.name.as_str()) {
            if !column.same_definition(current) {
                diffs.push(DifferenceStatement::ModifyColumn {
                    table: table_name.to_string(),
                    column: ColumnDefinition::from_descriptor(column).without_auto_increment(),
                });
            }
        }
    }

    diffs
}

/// 创建列名到列定义的映射
fn column_map(columns: &[ColumnDescriptor]) -> HashMap<&str, &ColumnDescriptor> {
    columns.iter().map(|c| (c.name.as_str(), c)).collect()
}
