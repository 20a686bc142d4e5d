use super::types::{ReconciliationScript, ScriptHeader, SummaryCounts, TablePartition};
use crate::catalog::{CatalogConnection, list_tables, read_structure};
use crate::constants::script::{
    EXTRA_TABLES_TITLE, MISSING_TABLES_TITLE, MODIFIED_TABLES_TITLE, SECTION_RULE,
};
use crate::diff::diff_table;
use crate::progress::Phase;
use tracing::{debug, info, warn};

/// 组装同步脚本
///
/// 依次读取两边的表列表、划分三类表、对共有表逐一比较，
/// 最后按固定顺序（缺失 → 修改 → 多出）拼接各节。
/// 单个元数据查询失败只会降级，不会中断。
pub async fn assemble_script<S, T>(
    source: &mut S,
    target: &mut T,
    header: &ScriptHeader,
) -> (ReconciliationScript, SummaryCounts)
where
    S: CatalogConnection,
    T: CatalogConnection,
{
    Phase::ListTables.report();
    let source_tables = list_tables(source).await;
    let target_tables = list_tables(target).await;
    info!("✓ 源库表数量: {}", source_tables.len());
    info!("✓ 目标库表数量: {}", target_tables.len());

    let partition = TablePartition::new(&source_tables, &target_tables);

    Phase::Compare.report();
    let mut lines = header.lines();
    let mut summary = SummaryCounts {
        source_tables: source_tables.len(),
        target_tables: target_tables.len(),
        missing_tables: partition.missing.clone(),
        common_tables: partition.common.len(),
        extra_tables: partition.extra.clone(),
        ..Default::default()
    };

    // 1. 目标库缺失的表
    if !partition.missing.is_empty() {
        push_section_banner(&mut lines, MISSING_TABLES_TITLE);
        lines.push(String::new());
        for table in &partition.missing {
            let structure = read_structure(source, table).await;
            match structure.create_statement {
                Some(create) => {
                    lines.push(format!("-- 创建表: {table}"));
                    lines.push(format!("{create};"));
                    lines.push(String::new());
                    summary.statements += 1;
                }
                None => warn!("⚠️  表 {} 没有建表语句，跳过", table),
            }
        }
    }

    // 2. 两边共有的表
    if !partition.common.is_empty() {
        push_section_banner(&mut lines, MODIFIED_TABLES_TITLE);
        lines.push(String::new());
        for table in &partition.common {
            info!("  比较表: {}...", table);
            let source_structure = read_structure(source, table).await;
            let target_structure = read_structure(target, table).await;

            let diffs = diff_table(&source_structure, &target_structure, table);
            if diffs.is_empty() {
                debug!("表 {} 结构一致", table);
                continue;
            }

            summary.modified_tables += 1;
            summary.statements += diffs.iter().filter(|d| d.is_executable()).count();
            lines.push(format!("-- 表: {table}"));
            lines.extend(diffs.iter().map(ToString::to_string));
            lines.push(String::new());
        }
    }

    // 3. 目标库多出的表（仅供参考）
    if !partition.extra.is_empty() {
        push_section_banner(&mut lines, EXTRA_TABLES_TITLE);
        for table in &partition.extra {
            lines.push(format!("-- {table}"));
        }
        lines.push(String::new());
    }

    Phase::Generate.report();
    (ReconciliationScript::from_lines(lines), summary)
}

fn push_section_banner(lines: &mut Vec<String>, title: &str) {
    lines.push(SECTION_RULE.to_string());
    lines.push(title.to_string());
    lines.push(SECTION_RULE.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::memory::{Failure, MemoryCatalog, column};
    use chrono::NaiveDate;

    fn header() -> ScriptHeader {
        let generated_at = NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(9, 30, 5)
            .unwrap();
        ScriptHeader::new("railway", generated_at)
    }

    fn section<'a>(script: &'a str, title: &str) -> &'a str {
        let start = script.find(title).expect("section present");
        let rest = &script[start + title.len()..];
        // 下一节的标题行以分隔线开头
        let end = rest
            .match_indices(SECTION_RULE)
            .nth(1)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        &rest[..end]
    }

    #[tokio::test]
    async fn test_partitions_missing_common_extra() {
        let mut source = MemoryCatalog::new()
            .with_table("A", vec![column("id", "int(11)", false, None, "")])
            .with_table(
                "B",
                vec![
                    column("id", "int(11)", false, None, ""),
                    column("age", "int(11)", true, None, ""),
                ],
            );
        let mut target = MemoryCatalog::new()
            .with_table("B", vec![column("id", "int(11)", false, None, "")])
            .with_table("C", vec![column("id", "int(11)", false, None, "")]);

        let (script, summary) = assemble_script(&mut source, &mut target, &header()).await;
        let text = script.render();
        println!("{text}");

        let missing = section(&text, MISSING_TABLES_TITLE);
        assert!(missing.contains("-- 创建表: A"));
        assert!(missing.contains("CREATE TABLE `A`"));
        assert!(!missing.contains("`B`"));
        assert!(!missing.contains("`C`"));

        let modified = section(&text, MODIFIED_TABLES_TITLE);
        assert!(modified.contains("-- 表: B"));
        assert!(modified.contains("ALTER TABLE `B` ADD COLUMN `age` int(11) NULL;"));
        assert!(!modified.contains("`A`"));
        assert!(!modified.contains("`C`"));

        let extra = section(&text, EXTRA_TABLES_TITLE);
        assert!(extra.contains("-- C"));
        assert!(!extra.contains("-- A"));
        assert!(!extra.contains("-- B"));

        assert_eq!(summary.source_tables, 2);
        assert_eq!(summary.target_tables, 2);
        assert_eq!(summary.missing_tables, vec!["A"]);
        assert_eq!(summary.common_tables, 1);
        assert_eq!(summary.extra_tables, vec!["C"]);
        assert_eq!(summary.modified_tables, 1);
        assert_eq!(summary.statements, 2);
    }

    #[tokio::test]
    async fn test_in_sync_table_produces_no_block() {
        let columns = vec![
            column("id", "int(11)", false, None, "auto_increment"),
            column("name", "varchar(100)", true, None, ""),
        ];
        let mut source = MemoryCatalog::new().with_table("users", columns.clone());
        let mut target = MemoryCatalog::new().with_table("users", columns);

        let (script, summary) = assemble_script(&mut source, &mut target, &header()).await;
        let text = script.render();

        let modified = section(&text, MODIFIED_TABLES_TITLE);
        assert!(!modified.contains("users"));
        assert!(!text.contains(MISSING_TABLES_TITLE));
        assert!(!text.contains(EXTRA_TABLES_TITLE));
        assert_eq!(summary.modified_tables, 0);
        assert_eq!(summary.statements, 0);
    }

    #[tokio::test]
    async fn test_header_lines() {
        let mut source = MemoryCatalog::new();
        let mut target = MemoryCatalog::new();

        let (script, _) = assemble_script(&mut source, &mut target, &header()).await;

        assert_eq!(
            script.lines(),
            &[
                crate::constants::script::HEADER_BANNER.to_string(),
                "-- 生成时间: 2026-10-16 09:30:05".to_string(),
                String::new(),
                "USE railway;".to_string(),
                String::new(),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_table_without_create_statement_is_counted_but_skipped() {
        let mut source = MemoryCatalog::new()
            .with_table("ghost", vec![column("id", "int", false, None, "")])
            .without_create_statement("ghost");
        let mut target = MemoryCatalog::new();

        let (script, summary) = assemble_script(&mut source, &mut target, &header()).await;
        let text = script.render();

        assert_eq!(summary.missing_tables, vec!["ghost"]);
        assert!(text.contains(MISSING_TABLES_TITLE));
        assert!(!text.contains("-- 创建表: ghost"));
        assert_eq!(summary.statements, 0);
    }

    #[tokio::test]
    async fn test_target_metadata_failure_degrades_to_additions() {
        let mut source = MemoryCatalog::new().with_table(
            "users",
            vec![column("id", "int(11)", false, None, "auto_increment")],
        );
        let mut target = MemoryCatalog::new()
            .with_table(
                "users",
                vec![column("id", "int(11)", false, None, "auto_increment")],
            )
            .failing(Failure::Columns);

        let (script, summary) = assemble_script(&mut source, &mut target, &header()).await;

        assert_eq!(summary.modified_tables, 1);
        assert!(
            script
                .render()
                .contains("ALTER TABLE `users` ADD COLUMN `id` int(11) NOT NULL AUTO_INCREMENT;")
        );
    }

    #[tokio::test]
    async fn test_extra_tables_keep_target_order() {
        let mut source = MemoryCatalog::new();
        let mut target = MemoryCatalog::new()
            .with_table("zeta", vec![])
            .with_table("alpha", vec![]);

        let (script, summary) = assemble_script(&mut source, &mut target, &header()).await;
        let text = script.render();

        assert_eq!(summary.extra_tables, vec!["zeta", "alpha"]);
        assert!(text.find("-- zeta").unwrap() < text.find("-- alpha").unwrap());
    }

    #[tokio::test]
    async fn test_script_written_without_trailing_newline() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("out.sql");
        std::fs::write(&path, "stale content that must disappear").unwrap();

        let mut source = MemoryCatalog::new().with_table("A", vec![]);
        let mut target = MemoryCatalog::new();
        let (script, _) = assemble_script(&mut source, &mut target, &header()).await;
        script.write_to(&path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, script.render());
        assert!(!written.contains("stale"));
        assert!(!written.ends_with("\n\n"));
    }

    #[test]
    fn test_partition_uses_set_semantics() {
        let source = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let target = vec!["d".to_string(), "c".to_string(), "a".to_string()];

        let partition = TablePartition::new(&source, &target);

        assert_eq!(partition.missing, vec!["b"]);
        assert_eq!(partition.common, vec!["a", "c"]);
        assert_eq!(partition.extra, vec!["d"]);
    }
}
