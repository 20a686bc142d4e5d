use anyhow::{Context, Result};
use schema_core::catalog::MySqlCatalog;
use schema_core::config::AppConfig;
use schema_core::script::{ScriptHeader, SummaryCounts, compare_catalogs};
use std::path::{Path, PathBuf};
use tracing::info;

/// 比对两边的表结构并写出同步脚本
///
/// 任何一侧连接失败都会中止；连接建立后，两条连接在每条退出路径上都会被关闭。
pub async fn run_compare(config: &AppConfig, output: Option<PathBuf>) -> Result<SummaryCounts> {
    let timeout = config.connect_timeout();
    let header = ScriptHeader::now(&config.target.database);

    let (script, summary) = compare_catalogs(
        MySqlCatalog::connect(&config.source, timeout),
        MySqlCatalog::connect(&config.target, timeout),
        &header,
    )
    .await
    .with_context(|| {
        format!(
            "比对失败: 源库 {} / 目标库 {}",
            config.source.display_address(),
            config.target.display_address()
        )
    })?;

    let script_path = output.unwrap_or_else(|| config.get_script_path());
    script
        .write_to(&script_path)
        .with_context(|| format!("写入同步脚本失败: {}", script_path.display()))?;

    for line in summary_lines(&summary, &script_path) {
        info!("{}", line);
    }

    Ok(summary)
}

/// 运行结束后的汇总输出
pub fn summary_lines(summary: &SummaryCounts, script_path: &Path) -> Vec<String> {
    let rule = "=".repeat(60);
    let mut lines = vec![
        String::new(),
        rule.clone(),
        "比对完成".to_string(),
        rule,
        String::new(),
        format!("源库表数量: {}", summary.source_tables),
        format!("目标库表数量: {}", summary.target_tables),
        format!("目标库缺失的表: {}", summary.missing_tables.len()),
        format!("目标库多出的表: {}", summary.extra_tables.len()),
        format!("有结构差异的表: {}", summary.modified_tables),
        format!("可执行语句: {}", summary.statements),
        String::new(),
        format!("📄 同步脚本已生成: {}", script_path.display()),
    ];

    if !summary.missing_tables.is_empty() {
        lines.push(String::new());
        lines.push("目标库缺失的表:".to_string());
        lines.extend(summary.missing_tables.iter().map(|t| format!("  - {t}")));
    }

    lines.push(String::new());
    lines.push(format!(
        "🎉 完成！请在执行前审阅 {}",
        script_path.display()
    ));
    lines
}
