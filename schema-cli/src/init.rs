use crate::project_info::get_version_string;
use schema_core::{config::AppConfig, constants::config, error::Result};
use std::path::Path;
use tracing::{info, warn};

/// 运行独立的初始化流程，写出带注释的配置模板
///
/// 返回是否真正写出了文件；已存在且未指定 `--force` 时不覆盖。
pub fn run_init(config_path: &Path, force: bool) -> Result<bool> {
    info!("🗄️  {} 初始化", get_version_string());
    info!("======================");

    if !force && config_path.exists() {
        warn!("⚠️  检测到已存在的配置文件: {}", config_path.display());
        info!("如果您要重新初始化，请使用 --force 参数");
        info!("示例: schema-sync init --force");
        return Ok(false);
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    AppConfig::default().save_to_file(config_path)?;
    info!("   ✅ 创建配置文件: {}", config_path.display());

    info!("🎉 初始化完成！");
    info!("");
    info!("📝 接下来的步骤:");
    info!("   1️⃣  编辑 {} 填写 [source] 与 [target] 的连接信息", config_path.display());
    info!(
        "   2️⃣  密码可以不写入文件，改用环境变量 {} / {}",
        config::SOURCE_PASSWORD_ENV,
        config::TARGET_PASSWORD_ENV
    );
    info!("   3️⃣  运行 'schema-sync compare' 生成同步脚本");

    Ok(true)
}
