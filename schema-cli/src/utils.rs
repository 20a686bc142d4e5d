/// # Schema Sync 日志系统使用说明
///
/// 库代码（schema-core）只使用 `tracing` 宏，日志配置只在 `main.rs` 中调用
/// `setup_logging()` 完成。
///
/// ## 日志配置选项
///
/// - `-v, --verbose`：启用详细日志模式（DEBUG 级别）
/// - `RUST_LOG`：标准的 Rust 日志级别控制，优先于 `-v`
/// - `SCHEMA_SYNC_LOG_FILE`：日志文件路径，设置后日志输出到文件而非终端
///
/// ## 使用示例
///
/// ```bash
/// # 标准日志输出到终端
/// schema-sync compare
///
/// # 详细日志输出到终端
/// schema-sync -v compare
///
/// # 日志输出到文件
/// SCHEMA_SYNC_LOG_FILE=schema-sync.log schema-sync compare
///
/// # 只看目录读取模块的调试日志
/// RUST_LOG=schema_core::catalog=debug schema-sync compare
/// ```
///
/// ## 日志格式
/// - **终端输出**：人类可读格式，不显示模块路径和时间
/// - **文件输出**：包含完整模块路径、线程名和行号
pub const LOG_FILE_ENV: &str = "SCHEMA_SYNC_LOG_FILE";

/// 根据 verbose 参数和环境变量确定默认日志级别
pub fn default_log_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

pub fn setup_logging(verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    // 检查环境变量，决定是否输出到文件
    let log_file = std::env::var(LOG_FILE_ENV).ok().map(|path| {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path);
        (path, file)
    });

    match log_file {
        Some((_, Ok(file))) => {
            // 输出到文件 - 使用详细格式便于调试
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::sync::Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_names(true)
                .with_line_number(true)
                .init();
        }
        other => {
            // 输出到终端 - 使用简洁格式，用户友好
            fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_thread_names(false)
                .with_line_number(false)
                .without_time()
                .compact()
                .init();

            if let Some((path, Err(e))) = other {
                tracing::warn!("⚠️  无法打开日志文件 {}: {}，改为输出到终端", path, e);
            }
        }
    }
}
