/// 项目元数据（自动从 schema-cli 的 Cargo.toml 同步）
pub mod metadata {
    pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 用户友好的显示名称（手动维护）
    pub mod display {
        pub const FRIENDLY_NAME: &str = "Schema Sync";

        pub const DESCRIPTION_LONG: &str = "比对源库(本地)与目标库(远程)的 MySQL 表结构，生成一份可审阅的同步脚本；附带一个带跨域头的本地静态文件服务";
    }
}

/// 版本信息
pub mod version_info {
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// 获取版本信息字符串
pub fn get_version_string() -> String {
    format!(
        "{} v{}",
        metadata::display::FRIENDLY_NAME,
        version_info::CLI_VERSION
    )
}
