/// 配置文件相关常量
pub mod config {
    /// 默认配置文件名
    pub const CONFIG_FILE_NAME: &str = "schema-sync.toml";

    /// 源库密码环境变量（覆盖配置文件中的值）
    pub const SOURCE_PASSWORD_ENV: &str = "SCHEMA_SYNC_SOURCE_PASSWORD";

    /// 目标库密码环境变量（覆盖配置文件中的值）
    pub const TARGET_PASSWORD_ENV: &str = "SCHEMA_SYNC_TARGET_PASSWORD";
}

/// 数据库连接相关常量
pub mod database {
    /// MySQL 默认端口
    pub const DEFAULT_PORT: u16 = 3306;

    /// 默认连接超时（秒）
    pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// 同步脚本相关常量
pub mod script {
    /// 默认输出文件（相对路径，每次运行覆盖）
    pub const DEFAULT_OUTPUT_FILE: &str = "aplicar_cambios.sql";

    /// 脚本头部说明
    pub const HEADER_BANNER: &str = "-- 自动生成的结构同步脚本: 将源库(本地)的变更应用到目标库(远程)";

    /// 分节分隔线
    pub const SECTION_RULE: &str = "-- ========================================";

    pub const MISSING_TABLES_TITLE: &str = "-- 目标库中缺失的表";
    pub const MODIFIED_TABLES_TITLE: &str = "-- 对已有表的修改";
    pub const EXTRA_TABLES_TITLE: &str = "-- 仅存在于目标库的表 (仅供参考)";

    /// 额外列的注释前缀
    pub const EXTRA_COLUMN_NOTE: &str = "-- 目标库存在但源库不存在的列:";

    /// 时间戳格式
    pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
}

/// 静态文件服务相关常量
pub mod server {
    /// 默认监听端口
    pub const DEFAULT_PORT: u16 = 8000;

    /// 默认服务目录
    pub const DEFAULT_ROOT: &str = ".";

    /// 允许的跨域方法
    pub const ALLOWED_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";

    /// 允许的跨域请求头
    pub const ALLOWED_HEADERS: &str = "Content-Type, Authorization";
}
