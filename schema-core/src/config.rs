use crate::constants::{config, database, script};
use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use sqlx::mysql::MySqlConnectOptions;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 应用配置结构
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    pub source: DatabaseConfig,
    pub target: DatabaseConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// 单个数据库的连接参数
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub user: String,
    #[serde(default)]
    pub password: String,
    pub database: String,
}

/// 输出相关配置
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OutputConfig {
    pub script_path: String,
}

fn default_connect_timeout() -> u64 {
    database::DEFAULT_CONNECT_TIMEOUT_SECS
}

fn default_port() -> u16 {
    database::DEFAULT_PORT
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            script_path: script::DEFAULT_OUTPUT_FILE.to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_connect_timeout(),
            source: DatabaseConfig {
                host: "localhost".to_string(),
                port: database::DEFAULT_PORT,
                user: "root".to_string(),
                password: String::new(),
                database: "local_db".to_string(),
            },
            target: DatabaseConfig {
                host: "remote.example.com".to_string(),
                port: database::DEFAULT_PORT,
                user: "root".to_string(),
                password: String::new(),
                database: "remote_db".to_string(),
            },
            output: OutputConfig::default(),
        }
    }
}

impl DatabaseConfig {
    /// 生成 sqlx 的 MySQL 连接参数
    pub fn connect_options(&self) -> MySqlConnectOptions {
        let mut options = MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .database(&self.database);
        if !self.password.is_empty() {
            options = options.password(&self.password);
        }
        options
    }

    /// 用于日志显示的地址（不包含凭据）
    pub fn display_address(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }

    fn validate(&self, side: &str) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(SchemaError::config(format!("{side}.host 不能为空")));
        }
        if self.database.trim().is_empty() {
            return Err(SchemaError::config(format!("{side}.database 不能为空")));
        }
        Ok(())
    }
}

impl AppConfig {
    /// 加载配置文件，并应用环境变量覆盖
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(SchemaError::ConfigNotFound(path.to_path_buf()));
        }

        tracing::debug!("加载配置文件: {}", path.display());
        let mut config = Self::load_from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml_with_comments();
        fs::write(&path, content)?;
        Ok(())
    }

    /// 使用环境变量中的密码覆盖配置文件
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// 按给定的查找函数覆盖密码
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(password) = lookup(config::SOURCE_PASSWORD_ENV) {
            tracing::debug!("使用环境变量 {} 作为源库密码", config::SOURCE_PASSWORD_ENV);
            self.source.password = password;
        }
        if let Some(password) = lookup(config::TARGET_PASSWORD_ENV) {
            tracing::debug!("使用环境变量 {} 作为目标库密码", config::TARGET_PASSWORD_ENV);
            self.target.password = password;
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.connect_timeout_secs == 0 {
            return Err(SchemaError::config("connect_timeout_secs 必须大于 0"));
        }
        self.source.validate("source")?;
        self.target.validate("target")?;
        if self.output.script_path.trim().is_empty() {
            return Err(SchemaError::config("output.script_path 不能为空"));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// 获取输出脚本路径
    pub fn get_script_path(&self) -> PathBuf {
        PathBuf::from(&self.output.script_path)
    }

    /// 生成带注释的TOML配置
    fn to_toml_with_comments(&self) -> String {
        const TEMPLATE: &str = include_str!("../templates/config.toml.template");

        let values = [
            ("connect_timeout_secs", self.connect_timeout_secs.to_string()),
            ("source_host", quoted(&self.source.host)),
            ("source_port", self.source.port.to_string()),
            ("source_user", quoted(&self.source.user)),
            ("source_password", quoted(&self.source.password)),
            ("source_database", quoted(&self.source.database)),
            ("target_host", quoted(&self.target.host)),
            ("target_port", self.target.port.to_string()),
            ("target_user", quoted(&self.target.user)),
            ("target_password", quoted(&self.target.password)),
            ("target_database", quoted(&self.target.database)),
            ("script_path", quoted(&self.output.script_path)),
        ];
        fill_placeholders(TEMPLATE, &values)
    }
}

/// 单次扫描替换 `{name}` 占位符，已填入的值不会被再次替换
fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        output.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        let value = after.find('}').and_then(|end| {
            let key = &after[..end];
            values
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (value, end))
        });

        match value {
            Some((value, end)) => {
                output.push_str(value);
                rest = &after[end + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }

    output.push_str(rest);
    output
}

/// 渲染为合法的 TOML 字符串字面量
fn quoted(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}
