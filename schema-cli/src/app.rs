use anyhow::{Result, bail};
use schema_core::config::AppConfig;
use std::path::{Path, PathBuf};

use crate::cli::Commands;
use crate::commands;

/// 需要配置文件的命令在这里执行
#[derive(Debug, Clone)]
pub struct CliApp {
    pub config: AppConfig,
    pub config_path: PathBuf,
}

impl CliApp {
    /// 加载配置（含环境变量覆盖）并初始化CLI应用
    pub fn new(config_path: &Path) -> schema_core::Result<Self> {
        let config = AppConfig::load(config_path)?;
        Ok(Self {
            config,
            config_path: config_path.to_path_buf(),
        })
    }

    /// 运行应用命令
    pub async fn run_command(&self, command: Commands) -> Result<()> {
        match command {
            Commands::Compare { output } => {
                commands::run_compare(&self.config, output).await?;
                Ok(())
            }
            // 这两个命令不需要配置，已经在 main.rs 中处理
            Commands::Init { .. } | Commands::Serve { .. } => {
                bail!("命令不应由 CliApp 执行: {:?}", command)
            }
        }
    }
}
