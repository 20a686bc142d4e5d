use crate::project_info::{metadata, version_info};
use clap::{Parser, Subcommand};
use schema_core::constants::{config, server};
use std::path::PathBuf;

/// Schema Sync CLI - MySQL 结构比对与同步脚本生成工具
#[derive(Parser, Debug)]
#[command(name = "schema-sync")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// 配置文件路径
    #[arg(short, long, default_value = config::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,

    /// 不指定子命令时执行 compare
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// 比对源库与目标库的表结构，生成同步脚本
    Compare {
        /// 输出脚本路径（覆盖配置文件中的 output.script_path）
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// 创建带注释的配置文件模板
    Init {
        /// 如果配置文件已存在，强制覆盖
        #[arg(long)]
        force: bool,
    },
    /// 启动带跨域头的本地静态文件服务
    Serve {
        /// 监听端口
        #[arg(short, long, default_value_t = server::DEFAULT_PORT)]
        port: u16,
        /// 服务目录
        #[arg(short, long, default_value = server::DEFAULT_ROOT)]
        dir: PathBuf,
    },
}

impl Cli {
    /// 实际要执行的命令，缺省为 compare
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Compare { output: None })
    }
}
