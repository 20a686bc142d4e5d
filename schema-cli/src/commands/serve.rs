use anyhow::{Context, Result};
use schema_core::server::serve_directory;
use std::path::Path;
use tracing::{info, warn};

/// 启动静态文件服务，Ctrl+C 时优雅退出
pub async fn run_serve(port: u16, dir: &Path) -> Result<()> {
    let shutdown = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => info!("收到 Ctrl+C，正在停止服务..."),
            Err(e) => {
                warn!("⚠️  无法监听 Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    serve_directory(port, dir, shutdown)
        .await
        .with_context(|| format!("静态文件服务启动失败 (端口 {port})"))
}
