use clap::Parser;
use schema_cli::{Cli, CliApp, Commands, run_init, run_serve, setup_logging};
use schema_core::SchemaError;
use tracing::error;

#[tokio::main]
async fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    match cli.command_or_default() {
        // `init` 命令是特例，它不需要预先加载配置
        Commands::Init { force } => {
            if let Err(e) = run_init(&cli.config, force) {
                error!("❌ 初始化失败: {}", e);
                std::process::exit(1);
            }
        }
        // 静态文件服务也不需要配置，Ctrl+C 时正常退出
        Commands::Serve { port, dir } => {
            if let Err(e) = run_serve(port, &dir).await {
                error!("❌ 操作失败: {:?}", e);
                std::process::exit(1);
            }
        }
        command => {
            let app = match CliApp::new(&cli.config) {
                Ok(app) => app,
                Err(SchemaError::ConfigNotFound(path)) => {
                    error!("❌ 配置文件 '{}' 未找到。", path.display());
                    error!("👉 请先运行 'schema-sync init' 命令来创建配置文件。");
                    std::process::exit(1);
                }
                Err(e) => {
                    error!("❌ 应用初始化失败: {}", e);
                    std::process::exit(1);
                }
            };

            // Ctrl+C 时丢弃整个比对流程，连接随之释放
            tokio::select! {
                result = app.run_command(command) => {
                    if let Err(e) = result {
                        error!("❌ 操作失败: {:?}", e);
                        let is_connection_failure = e
                            .downcast_ref::<SchemaError>()
                            .is_some_and(SchemaError::is_connection_failure);
                        if is_connection_failure {
                            error!("👉 请检查 '{}' 中 [source] / [target] 的连接信息。", cli.config.display());
                        }
                        std::process::exit(1);
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    error!("操作已被用户取消");
                    std::process::exit(1);
                }
            }
        }
    }
}
