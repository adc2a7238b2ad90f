use clap::Parser;
use timesheet_server::cli::{self, Cli, Commands};
use timesheet_server::{Config, print_banner, setup_environment};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    let cli = Cli::parse();
    if matches!(cli.command, None | Some(Commands::Serve)) {
        print_banner();
        tracing::info!("Timesheet server starting...");
    }

    // 2. 加载配置
    let config = Config::from_env()?;

    // 3. 执行命令 (serve 会阻塞直到 Ctrl-C)
    if let Err(e) = cli::run(cli, config).await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}
