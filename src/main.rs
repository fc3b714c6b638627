use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use toolscout::cli::{self, session};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let args = cli::Args::parse();
    let mode = args.mode();

    // 先读配置文件，让文件里的 verbose 也能决定日志级别
    let mut config = args.load_config()?;
    init_tracing(config.verbose || args.verbose);
    args.apply_overrides(&mut config);

    session::launch(&config, mode).await
}

/// 日志输出到stderr，stdout留给交互提示与报告
fn init_tracing(verbose: bool) {
    let default_level = if verbose {
        "toolscout=debug"
    } else {
        "toolscout=info"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
