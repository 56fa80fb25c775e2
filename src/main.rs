use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use linkdeck::config::ConsoleConfig;
use linkdeck::headless;
use linkdeck::scripts::Page;
use linkdeck::tui::runner;

#[derive(Parser)]
#[command(name = "linkdeck", about = "Backlink dashboard with simulated AI agent consoles")]
struct Cli {
    /// YAML config file (missing file = defaults).
    #[arg(short, long, default_value = "linkdeck.yaml")]
    config: PathBuf,

    /// Override the paced step interval.
    #[arg(long)]
    cadence_ms: Option<u64>,

    /// Page to open (or to run with --headless).
    #[arg(long, value_enum, default_value_t = Page::Mindpal)]
    page: Page,

    /// Run the page console once and print its log to stdout.
    #[arg(long)]
    headless: bool,

    /// Log file for TUI mode (stderr is used with --headless).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_logging(cli: &Cli) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("linkdeck=info"));

    if cli.headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    }

    // The TUI owns the screen, so logs go to a file.
    let path = cli
        .log_file
        .clone()
        .unwrap_or_else(|| std::env::temp_dir().join("linkdeck.log"));
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."));
    let file_name = path
        .file_name()
        .context("log file path has no file name")?
        .to_owned();
    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();
    Ok(Some(guard))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _guard = init_logging(&cli)?;

    let mut config = ConsoleConfig::load(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(cadence_ms) = cli.cadence_ms {
        config.cadence_ms = cadence_ms;
        config.validate()?;
    }
    info!(config = ?config, "config loaded");

    if cli.headless {
        let mut console = cli.page.console(&config);
        let interrupt = async {
            // If the handler can't be installed, run to completion.
            if tokio::signal::ctrl_c().await.is_err() {
                std::future::pending::<()>().await;
            }
        };
        let mut stdout = std::io::stdout().lock();
        let outcome = headless::stream_run(&mut console, &mut stdout, interrupt).await?;
        info!(outcome = ?outcome, "headless run finished");
        return Ok(());
    }

    runner::run(&config, cli.page).await
}
