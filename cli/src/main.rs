mod file_store;
mod source;
mod terminal;

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};
use client::{PollConfig, PollExit, StatusPoller, ThemeToggle};
use tokio_util::sync::CancellationToken;

use crate::file_store::FileStore;
use crate::source::{HttpStatusSource, TokioTimer};
use crate::terminal::{TerminalStatusView, TerminalThemeView};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to read state file {}: {source}", path.display())]
    StateRead { path: PathBuf, source: std::io::Error },
    #[error("invalid JSON in state file: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to save theme preference: {0}")]
    Store(#[from] client::StoreError),
    #[error("status polling stopped after {cycles} requests: {source}")]
    Halted { cycles: u32, source: client::FetchError },
}

#[derive(Parser, Debug)]
#[command(name = "scrapegoat", about = "Watch ScrapeGoat crawl tasks and manage the UI theme")]
struct Cli {
    #[arg(long, env = "SCRAPEGOAT_BASE_URL", default_value = "http://127.0.0.1:5000")]
    base_url: String,

    #[arg(long, env = "SCRAPEGOAT_STATE_FILE", default_value = ".scrapegoat.json")]
    state_file: PathBuf,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Poll a task's status until it finishes.
    Watch(WatchArgs),
    /// Show or flip the stored theme preference.
    Theme(ThemeCommand),
}

#[derive(Args, Debug)]
struct WatchArgs {
    task_id: String,

    #[arg(long, default_value_t = 2000)]
    interval_ms: u64,

    #[arg(long, default_value_t = 1200)]
    reload_delay_ms: u64,

    #[arg(long, default_value_t = 10, help = "Per-request timeout")]
    timeout_secs: u64,
}

impl WatchArgs {
    fn poll_config(&self) -> PollConfig {
        PollConfig {
            interval: Duration::from_millis(self.interval_ms),
            reload_delay: Duration::from_millis(self.reload_delay_ms),
            ..PollConfig::default()
        }
    }
}

#[derive(Args, Debug)]
struct ThemeCommand {
    #[command(subcommand)]
    command: ThemeSubcommand,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
enum ThemeSubcommand {
    /// Print the current theme.
    Show,
    /// Flip and save the theme, then print it.
    Toggle,
}

/// Exit status for a watch interrupted by Ctrl-C.
const EXIT_INTERRUPTED: u8 = 130;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.verbose { tracing::Level::DEBUG } else { tracing::Level::INFO })
        .init();

    let result = match cli.command {
        Command::Watch(args) => run_watch(&cli.base_url, args).await,
        Command::Theme(theme) => run_theme(cli.state_file, theme.command),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "scrapegoat failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_watch(base_url: &str, args: WatchArgs) -> Result<ExitCode, CliError> {
    let source = HttpStatusSource::new(base_url, Duration::from_secs(args.timeout_secs))?;
    let view = TerminalStatusView::new(std::io::stdout());
    let config = args.poll_config();
    let Some(mut poller) = StatusPoller::activate(Some(args.task_id), Some(view), source, TokioTimer, config) else {
        tracing::warn!("empty task id; nothing to watch");
        return Ok(ExitCode::SUCCESS);
    };

    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            on_interrupt.cancel();
        }
    });

    match poller.run(&cancel).await {
        PollExit::Finished { cycles } => {
            tracing::info!(task_id = poller.task_id(), cycles, "task finished");
            Ok(ExitCode::SUCCESS)
        }
        PollExit::Cancelled { cycles } => {
            tracing::info!(task_id = poller.task_id(), cycles, "watch interrupted");
            Ok(ExitCode::from(EXIT_INTERRUPTED))
        }
        PollExit::Halted { cycles, error } => Err(CliError::Halted { cycles, source: error }),
    }
}

fn run_theme(state_file: PathBuf, command: ThemeSubcommand) -> Result<ExitCode, CliError> {
    let store = FileStore::open(state_file)?;
    tracing::debug!(path = %store.path().display(), "theme state loaded");
    let mut toggle = ThemeToggle::init(store, TerminalThemeView::default());
    if command == ThemeSubcommand::Toggle {
        toggle.try_toggle()?;
    }
    println!("{}", toggle.view().describe());
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
