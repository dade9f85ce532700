use anyhow::Result;
use clap::Parser;
use std::fs::OpenOptions;

use job_assistant::cli::{handle_command, Cli};
use job_assistant::config::ConfigManager;
use job_assistant::App;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first; diagnostics go to a file so page output
    // on stdout stays clean.
    let log_path =
        std::env::var("JOBASSIST_LOG").unwrap_or_else(|_| "/tmp/jobassist.log".to_string());
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .expect("Failed to open log file");

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .json()
                .with_writer(file)
                .with_current_span(false)
                .with_span_list(false),
        )
        .with(
            EnvFilter::from_default_env()
                .add_directive("info".parse().expect("Invalid log directive")),
        )
        .init();

    let cli = Cli::parse();

    let config = ConfigManager::load().await?;
    config.ensure_directories().await?;

    info!("Job Assistant client starting");
    info!("Backend: {}", config.api.base_url);
    info!("Data: {}", config.storage.data_path.display());

    let app = App::bootstrap(&config).await?;
    handle_command(cli, &app).await
}
