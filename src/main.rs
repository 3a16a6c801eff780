// src/main.rs
mod cli;
mod commands;
mod logging;

use clap::Parser;
use cli::Args;
use swc_client::error::AppError;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // The guard must outlive every log call to flush the file writer
    let (log_file_path, _guard) = logging::setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    let result = commands::run(args.command).await;
    if let Err(e) = &result {
        tracing::error!("Command failed: {e}");
    }
    result
}
