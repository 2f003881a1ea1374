use std::io::IsTerminal;
use std::process::ExitCode;

use env_manager::{default_addr, run, utils::constant::DEFAULT_LOG_FILTER};
use tracing::{Level, error, level_filters::LevelFilter};
use tracing_subscriber::{
    Layer, fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt,
};

#[tokio::main]
async fn main() -> ExitCode {
    // Startup banner and request logs go to stdout, filtered by RUST_LOG.
    let stdout_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stdout.with_min_level(Level::INFO))
        .with_ansi(std::io::stdout().is_terminal())
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        );

    // Warnings and errors always reach stderr, whatever RUST_LOG says.
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_filter(LevelFilter::WARN);

    tracing_subscriber::registry()
        .with(stdout_layer)
        .with(stderr_layer)
        .init();

    if let Err(e) = run(default_addr()).await {
        error!(error = %e, "❌ Server failed");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
