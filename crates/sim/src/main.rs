//! Script-driven hand simulator entry point.
mod config;
mod script;

use std::io::Write;

use anyhow::{Context, Result};
use config::SimConfig;
use hands_content::ContentFactory;
use script::Simulator;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = SimConfig::from_env();
    let _guard = setup_logging(&config)?;

    let script_path = std::env::args()
        .nth(1)
        .context("usage: hands-sim <script>")?;
    let script = std::fs::read_to_string(&script_path)
        .with_context(|| format!("Failed to read script {}", script_path))?;

    // Content errors abort: they indicate broken data, not a bad script line
    let (hands, inventory) =
        ContentFactory::new(&config.data_dir).build_actor(&config.actor_kind)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut simulator = Simulator::new(hands, inventory);
    let summary = simulator.run(&script, &mut out)?;
    out.flush()?;

    tracing::info!(
        "Script finished: {} commands, {} failed, active hand {:?}",
        summary.executed,
        summary.failed,
        simulator.hands().active_hand().map(|hand| hand.as_str())
    );
    Ok(())
}

/// Setup logging to stderr, and to a file when `HANDS_LOG_DIR` is set.
///
/// The returned guard must stay alive for file output to be flushed.
fn setup_logging(config: &SimConfig) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::never(dir, "sim.log");
            let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(non_blocking_file)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!("Logging initialized: data_dir={}", config.data_dir.display());
    Ok(guard)
}
