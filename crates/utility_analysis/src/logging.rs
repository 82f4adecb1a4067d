use std::path::Path;

use color_eyre::eyre::WrapErr;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter directive for the given level, covering both crates
pub fn default_filter(level: &str) -> String {
    format!("utility_analysis={level},utility_analysis_core={level}")
}

/// Initialize logging.
///
/// Logs go to stderr, or are appended to `log_file` when one is given.
/// The level can be overridden with the `RUST_LOG` environment variable.
pub fn init_logging(level: &str, log_file: Option<&Path>) -> color_eyre::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    match log_file {
        Some(path) => {
            let directory = match path.parent() {
                Some(dir) if !dir.as_os_str().is_empty() => dir,
                _ => Path::new("."),
            };
            let file_name = path
                .file_name()
                .ok_or_else(|| color_eyre::eyre::eyre!("invalid log file {}", path.display()))?;
            std::fs::create_dir_all(directory)
                .wrap_err_with(|| format!("failed to create {}", directory.display()))?;

            let appender = tracing_appender::rolling::never(directory, file_name);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(appender)
                        .with_ansi(false)
                        .with_target(true)
                        .with_thread_ids(false),
                )
                .try_init()?;
        }
        None => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true),
                )
                .try_init()?;
        }
    }

    tracing::debug!("logging initialized");
    Ok(())
}
