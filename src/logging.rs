use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::Subscriber;
use tracing_subscriber::EnvFilter;

use crate::errors::Result;

static LOG_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Install the global subscriber. With a directory, logs roll daily into
/// `catalog.log`; without one they go to stderr.
pub fn init(log_dir: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match log_dir {
        Some(dir) => {
            fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, "catalog.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let _ = LOG_GUARD.set(guard);

            let subscriber = Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(non_blocking)
                .with_file(true)
                .with_line_number(true)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|err| crate::errors::ApiError::Config(err.to_string()))?;
        }
        None => {
            let subscriber = Subscriber::builder()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)
                .map_err(|err| crate::errors::ApiError::Config(err.to_string()))?;
        }
    }

    Ok(())
}
