//! Process-wide tracing setup.
//!
//! The log destination is chosen once at startup: when `TODO_LOG_DIR` is
//! set, lines go to a daily-rolling `access.log` under that directory,
//! otherwise to stdout. Writes are funneled through a non-blocking worker;
//! the returned guard must stay alive for the life of the process or
//! buffered lines are lost on exit.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Keeps the background log writer flushing. Hold it in `main` until exit.
pub struct LogGuard {
    _guard: WorkerGuard,
}

pub fn init_logging() -> LogGuard {
    let (writer, guard) = match std::env::var("TODO_LOG_DIR") {
        Ok(dir) => {
            std::fs::create_dir_all(&dir).expect("Failed to create log directory");
            let appender = RollingFileAppender::new(Rotation::DAILY, &dir, "access.log");
            tracing_appender::non_blocking(appender)
        }
        Err(_) => tracing_appender::non_blocking(std::io::stdout()),
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = tracing_subscriber::registry().with(env_filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(writer)
            .with_ansi(false)
            .with_target(true),
    );

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global tracing subscriber");

    LogGuard { _guard: guard }
}
