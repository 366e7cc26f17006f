//! Tracing subscriber setup for the bot process.

use std::{env, sync::OnceLock};

use tracing_appender::{
    non_blocking,
    non_blocking::NonBlocking,
    rolling::{RollingFileAppender, Rotation},
};
use tracing_subscriber::{
    EnvFilter,
    fmt::{fmt, time::ChronoLocal, writer::MakeWriterExt},
};

/// Keeps the file writer alive so buffered lines are flushed on shutdown.
static FILE_GUARD: OnceLock<non_blocking::WorkerGuard> = OnceLock::new();

/// Installs the global subscriber.
///
/// Filtering follows `RUST_LOG` (defaults to `info`). When `LOG_DIR` is set,
/// records are also written to a daily rotated `squadseek.log` file in that
/// directory, keeping at most `LOG_MAX_FILES` files when given.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_target(false)
        .with_level(true);

    let file_writer = env::var("LOG_DIR").ok().and_then(file_writer);

    match file_writer {
        Some(file) => {
            let stdout = std::io::stdout.with_max_level(tracing::Level::INFO);
            builder.with_ansi(false).with_writer(stdout.and(file)).init();
        }
        None => builder.with_ansi(true).init(),
    }

    tracing::info!("📝 Logger initialized");
}

fn file_writer(dir: String) -> Option<NonBlocking> {
    let max_files = env::var("LOG_MAX_FILES")
        .ok()
        .and_then(|v| v.parse::<usize>().ok());

    let mut file_builder = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("squadseek.log");

    if let Some(n) = max_files {
        file_builder = file_builder.max_log_files(n);
    }

    // The subscriber is not installed yet, so stderr is the only place to complain.
    let appender = match file_builder.build(&dir) {
        Ok(appender) => appender,
        Err(err) => {
            eprintln!("cannot write logs to {dir}: {err}");
            return None;
        }
    };

    let (writer, guard) = non_blocking(appender);
    FILE_GUARD.set(guard).ok()?;

    Some(writer)
}
