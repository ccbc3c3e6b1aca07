use std::fs::File;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming a log file.
pub const LOG_FILE_ENV: &str = "CONDUIT_LOG";

/// Initialize tracing.
///
/// Logs go to stderr so they never mix with command output. With
/// `CONDUIT_LOG` set they go to `{path}.{timestamp}.{pid}` instead, so
/// concurrent invocations do not clobber each other. If that file cannot be
/// created, stderr is used.
///
/// The filter comes from `RUST_LOG`, falling back to `default_level`.
pub fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let log_file = std::env::var(LOG_FILE_ENV)
        .ok()
        .and_then(|base| open_log_file(&base));
    let (writer, ansi) = match log_file {
        Some(file) => (BoxMakeWriter::new(file), false),
        None => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init();
}

fn open_log_file(base: &str) -> Option<File> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(base, timestamp, std::process::id());

    match File::create(&path) {
        Ok(file) => Some(file),
        Err(err) => {
            eprintln!(
                "Warning: Failed to create log file {}: {}; logging to stderr",
                path, err
            );
            None
        }
    }
}

fn log_file_path(base: &str, timestamp: u64, pid: u32) -> String {
    format!("{}.{}.{}", base, timestamp, pid)
}
