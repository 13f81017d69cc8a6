use crate::config::LoggingConfig;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file base path.
pub const LOG_ENV: &str = "USER_ENTRY_LOG";

/// Initialize file logging from the `[logging]` config section.
///
/// Nothing is written to the terminal: the UI owns it. The base path comes
/// from `USER_ENTRY_LOG`, falling back to `logging.path`; with neither set
/// logging stays off. `RUST_LOG` overrides `logging.filter`.
///
/// Returns the file actually written, `{base}.{timestamp}.{pid}`.
pub fn init_tracing(config: &LoggingConfig) -> Option<PathBuf> {
    let base = log_base(std::env::var_os(LOG_ENV), config)?;

    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = log_file_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: Failed to create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter(&config.filter))
        .with(file_layer)
        .init();

    Some(path)
}

fn log_base(env: Option<OsString>, config: &LoggingConfig) -> Option<OsString> {
    env.filter(|value| !value.is_empty())
        .or_else(|| config.path.clone().map(PathBuf::into_os_string))
}

fn log_file_path(base: &OsString, timestamp: u64, pid: u32) -> PathBuf {
    let mut name = base.clone();
    name.push(format!(".{}.{}", timestamp, pid));
    PathBuf::from(name)
}

fn env_filter(configured: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
