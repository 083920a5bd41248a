use tracing::Subscriber;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    object::UtcRfc3339,
};

/// Text logger on stderr; stdout stays free for command output.
pub fn logger_text(cfg: &LoggerConfig) -> LoggerResult<()> {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    init_subscriber(subscriber)
}

/// JSON logger on stderr.
pub fn logger_json(cfg: &LoggerConfig) -> LoggerResult<()> {
    let fmt_layer = fmt::layer()
        .json()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(fmt_layer);
    init_subscriber(subscriber)
}

#[cfg(target_os = "linux")]
pub fn logger_journald(cfg: &LoggerConfig) -> LoggerResult<()> {
    let journald =
        tracing_journald::layer().map_err(|e| LoggerError::JournaldInitFailed(e.to_string()))?;

    let subscriber = tracing_subscriber::registry()
        .with(cfg.level.to_env_filter())
        .with(journald);
    init_subscriber(subscriber)
}

#[cfg(not(target_os = "linux"))]
pub fn logger_journald(_cfg: &LoggerConfig) -> LoggerResult<()> {
    Err(LoggerError::JournaldNotSupported)
}

fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
