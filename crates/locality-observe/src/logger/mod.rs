mod config;
mod error;
mod log;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Can succeed only once per process; later calls return [`LoggerError::AlreadyInitialized`].
///
/// # Examples
/// ```rust
/// use locality_observe::{LoggerConfig, init_logger};
///
/// let config = LoggerConfig::default();
/// init_logger(&config).expect("logger must initialize once");
///
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => log::logger_text(cfg),
        LoggerFormat::Json => log::logger_json(cfg),
        LoggerFormat::Journald => log::logger_journald(cfg),
    }
}
