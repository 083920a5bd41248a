use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression, kept as the raw string it was configured with.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// # Examples
    /// ```
    /// use locality_observe::LoggerLevel;
    ///
    /// let lvl = LoggerLevel::new("locality_model=trace,warn").unwrap();
    /// assert_eq!(lvl.as_str(), "locality_model=trace,warn");
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter; `info` if the stored expression no longer parses.
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_filters() {
        for lvl in ["info", "warn", "trace", "locality_model=trace,locality_cli=debug,warn"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} should parse");
        }
    }

    #[test]
    fn rejects_invalid_filters() {
        for lvl in ["locality_model=chatty", "a=trace,b=nope"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl} should be rejected");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_is_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }
}
