use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::object::{LoggerFormat, LoggerLevel};

/// Logger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Output format.
    pub format: LoggerFormat,
    /// Filter expression (e.g. `"warn"`, `"locality_model=trace,info"`).
    pub level: LoggerLevel,
    /// Include the event target (module path) in each line.
    pub with_targets: bool,
    /// Allow ANSI colors in text output.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Colors are used only when enabled and the log stream (stderr) is a terminal.
    pub fn should_use_color(&self) -> bool {
        self.use_color && std::io::stderr().is_terminal()
    }
}
