mod log_level;

pub use log_level::LogLevel;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Settings that are not part of the page itself.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[serde(default)]
pub struct GeneralSettings {
    /// Verbosity of the log output when `RUST_LOG` is unset.
    pub log_level: LogLevel,
}
