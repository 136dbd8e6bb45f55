use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Typeface used for all text on the page.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FontMode {
    /// The built-in typeface.
    #[default]
    Default,

    /// The web font named by `fontWeb`.
    Web,
}
