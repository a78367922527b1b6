// src/models.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// --- `.erun.toml` MODELS (What is read from the configuration file) ---
// Every field is optional. For `prefix` and `args`, `None` (key absent) and
// `Some(vec![])` (explicit empty list) resolve differently.

/// The raw, unresolved form of a profile as written in `.erun.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawProfile {
    /// Preset name; guessed from the filesystem when absent.
    pub preset: Option<String>,
    /// Tokens placed before the expanded template.
    pub prefix: Option<Vec<String>>,
    /// The args template, placeholders still in their raw spelling.
    pub args: Option<Vec<String>>,
}

/// Represents the deserialized structure of an `.erun.toml` file.
/// Unknown keys are ignored.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSettings {
    /// Profile used by commands without an override.
    pub default: RawProfile,
    /// Per-command overrides, keyed by command name.
    pub commands: BTreeMap<String, RawProfile>,
    /// Log level name.
    pub log: Option<String>,
}
