// src/core/mod.rs

/// Finding and reading `.erun.toml`.
pub mod config_loader;
/// Template expansion and command execution.
pub mod dispatcher;
/// Args template tokens.
pub mod placeholder;
/// Execution presets and preset inference.
pub mod preset;
/// Resolution of a single profile.
pub mod profile;
/// The resolved settings for a run.
pub mod settings;
