//! `erun` resolves a per-command execution profile from `.erun.toml` and runs
//! the command through it (natively, over `vagrant ssh`, through `vssh`, ...).

/// Command-line surface.
pub mod cli;
/// File names, environment variables and default prefixes.
pub mod constants;
/// Profile resolution and command dispatch.
pub mod core;
/// Raw configuration records, as read from TOML.
pub mod models;
/// Process execution and logging.
pub mod system;
