// src/system/logging.rs

//! Two-phase log level setup.
//!
//! The backend (`env_logger`, writing to stderr) is installed once with a
//! provisional level taken from `ERUN_LOG`, so diagnostics emitted while the
//! configuration loads are visible. Once settings resolve, `Logging::apply`
//! sets the authoritative level. The handle is created in `main` and passed
//! to whoever needs to change the level.

use crate::{constants::LOG_ENV_VAR, core::settings::LogLevel};
use log::LevelFilter;
use std::env;

/// Handle to the installed logger.
#[derive(Debug)]
pub struct Logging {
    level: LogLevel,
}

impl Logging {
    /// Installs the logger with the level from `ERUN_LOG` (INFO if unset or invalid).
    pub fn init() -> Self {
        let raw = env::var(LOG_ENV_VAR).ok();
        let level = provisional_level(raw.as_deref());

        // The backend lets everything through; the `log` max level does the filtering.
        let installed = env_logger::Builder::new()
            .filter_level(LevelFilter::Trace)
            .format_target(false)
            .format_timestamp(None)
            .try_init();
        if installed.is_err() {
            // Only happens when a logger is already set, e.g. in tests.
            log::trace!("Logger already installed.");
        }
        log::set_max_level(level.to_filter());

        if let Some(value) = raw.as_deref()
            && value.parse::<LogLevel>().is_err()
        {
            log::warn!("Ignoring invalid {} value '{}' for now.", LOG_ENV_VAR, value);
        }

        Self { level }
    }

    /// Applies the level resolved from settings. Called once per run.
    pub fn apply(&mut self, level: LogLevel) {
        self.level = level;
        log::set_max_level(level.to_filter());
        log::debug!("Log level set to {}", level);
    }

    /// The level currently in effect.
    pub fn level(&self) -> LogLevel {
        self.level
    }
}

fn provisional_level(raw: Option<&str>) -> LogLevel {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}
