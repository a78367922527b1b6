// src/core/settings.rs

use crate::{
    core::{
        preset::{self, Preset},
        profile::{Profile, ProfileError},
    },
    models::{RawProfile, RawSettings},
};
use log::LevelFilter;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while building `Settings`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    /// A profile failed to resolve.
    #[error("Profile '{name}': {source}")]
    Profile {
        /// `default` or the command name.
        name: String,
        /// Why resolution failed.
        #[source]
        source: ProfileError,
    },
    /// The configured log level is not one of the known names.
    #[error(
        "Invalid log level '{value}'. Expected one of: CRITICAL, FATAL, ERROR, WARN, WARNING, INFO, DEBUG."
    )]
    InvalidLogLevel {
        /// The rejected name, as written.
        value: String,
    },
}

/// The accepted log level names. Several are aliases of the same severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LogLevel {
    /// Same as `Error`.
    Critical,
    /// Same as `Error`.
    Fatal,
    /// Errors only.
    Error,
    /// Warnings and errors.
    Warn,
    /// Same as `Warn`.
    Warning,
    /// The default.
    #[default]
    Info,
    /// Everything, including resolved profiles and the final argv.
    Debug,
}

impl LogLevel {
    /// Every level name.
    pub const ALL: [Self; 7] = [
        Self::Critical,
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Warning,
        Self::Info,
        Self::Debug,
    ];

    /// The upper-case name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
        }
    }

    /// The `log` crate filter this level maps to.
    pub fn to_filter(self) -> LevelFilter {
        match self {
            Self::Critical | Self::Fatal | Self::Error => LevelFilter::Error,
            Self::Warn | Self::Warning => LevelFilter::Warn,
            Self::Info => LevelFilter::Info,
            Self::Debug => LevelFilter::Debug,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses a level name case-insensitively (`debug`, `Debug` and `DEBUG` are all accepted).
impl FromStr for LogLevel {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|level| level.as_str() == upper)
            .ok_or_else(|| SettingsError::InvalidLogLevel {
                value: s.to_string(),
            })
    }
}

/// The fully resolved, read-only configuration for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Profile for commands without an override.
    pub default: Profile,
    /// Per-command overrides.
    pub commands: BTreeMap<String, Profile>,
    /// The authoritative log level.
    pub log: LogLevel,
}

impl Settings {
    /// Resolves raw settings. A missing preset is guessed from the working directory.
    pub fn build(raw: &RawSettings, env_log: Option<&str>) -> Result<Self, SettingsError> {
        Self::build_with(raw, env_log, preset::guess_preset)
    }

    /// Resolves raw settings with a custom preset guesser.
    ///
    /// The default profile and each command override are resolved on their
    /// own: an override never inherits fields from `default`. The `log` key
    /// wins over `env_log`; with neither, the level is INFO.
    pub fn build_with<F>(
        raw: &RawSettings,
        env_log: Option<&str>,
        guess: F,
    ) -> Result<Self, SettingsError>
    where
        F: Fn() -> Preset,
    {
        let default = resolve_named("default", &raw.default, &guess)?;

        let commands = raw
            .commands
            .iter()
            .map(|(name, raw_profile)| {
                let profile = resolve_named(name, raw_profile, &guess)?;
                Ok((name.clone(), profile))
            })
            .collect::<Result<BTreeMap<_, _>, SettingsError>>()?;

        let log = match raw.log.as_deref().or(env_log) {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };

        Ok(Self {
            default,
            commands,
            log,
        })
    }

    /// Returns the override for `command`, or the default profile.
    pub fn profile_for(&self, command: &str) -> &Profile {
        self.commands.get(command).unwrap_or(&self.default)
    }
}

fn resolve_named<F>(name: &str, raw: &RawProfile, guess: &F) -> Result<Profile, SettingsError>
where
    F: Fn() -> Preset,
{
    let profile = Profile::resolve_with(raw, guess).map_err(|source| SettingsError::Profile {
        name: name.to_string(),
        source,
    })?;
    log::debug!("Resolved profile '{}': {:?}", name, profile);
    Ok(profile)
}
