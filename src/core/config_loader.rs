//! # Config Loader
//!
//! Locates and parses the raw configuration for a run. The nearest
//! `.erun.toml` in the working directory or any ancestor wins. Without one,
//! the per-user `config.toml` (in the system config dir) is used, and without
//! that, the empty configuration.
use crate::{
    constants::{CONFIG_FILENAME, USER_CONFIG_DIR, USER_CONFIG_FILENAME},
    models::RawSettings,
};
use std::{
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Errors raised while reading a config file.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file could not be read.
    #[error("Could not read config file '{path}': {source}")]
    Io {
        /// The config file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has the wrong shape.
    #[error("Invalid config file '{path}': {source}")]
    Toml {
        /// The config file.
        path: PathBuf,
        /// The parser diagnostic.
        #[source]
        source: toml::de::Error,
    },
}

/// Returns the nearest `.erun.toml` at or above `start`, if any.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    // Canonicalise so `..` components and symlinks don't cut the walk short.
    let start = dunce::canonicalize(start).unwrap_or_else(|_| start.to_path_buf());
    start
        .ancestors()
        .map(|dir| dir.join(CONFIG_FILENAME))
        .find(|candidate| candidate.is_file())
}

/// The per-user fallback config path, if the platform has a config dir.
pub fn user_config_file() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILENAME))
}

/// Reads and parses one config file.
pub fn load_file(path: &Path) -> Result<RawSettings, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| LoadError::Toml {
        path: path.to_path_buf(),
        source,
    })
}

/// Finds and loads the configuration that applies to `start`.
///
/// `user_file` is the fallback layer; pass `user_config_file()` for the real one.
pub fn discover(start: &Path, user_file: Option<&Path>) -> Result<RawSettings, LoadError> {
    let chosen = find_config_file(start).or_else(|| {
        user_file
            .filter(|path| path.is_file())
            .map(Path::to_path_buf)
    });

    match chosen {
        Some(path) => {
            log::debug!("Using config file {}", path.display());
            load_file(&path)
        }
        None => {
            log::debug!("No config file found from {}", start.display());
            Ok(RawSettings::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_nearest_config_wins() {
        let tmp = tempfile::tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join(CONFIG_FILENAME), "log = \"ERROR\"").unwrap();
        fs::write(tmp.path().join("a").join(CONFIG_FILENAME), "log = \"DEBUG\"").unwrap();

        let raw = discover(&nested, None).unwrap();
        assert_eq!(raw.log.as_deref(), Some("DEBUG"));
    }

    #[test]
    fn test_user_file_is_the_fallback() {
        let project = tempfile::tempdir().unwrap();
        let home = tempfile::tempdir().unwrap();
        let user_file = home.path().join(USER_CONFIG_FILENAME);
        fs::write(&user_file, "[default]\npreset = \"vssh\"\n").unwrap();

        let raw = discover(project.path(), Some(&user_file)).unwrap();
        assert_eq!(raw.default.preset.as_deref(), Some("vssh"));

        // A project file shadows the user file entirely.
        fs::write(project.path().join(CONFIG_FILENAME), "log = \"WARN\"").unwrap();
        let raw = discover(project.path(), Some(&user_file)).unwrap();
        assert_eq!(raw.default.preset, None);
        assert_eq!(raw.log.as_deref(), Some("WARN"));
    }

    #[test]
    fn test_nothing_found_is_empty() {
        let project = tempfile::tempdir().unwrap();
        let missing = project.path().join("nope.toml");
        let raw = discover(project.path(), Some(&missing)).unwrap();
        assert_eq!(raw, RawSettings::default());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        fs::write(
            tmp.path().join(CONFIG_FILENAME),
            "[default]\nprefix = \"not a list\"\n",
        )
        .unwrap();
        let err = discover(tmp.path(), None).unwrap_err();
        assert!(matches!(err, LoadError::Toml { .. }));
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_file(&tmp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }
}
