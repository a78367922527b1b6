// src/constants.rs

/// The name of the project configuration file, searched for upward from the working directory.
pub const CONFIG_FILENAME: &str = ".erun.toml";

/// The name of the per-user configuration directory (inside the system config dir).
pub const USER_CONFIG_DIR: &str = "erun";

/// The name of the per-user fallback configuration file (inside `USER_CONFIG_DIR`).
pub const USER_CONFIG_FILENAME: &str = "config.toml";

/// Environment variable holding the log level before the configuration is loaded.
pub const LOG_ENV_VAR: &str = "ERUN_LOG";

/// The directory Vagrant creates next to a `Vagrantfile` once a machine exists.
pub const VAGRANT_DIR: &str = ".vagrant";

/// Marker file (inside `VAGRANT_DIR`) that selects the `vssh` preset.
pub const VSSH_MARKER: &str = "vssh.cfg";

/// Default prefix for the `vagrant` preset.
pub const VAGRANT_PREFIX: &[&str] = &["vagrant", "ssh", "--"];

/// Default prefix for the `vssh` preset.
pub const VSSH_PREFIX: &[&str] = &["vssh"];
