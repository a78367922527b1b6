// src/core/preset.rs

use crate::constants::{VAGRANT_DIR, VSSH_MARKER};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

/// The execution context a profile runs in. Drives the default prefix and
/// which any-args placeholder is appended to an incomplete template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Preset {
    /// Run on the host.
    Native,
    /// Run inside the Vagrant machine through `vagrant ssh --`.
    Vagrant,
    /// Run inside the Vagrant machine through `vssh`.
    Vssh,
    /// Run through docker compose; the prefix has to be configured.
    Compose,
}

impl Preset {
    /// All presets, in the order they are listed in error messages.
    pub const ALL: [Self; 4] = [Self::Native, Self::Vagrant, Self::Vssh, Self::Compose];

    /// The name used for this preset in `.erun.toml`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Vagrant => "vagrant",
            Self::Vssh => "vssh",
            Self::Compose => "compose",
        }
    }

    /// Whether commands cross a remote shell boundary and need their arguments re-quoted.
    pub fn is_remote_shell(self) -> bool {
        match self {
            Self::Vagrant | Self::Vssh => true,
            Self::Native | Self::Compose => false,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a preset. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset;

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.as_str() == s)
            .ok_or(UnknownPreset)
    }
}

/// Guesses the preset from filesystem markers around the current working directory.
///
/// An unreadable working directory is treated like one without markers.
pub fn guess_preset() -> Preset {
    match std::env::current_dir() {
        Ok(cwd) => guess_preset_from(&cwd),
        Err(e) => {
            log::debug!("Could not read current directory ({}); assuming native.", e);
            Preset::Native
        }
    }
}

/// Walks from `start` up to the filesystem root. In each directory, a
/// `.vagrant/vssh.cfg` file selects `vssh` and a bare `.vagrant` selects
/// `vagrant`. The nearest directory with either marker wins.
pub fn guess_preset_from(start: &Path) -> Preset {
    for dir in start.ancestors() {
        let vagrant_dir = dir.join(VAGRANT_DIR);
        if vagrant_dir.join(VSSH_MARKER).exists() {
            log::debug!("Found {} in {}", VSSH_MARKER, vagrant_dir.display());
            return Preset::Vssh;
        }
        if vagrant_dir.exists() {
            log::debug!("Found {}", vagrant_dir.display());
            return Preset::Vagrant;
        }
    }
    Preset::Native
}
