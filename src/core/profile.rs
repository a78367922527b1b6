// src/core/profile.rs

//! # Profile Resolution
//!
//! Turns a partially-specified `RawProfile` into a complete `Profile`. The
//! three fields resolve in a fixed order, since the prefix and args defaults
//! both depend on the preset:
//!
//! 1. **preset**: the explicit name, or a guess from filesystem markers.
//! 2. **prefix**: the explicit list (even if empty), or the preset's default.
//! 3. **args**: the explicit template (or `["{cmd}"]` when absent), with an
//!    any-args placeholder appended if it has none.

use crate::{
    constants::{VAGRANT_PREFIX, VSSH_PREFIX},
    core::{
        placeholder::{self, ArgToken, Placeholder},
        preset::{self, Preset},
    },
    models::RawProfile,
};
use thiserror::Error;

/// Errors raised while resolving a profile.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// The configured preset is not one of the known names.
    #[error("Invalid preset '{value}'. Expected one of: native, vagrant, vssh, compose.")]
    InvalidPreset {
        /// The rejected name, as written.
        value: String,
    },
}

/// A fully resolved execution profile.
///
/// `args` always holds at least one any-args placeholder, so trailing
/// arguments are never dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// The execution context.
    pub preset: Preset,
    /// Tokens placed before the expanded template.
    pub prefix: Vec<String>,
    /// The parsed args template.
    pub args: Vec<ArgToken>,
}

impl Profile {
    /// Resolves a raw profile, guessing the preset from the working directory when unset.
    pub fn resolve(raw: &RawProfile) -> Result<Self, ProfileError> {
        Self::resolve_with(raw, preset::guess_preset)
    }

    /// Resolves a raw profile, calling `guess` only if no preset is configured.
    pub fn resolve_with<F>(raw: &RawProfile, guess: F) -> Result<Self, ProfileError>
    where
        F: FnOnce() -> Preset,
    {
        let preset = resolve_preset(raw.preset.as_deref(), guess)?;
        let prefix = resolve_prefix(raw.prefix.as_deref(), preset);
        let args = resolve_args(raw.args.as_deref(), preset);
        Ok(Self {
            preset,
            prefix,
            args,
        })
    }
}

impl From<&Profile> for RawProfile {
    fn from(profile: &Profile) -> Self {
        Self {
            preset: Some(profile.preset.to_string()),
            prefix: Some(profile.prefix.clone()),
            args: Some(profile.args.iter().map(ToString::to_string).collect()),
        }
    }
}

fn resolve_preset<F>(raw: Option<&str>, guess: F) -> Result<Preset, ProfileError>
where
    F: FnOnce() -> Preset,
{
    match raw {
        Some(name) => name.parse().map_err(|_| ProfileError::InvalidPreset {
            value: name.to_string(),
        }),
        None => {
            let guessed = guess();
            log::debug!("No preset configured, guessed '{}'.", guessed);
            Ok(guessed)
        }
    }
}

fn resolve_prefix(raw: Option<&[String]>, preset: Preset) -> Vec<String> {
    if let Some(prefix) = raw {
        return prefix.to_vec();
    }
    let default: &[&str] = match preset {
        Preset::Vagrant => VAGRANT_PREFIX,
        Preset::Vssh => VSSH_PREFIX,
        Preset::Native | Preset::Compose => &[],
    };
    default.iter().map(|s| s.to_string()).collect()
}

fn resolve_args(raw: Option<&[String]>, preset: Preset) -> Vec<ArgToken> {
    let mut args = match raw {
        Some(tokens) => placeholder::parse_template(tokens),
        None => vec![ArgToken::Placeholder(Placeholder::Cmd)],
    };
    if !args.iter().any(ArgToken::is_any_args) {
        let fill = if preset.is_remote_shell() {
            Placeholder::ShellArgs
        } else {
            Placeholder::Args
        };
        args.push(ArgToken::Placeholder(fill));
    }
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::placeholder::Placeholder::{Args, Cmd, ShellArgs};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn raw(preset: Option<&str>, prefix: Option<&[&str]>, args: Option<&[&str]>) -> RawProfile {
        RawProfile {
            preset: preset.map(str::to_string),
            prefix: prefix.map(strings),
            args: args.map(strings),
        }
    }

    fn no_guess() -> Preset {
        panic!("preset inference must not run when a preset is configured")
    }

    #[test]
    fn test_default_prefix_per_preset() {
        let expected: [(&str, &[&str]); 4] = [
            ("native", &[]),
            ("compose", &[]),
            ("vagrant", &["vagrant", "ssh", "--"]),
            ("vssh", &["vssh"]),
        ];
        for (name, prefix) in expected {
            let profile = Profile::resolve_with(&raw(Some(name), None, None), no_guess).unwrap();
            assert_eq!(profile.prefix, strings(prefix), "preset {name}");
        }
    }

    #[test]
    fn test_explicit_empty_prefix_is_kept() {
        let profile =
            Profile::resolve_with(&raw(Some("vagrant"), Some(&[]), None), no_guess).unwrap();
        assert!(profile.prefix.is_empty());
    }

    #[test]
    fn test_absent_args_default_to_cmd_plus_fill() {
        let native = Profile::resolve_with(&raw(Some("native"), None, None), no_guess).unwrap();
        assert_eq!(native.args, vec![ArgToken::from(Cmd), ArgToken::from(Args)]);

        let vssh = Profile::resolve_with(&raw(Some("vssh"), None, None), no_guess).unwrap();
        assert_eq!(vssh.args, vec![ArgToken::from(Cmd), ArgToken::from(ShellArgs)]);
    }

    #[test]
    fn test_explicit_empty_args_only_get_the_fill() {
        let profile =
            Profile::resolve_with(&raw(Some("vagrant"), None, Some(&[])), no_guess).unwrap();
        assert_eq!(profile.args, vec![ArgToken::from(ShellArgs)]);
    }

    #[test]
    fn test_existing_any_args_is_not_duplicated() {
        let profile = Profile::resolve_with(
            &raw(Some("vagrant"), None, Some(&["{args}", "{cmd}", "--verbose"])),
            no_guess,
        )
        .unwrap();
        assert_eq!(
            profile.args,
            vec![
                ArgToken::from(Args),
                ArgToken::from(Cmd),
                ArgToken::Literal("--verbose".into())
            ]
        );
    }

    #[test]
    fn test_exactly_one_any_args_after_resolution() {
        let templates: [&[&str]; 4] = [&[], &["{cmd}"], &["{cmd}", "{cmd}", "x"], &["a", "b"]];
        for preset in Preset::ALL {
            for template in templates {
                let profile = Profile::resolve_with(
                    &raw(Some(preset.as_str()), None, Some(template)),
                    no_guess,
                )
                .unwrap();
                let count = profile.args.iter().filter(|t| t.is_any_args()).count();
                assert_eq!(count, 1, "{preset} {template:?}");
            }
        }
    }

    #[test]
    fn test_missing_preset_uses_guess() {
        let profile = Profile::resolve_with(&RawProfile::default(), || Preset::Vagrant).unwrap();
        assert_eq!(profile.preset, Preset::Vagrant);
        assert_eq!(profile.prefix, strings(&["vagrant", "ssh", "--"]));
        assert_eq!(profile.args, vec![ArgToken::from(Cmd), ArgToken::from(ShellArgs)]);
    }

    #[test]
    fn test_invalid_preset_is_an_error() {
        let err = Profile::resolve_with(&raw(Some("docker"), None, None), no_guess).unwrap_err();
        assert_eq!(
            err,
            ProfileError::InvalidPreset {
                value: "docker".into()
            }
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let inputs = [
            raw(Some("native"), None, None),
            raw(Some("vssh"), Some(&["ssh", "box"]), Some(&["sudo", "{cmd}"])),
            raw(Some("vagrant"), None, Some(&["{shell_args}"])),
            raw(Some("compose"), Some(&[]), Some(&["exec", "web", "{cmd}"])),
        ];
        for input in inputs {
            let once = Profile::resolve_with(&input, no_guess).unwrap();
            let twice = Profile::resolve_with(&RawProfile::from(&once), no_guess).unwrap();
            assert_eq!(once, twice);
        }
    }
}
