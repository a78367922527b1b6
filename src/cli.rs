// src/cli.rs

use clap::Parser;
use std::path::PathBuf;
use thiserror::Error;

/// Errors in the command line itself.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    /// No COMMAND after the wrapper's own flags.
    #[error("No command given.")]
    MissingCommand,
}

/// erun: run a command through the execution profile configured for it.
///
/// The profile (from the nearest `.erun.toml`) decides what the command is
/// wrapped in, e.g. `vagrant ssh --` when working in a Vagrant project.
/// Everything from COMMAND onward is passed through untouched, including
/// arguments that look like flags.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(disable_help_subcommand = true)]
pub struct Cli {
    /// Print the final command line instead of running it.
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Use this config file instead of searching for `.erun.toml`.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// The command to run, followed by its arguments.
    #[arg(
        value_name = "COMMAND [ARGS]",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command_line: Vec<String>,
}

/// A parsed invocation: the command name and its opaque trailing arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The command name, used for profile selection and `{cmd}`.
    pub command: String,
    /// Everything after the command, untouched.
    pub args: Vec<String>,
}

impl Cli {
    /// Splits the command line into the command and its arguments.
    pub fn invocation(&self) -> Result<Invocation, CliError> {
        let (command, args) = self
            .command_line
            .split_first()
            .ok_or(CliError::MissingCommand)?;
        Ok(Invocation {
            command: command.clone(),
            args: args.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("erun").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_no_command_is_missing_command() {
        let cli = parse(&[]);
        assert_eq!(cli.invocation(), Err(CliError::MissingCommand));

        let cli = parse(&["--dry-run"]);
        assert!(cli.dry_run);
        assert_eq!(cli.invocation(), Err(CliError::MissingCommand));
    }

    #[test]
    fn test_wrapper_flags_before_command() {
        let cli = parse(&["-n", "--config", "ci.toml", "pytest", "tests/"]);
        assert!(cli.dry_run);
        assert_eq!(cli.config, Some(PathBuf::from("ci.toml")));
        assert_eq!(
            cli.invocation().unwrap(),
            Invocation {
                command: "pytest".into(),
                args: vec!["tests/".into()],
            }
        );
    }

    #[test]
    fn test_flags_after_command_are_opaque() {
        let cli = parse(&["make", "-n", "--dry-run", "--config", "x", "-v"]);
        assert!(!cli.dry_run);
        assert_eq!(cli.config, None);
        let invocation = cli.invocation().unwrap();
        assert_eq!(invocation.command, "make");
        assert_eq!(
            invocation.args,
            vec!["-n", "--dry-run", "--config", "x", "-v"]
        );
    }
}
