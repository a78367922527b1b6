// src/core/dispatcher.rs

use crate::{
    core::{
        placeholder::{ArgToken, Placeholder},
        profile::Profile,
        settings::Settings,
    },
    system::executor::{ExecutionError, Runner},
};
use thiserror::Error;

/// Errors raised while dispatching a command.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// The argument cannot be represented as a shell word.
    #[error("Argument {0:?} contains a NUL byte and cannot be shell-quoted.")]
    Quote(String),
    /// The child process could not be run.
    #[error(transparent)]
    Execution(#[from] ExecutionError),
}

/// Expands `profile` for `command` into the final argument vector.
///
/// The prefix comes first, then each template token in order: `{cmd}` becomes
/// the command name, `{args}` the raw arguments as separate tokens, and
/// `{shell_args}` the raw arguments each quoted as one shell word.
pub fn expand(
    profile: &Profile,
    command: &str,
    raw_args: &[String],
) -> Result<Vec<String>, DispatchError> {
    let mut argv = profile.prefix.clone();
    for token in &profile.args {
        match token {
            ArgToken::Literal(s) => argv.push(s.clone()),
            ArgToken::Placeholder(Placeholder::Cmd) => argv.push(command.to_string()),
            ArgToken::Placeholder(Placeholder::Args) => argv.extend(raw_args.iter().cloned()),
            ArgToken::Placeholder(Placeholder::ShellArgs) => {
                for arg in raw_args {
                    let quoted =
                        shlex::try_quote(arg).map_err(|_| DispatchError::Quote(arg.clone()))?;
                    argv.push(quoted.into_owned());
                }
            }
        }
    }
    Ok(argv)
}

/// Renders an argument vector as a single line a POSIX shell would split back into `argv`.
pub fn render_command_line(argv: &[String]) -> Result<String, DispatchError> {
    shlex::try_join(argv.iter().map(String::as_str)).map_err(|_| {
        let culprit = argv
            .iter()
            .find(|a| a.contains('\0'))
            .cloned()
            .unwrap_or_default();
        DispatchError::Quote(culprit)
    })
}

/// Runs `command` with its trailing arguments through the matching profile.
///
/// In dry-run mode the final command line is printed to stdout and nothing is
/// spawned; the result is always 0. Otherwise the child's exit code is returned.
pub fn run(
    settings: &Settings,
    command: &str,
    raw_args: &[String],
    dry_run: bool,
    runner: &dyn Runner,
) -> Result<i32, DispatchError> {
    let profile = settings.profile_for(command);
    let argv = expand(profile, command, raw_args)?;

    if dry_run {
        println!("{}", render_command_line(&argv)?);
        return Ok(0);
    }

    log::debug!("Executing: {:?}", argv);
    Ok(runner.run(&argv)?)
}
