// src/bin/erun.rs

//! The `erun` command-line entry point.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::*;
use erun::{
    cli::{Cli, CliError},
    constants::LOG_ENV_VAR,
    core::{config_loader, dispatcher, settings::Settings},
    system::{
        executor::{ExecutionError, ProcessRunner},
        logging::Logging,
    },
};
use std::env;

/// The main entry point of the `erun` application.
/// It sets up logging, parses arguments, runs the command and turns the
/// outcome into the process exit code.
fn main() {
    let mut logging = Logging::init();
    let cli = Cli::parse();

    let code = match run_cli(&cli, &mut logging) {
        Ok(code) => code,
        Err(e) => {
            if let Some(CliError::MissingCommand) = e.downcast_ref::<CliError>() {
                eprintln!("{}: {}\n", "Error".red().bold(), e);
                eprintln!("{}", Cli::command().render_usage());
                1
            } else if let Some(exec_err) = e.downcast_ref::<ExecutionError>() {
                eprintln!("{}: {}", "Error".red().bold(), e);
                exec_err.exit_code()
            } else {
                eprintln!("{}: {}", "Error".red().bold(), e);
                1
            }
        }
    };
    std::process::exit(code);
}

/// Loads the configuration, resolves settings and dispatches the command.
/// Returns the exit code to hand back to the caller.
fn run_cli(cli: &Cli, logging: &mut Logging) -> Result<i32> {
    log::debug!("CLI args parsed: {:?}", cli);
    let invocation = cli.invocation()?;

    let raw = match &cli.config {
        Some(path) => config_loader::load_file(path)?,
        None => {
            let cwd = env::current_dir()?;
            let user_file = config_loader::user_config_file();
            config_loader::discover(&cwd, user_file.as_deref())?
        }
    };

    let env_log = env::var(LOG_ENV_VAR).ok();
    let settings = Settings::build(&raw, env_log.as_deref())?;
    logging.apply(settings.log);

    let code = dispatcher::run(
        &settings,
        &invocation.command,
        &invocation.args,
        cli.dry_run,
        &ProcessRunner,
    )
    .map_err(|e| match e {
        dispatcher::DispatchError::Execution(exec) => anyhow::Error::new(exec),
        other => anyhow::Error::new(other),
    })?;
    Ok(code)
}
