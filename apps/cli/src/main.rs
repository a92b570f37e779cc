use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod config;
mod exit_codes;

use cli::{Cli, Command};
use config::AppConfig;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::from(exit_codes::USAGE_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<u8> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    if let Some(level) = cli.log_level {
        config.log.level = level;
    }
    let _log = moji_log::init_with(config.log.clone())?;
    tracing::debug!(?config, "configuration loaded");

    let mut stdout = io::stdout().lock();
    match cli.cmd {
        Command::Check(args) => commands::check(args, &config, &mut stdout),
        Command::Policies(args) => commands::policies(&args, &config, &mut stdout),
    }
}
