use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "moji",
    version,
    about = "Validate text against named character policies (name, email, password, phone)"
)]
pub struct Cli {
    /// Configuration file (defaults to ./moji.toml when present)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log filter directive, overriding configuration and MOJI_LOG
    #[arg(long, global = true, value_name = "FILTER")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate one piece of text
    Check(CheckArgs),
    /// List registered policies and their rules
    Policies(PoliciesArgs),
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Policy to validate against (defaults to `default_policy` from configuration)
    #[arg(short, long)]
    pub policy: Option<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Text to validate; one line is read from stdin when omitted
    pub text: Option<String>,
}

#[derive(Args, Debug)]
pub struct PoliciesArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
