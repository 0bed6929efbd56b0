use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "filekit",
    version,
    about = "Directory listing and template filling utilities"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    List(ListCommand),
    Fill(FillCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct ListCommand {
    pub path: PathBuf,

    /// Emit flat relative paths instead of a tree
    #[arg(long)]
    pub flat: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    pub no_recursive: bool,

    /// Skip entries whose name matches this pattern (implies --flat;
    /// default skips dot-prefixed names)
    #[arg(long, value_name = "REGEX")]
    pub skip: Option<String>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct FillCommand {
    pub template: PathBuf,

    /// Replacement pair, applied in the order given
    #[arg(long = "set", value_name = "PLACEHOLDER=VALUE")]
    pub set: Vec<String>,
}
