use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Sample List - A scrollable terminal list of generated sample products
#[derive(Parser, Debug)]
#[command(name = "sample-list")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Launch the interactive list
    Tui(TuiArgs),

    /// Print generated sample records
    Generate(GenerateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Print the man page
    Man,
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[derive(Args, Debug)]
pub struct TuiArgs {
    /// Number of records generated on start
    #[arg(short = 'n', long, value_name = "N")]
    pub count: Option<usize>,

    /// Seed for reproducible sample data
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Jump to the top instead of animating
    #[arg(long)]
    pub no_smooth: bool,

    /// Don't capture the mouse
    #[arg(long)]
    pub no_mouse: bool,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of records to print
    #[arg(short = 'n', long, default_value = "20", value_name = "N")]
    pub count: usize,

    /// Seed for reproducible sample data
    #[arg(short, long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Currency symbol for table output
    #[arg(long, value_name = "SYMBOL")]
    pub currency: Option<String>,
}
