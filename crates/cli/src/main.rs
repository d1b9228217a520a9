mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use daybook_core::config::loader::ConfigLoader;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "dbk", version, about = "Generate and update markdown daily notes")]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    profile: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved paths
    Doctor,

    /// Create a daily note from the built-in template
    New(NewArgs),

    /// Apply summary, scores and reflections to a daily note
    Apply(ApplyArgs),
}

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Date or title of the note (e.g. "2024-03-10"); defaults to today
    pub title: Option<String>,

    /// Overwrite an existing note
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct ApplyArgs {
    /// Field file (JSON, or YAML with a .yaml/.yml extension); "-" reads JSON from stdin
    #[arg(long, value_name = "PATH")]
    pub fields: PathBuf,

    /// File name in the daily directory, or a date/title hint; defaults to today
    pub note: Option<String>,

    /// Print the result instead of writing it
    #[arg(long)]
    pub stdout: bool,
}

fn main() {
    let cli = Cli::parse();

    // Commands report config errors themselves.
    let _log_guard = ConfigLoader::load(cli.config.as_deref(), cli.profile.as_deref())
        .ok()
        .and_then(|cfg| logging::init(&cfg));

    match cli.command {
        Commands::Doctor => {
            cmd::doctor::run(cli.config.as_deref(), cli.profile.as_deref())
        }
        Commands::New(args) => {
            cmd::new::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
        Commands::Apply(args) => {
            cmd::apply::run(cli.config.as_deref(), cli.profile.as_deref(), &args)
        }
    }
}
