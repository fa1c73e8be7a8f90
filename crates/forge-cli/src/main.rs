mod cmd;
mod output;

use clap::{Parser, Subcommand};
use cmd::setup::SetupArgs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "forge",
    about = "Preprint forge — stable project identities and document artifacts for paper prompts",
    version,
    propagate_version = true
)]
struct Cli {
    /// Base directory holding all projects and the name cache
    #[arg(long, global = true, env = "FORGE_DIR", default_value = forge_core::paths::DEFAULT_BASE_DIR)]
    base_dir: PathBuf,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the base directory and default configuration
    Init,

    /// Resolve a prompt to its project and materialize document variants
    Setup(SetupArgs),

    /// Print the project name recorded for a prompt
    Lookup {
        /// Free-text paper prompt
        prompt: String,
    },

    /// List tracked projects and their artifacts
    List,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let result = match cli.command {
        Commands::Init => cmd::init::run(&cli.base_dir),
        Commands::Setup(args) => cmd::setup::run(&cli.base_dir, args, cli.json),
        Commands::Lookup { prompt } => cmd::lookup::run(&cli.base_dir, &prompt, cli.json),
        Commands::List => cmd::list::run(&cli.base_dir, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
