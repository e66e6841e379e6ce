use anyhow::Result;
use clap::Parser;
use purge::config::load_config;
use purge::fs::expand_home;
use purge::logging::init_logging;
use purge::{ConsoleListener, Remover};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Delete files and directories in the background",
    long_about = None
)]
struct Cli {
    /// Paths to remove, processed in order
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Configuration file (defaults to <config dir>/purge/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print listener events as JSON lines
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.logging.level);

    let paths = cli
        .paths
        .iter()
        .map(|p| expand_home(p))
        .collect::<Result<Vec<_>>>()?;

    let listener = ConsoleListener::new(cli.json);
    let remover = Remover::new(config.notification);
    remover.remove(&paths, &listener).await;
    Ok(())
}
