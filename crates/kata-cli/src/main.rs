mod cli;
mod commands;
mod error;
mod logging;
mod render;
mod utils;

use crate::cli::{Cli, Commands};
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("❌ Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet)?;

    info!("🚀 kata v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let command_result = match cli.command {
        Commands::Spiral(args) => {
            info!("Dispatching to 'spiral' command.");
            commands::grid::run_spiral(args, &mut out)
        }
        Commands::Rotate(args) => {
            info!("Dispatching to 'rotate' command.");
            commands::grid::run_rotate(args, &mut out)
        }
        Commands::Task(args) => {
            info!("Dispatching to 'task' command.");
            commands::task::run(args, &mut out)
        }
    };

    match &command_result {
        Ok(_) => info!("✅ Command completed successfully."),
        Err(e) => error!("❌ Command failed: {}", e),
    }

    command_result
}
