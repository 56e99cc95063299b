use clap::Parser;
use geodl_core::logging;

mod cli;

use crate::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging as early as possible; stderr if the state dir is unusable.
    if let Err(err) = logging::init_logging(cli.verbose) {
        logging::init_logging_stderr(cli.verbose);
        tracing::warn!("file logging unavailable: {:#}", err);
    }

    if let Err(err) = cli.run().await {
        tracing::error!("{:#}", err);
        eprintln!("geodl error: {:#}", err);
        std::process::exit(1);
    }
}
