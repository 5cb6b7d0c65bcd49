use clap::Parser;
use tracing::debug;

use disasterscan::cli::Cli;
use disasterscan::interfaces::cli::run_cli_command;
use disasterscan::{config, system};

fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration before anything logs
    config::init_config();
    let app_config = config::get_config();

    // Guard must stay alive so buffered log writes are flushed
    let _guard = system::logging::init_logging(&app_config.logging);
    debug!("Configuration loaded, articles dir: {}", app_config.articles.dir);

    if let Err(e) = run_cli_command(cli.command) {
        eprintln!("{}", e.format_colored());
        std::process::exit(1);
    }
}
