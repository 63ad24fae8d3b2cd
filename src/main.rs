mod cli;
mod logging;
mod reporter;

use std::process;

use clap::Parser;
use cli::Cli;
use copy_images::MigrationEngine;
use dotenv::dotenv;
use reporter::CliReporter;
use tracing::{error, info};

fn main() {
    dotenv().ok();

    let args = Cli::parse();

    let mut config = match copy_images::config::load_configuration() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error loading configuration: {}", err);
            process::exit(1);
        }
    };
    if let Some(report) = args.report {
        config.report_path = report;
    }
    if let Some(log_file) = args.log_file {
        config.log_file_path = log_file;
    }

    let guard = match logging::init_logger(&config.log_file_path) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            process::exit(1);
        }
    };

    let log_file_path = config.log_file_path.clone();
    let engine = MigrationEngine::new(config);
    let reporter = CliReporter::new();

    if let Err(err) = engine.run(&args.jekyll_site_dir, &args.ghost_dir, &reporter) {
        error!("Error: {}", err);
        drop(guard);
        process::exit(1);
    }

    info!("Full output is logged in {}.", log_file_path.display());
}
