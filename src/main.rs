//! atlasctl - RIPE Atlas command-line client
//!
//! A command-line tool for searching measurements and probes on the
//! RIPE Atlas platform.

use atlasctl::cli::args::{generate_completions, Cli, Commands};
use atlasctl::commands::{run_measurements, run_probes};
use atlasctl::config::{ColorMode, Config, ConfigBuilder};
use atlasctl::error::{ApiError, AppError};
use atlasctl::logging;
use clap::Parser;

fn main() {
    // Parse CLI arguments; invalid arguments exit here
    let cli = Cli::parse();

    // Initialize logging, -v raises the level to debug
    logging::init(cli.verbose);

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::error!("{}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    match &cli.command {
        Commands::Measurements(args) => run_measurements(args, cli.format, &load_config(cli)?),

        Commands::Probes(args) => run_probes(args, cli.format, &load_config(cli)?),

        Commands::Completions { shell } => {
            generate_completions(*shell);
            Ok(())
        }
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_api_key(cli.api_key.clone())
        .with_color(cli.color)
        .build();

    if config.output.color == ColorMode::Always {
        colored::control::set_override(true);
    }

    log::debug!("using API at {}", config.api.base_url);
    Ok(config)
}

fn print_error(err: &AppError) {
    eprintln!("Error: {}", err);

    // Print helpful hints for common errors
    match err {
        AppError::Api(ApiError::Unauthorized(_)) => {
            eprintln!();
            eprintln!("Hint: Check the API key passed with --api-key or ATLAS_API_KEY.");
        }
        AppError::Api(ApiError::Request { .. }) => {
            eprintln!();
            eprintln!("Hint: Check your network connection and the api.base_url setting.");
        }
        AppError::Config(_) => {
            eprintln!();
            eprintln!("Hint: Pass --config to use a different configuration file.");
        }
        _ => {}
    }
}
