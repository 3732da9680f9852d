//! cheat - command-line cheat sheets
//!
//! Prints the cheats of a named sheet, or lists the available sheets.

use cheat::cli::args::{generate_completions, Cli};
use cheat::commands::{run_list, run_show};
use cheat::config::{Config, ConfigBuilder};
use cheat::error::AppError;
use clap::Parser;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging, verbose raises the default filter
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    // Run the appropriate command
    let result = run(&cli);

    if let Err(e) = result {
        log::debug!("{:?}", e);
        print_error(&e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return Ok(());
    }

    let config = load_config(cli)?;

    if cli.list {
        return run_list(&config.sheets_dir());
    }

    match &cli.sheet {
        Some(name) => run_show(name, &config),
        // clap requires SHEET unless --list or --completions is given
        None => Ok(()),
    }
}

fn load_config(cli: &Cli) -> Result<Config, AppError> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_sheets_dir(cli.dir.clone())
        .with_style(cli.style())
        .build();

    Ok(config)
}

fn print_error(err: &AppError) {
    match err {
        // Missing and malformed sheets share one message
        AppError::Sheet(e) => eprintln!("{} not available or contains errors.", e.path().display()),
        _ => eprintln!("Error: {}", err),
    }
}
