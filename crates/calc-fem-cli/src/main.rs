//! calc-fem CLI entry point

use calc_fem_cli::logging::init_logging;
use calc_fem_cli::runner::{run_press, run_theme};
use calc_fem_cli::{Cli, CliConfig, CliResult, Commands, Verbosity};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli);

    init_logging(config.verbosity)?;
    console::set_colors_enabled(config.color.should_color());

    match cli.command {
        Commands::Press(args) => run_press(&config, &args.tokens),
        Commands::Theme(args) => run_theme(&config, args.theme.as_deref()),
    }
}

fn build_config(cli: &Cli) -> CliConfig {
    let config = CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(cli.color.into())
        .with_format(cli.format.into());
    match &cli.storage {
        Some(path) => config.with_storage_path(path),
        None => config,
    }
}
