use clap::Parser;
use colored::*;
use std::path::PathBuf;

use modelpack::commands::convert::{self, ConvertOptions};

#[derive(Parser)]
#[command(name = "modelpack")]
#[command(about = "Convert a 3D mesh scene into a simulator-ready model package")]
#[command(version)]
struct Cli {
    /// Model package name (directory name and model identifier)
    name: String,

    /// Path to the source mesh scene file (COLLADA .dae)
    source: PathBuf,

    /// Models root directory (default: $MODELPACK_MODELS_ROOT or ~/.gazebo/models)
    #[arg(short = 'm', long = "models-root")]
    models_root: Option<PathBuf>,

    /// Fail if a model package with the same name already exists
    #[arg(long = "no-overwrite")]
    no_overwrite: bool,

    /// Increase output verbosity (show debug messages)
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,

    /// Suppress informational output
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialize structured logging based on verbosity flags
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    log::debug!("modelpack v{}", env!("CARGO_PKG_VERSION"));

    let options = ConvertOptions {
        overwrite: !cli.no_overwrite,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    if let Err(e) = convert::run(&cli.name, &cli.source, cli.models_root, &options) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
