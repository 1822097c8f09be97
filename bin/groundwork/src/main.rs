//! Groundwork CLI
//!
//! Build-time toolchain for the portfolio site's theme and configuration.
//!
//! This is the binary entry point. The library functionality is in `lib.rs`.

use clap::Parser;
use color_eyre::eyre::Result;

/// Command-line interface for Groundwork.
#[derive(Parser)]
#[command(
    name = "groundwork",
    version,
    about = "Theme and configuration toolchain for a static site"
)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "site.toml")]
    config: std::path::PathBuf,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(clap::Subcommand)]
enum Commands {
    /// Emit theme artifacts for the external build pipeline
    Build {
        /// Output directory
        #[arg(short, long, default_value = "public")]
        output: std::path::PathBuf,
    },
    /// Validate configuration and theme
    Check {
        /// Treat warnings as errors
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    groundwork::init_tracing(cli.verbose);

    match cli.command {
        Commands::Build { output } => {
            groundwork::cmd::build::run(&cli.config, &output)?;
        }
        Commands::Check { strict } => {
            groundwork::cmd::check::run(&cli.config, strict)?;
        }
    }

    Ok(())
}
