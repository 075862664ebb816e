use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use vendordep_check::defaults::DEFAULT_YEAR;
use vendordep_check::logging::init_logging;
use vendordep_check::models::CheckSettings;

mod commands;

use commands::check_command;

#[derive(Parser)]
#[command(
    name = "vendordep-check",
    about = "Checks vendor dependency descriptors and the artifacts they reference",
    version,
    author,
    long_about = None
)]
struct Cli {
    /// Descriptor files to check
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Maven-layout directory to read artifacts from instead of the network
    #[arg(long, env = "VENDORDEP_LOCAL_MAVEN")]
    local_maven: Option<PathBuf>,

    /// Competition season year
    #[arg(short, long, default_value = DEFAULT_YEAR)]
    year: String,

    /// Cache downloaded artifacts in this directory
    #[arg(
        long = "cache_directory",
        visible_alias = "cache-directory",
        env = "VENDORDEP_CACHE_DIR"
    )]
    cache_directory: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let settings = CheckSettings {
        year: cli.year,
        local_maven: cli.local_maven,
        cache_directory: cli.cache_directory,
        verbose: cli.verbose,
    };

    init_logging(settings.verbose);

    if check_command(&cli.files, &settings)? {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
