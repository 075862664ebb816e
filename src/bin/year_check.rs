use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use vendordep_check::bundle::check_year_bundle;
use vendordep_check::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "vendordep-year-check",
    about = "Checks a published year bundle against its descriptor files",
    version,
    long_about = None
)]
struct Cli {
    /// Competition season year
    #[arg(short, long)]
    year: String,

    /// Directory holding `<year>.json` and the `<year>/` folder
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let check = check_year_bundle(&cli.root, &cli.year)
        .with_context(|| format!("Failed to check the {} bundle", cli.year))?;

    for finding in &check.findings {
        println!("{finding}");
    }
    println!("{}", check.known_versions_listing());
    println!("{}", check.results);

    if check.results.is_valid() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
