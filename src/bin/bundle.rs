use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

use vendordep_check::bundle::generate_bundle;
use vendordep_check::logging::init_logging;

#[derive(Parser)]
#[command(
    name = "vendordep-bundle",
    about = "Generates one or more vendor dependency bundles for publication",
    version,
    long_about = None
)]
struct Cli {
    /// Years to generate bundles for
    #[arg(required = true)]
    years: Vec<String>,

    /// Directory to place the output bundles in
    #[arg(short, long, default_value = "bundles")]
    output: PathBuf,

    /// Directory holding the metadata files and year folders
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Enable verbose output (use -vv for debug output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    for year in &cli.years {
        let manifest = generate_bundle(year, &cli.root, &cli.output)
            .with_context(|| format!("Failed to generate bundle for {year}"))?;
        println!("{}", manifest.display());
    }

    Ok(())
}
