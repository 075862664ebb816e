use tracing_subscriber::EnvFilter;

/// Install the fmt subscriber for the verbosity given on the command line
pub fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::new("vendordep_check=warn"), // Default: warnings and errors only
        1 => EnvFilter::new("vendordep_check=info"), // -v: downloads and file opens
        _ => EnvFilter::new("vendordep_check=debug"), // -vv or more: full debug
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
