use anyhow::Result;
use clap::Parser;
use fileplot::cli::Cli;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Diagnostics go to stderr; RUST_LOG overrides the --debug level
    let default_level = if cli.debug { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    // Run the main application logic from the library
    if let Err(e) = fileplot::run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}
