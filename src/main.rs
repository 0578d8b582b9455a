use std::io::IsTerminal;
use std::process;

use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .init();

    if let Err(e) = journey_mapper::cli::run() {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
