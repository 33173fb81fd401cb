use anyhow::Result;
use args::Cli;
use clap::Parser;
use common::{exit, generate::generate, paths::ProjectPaths};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod args;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("LOG").unwrap_or_else(|_| EnvFilter::new(default));

    // stdout only carries the result line
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = match &cli.root {
        Some(root) => ProjectPaths::new(root),
        None => ProjectPaths::from_executable(),
    };
    let paths = match paths {
        Ok(p) => p,
        Err(err) => exit!(err, "Could not resolve project root: {err}"),
    };
    info!("project root {}", paths.root().display());

    let inventory = match generate(&paths, cli.format) {
        Ok(p) => p,
        Err(err) => exit!(err, "Could not generate inventory: {err}"),
    };

    println!("Dynamic inventory updated at {}", inventory.display());
    Ok(())
}
