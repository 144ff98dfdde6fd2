//! msgq: look up messages by type or id. Config from env and optional CLI args.

use anyhow::Result;
use clap::Parser;
use msgq::{init_tracing, run, Cli, StoreConfig};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = StoreConfig::load(cli.file.clone())?;
    init_tracing(config.log_file.as_deref())?;

    let repo = config.open_repository()?;
    let output = run(&cli.command, &repo)?;
    println!("{}", output);
    Ok(())
}
