// src/bin/cli.rs
use propwatch::cli;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    cli::run().map_err(|e| color_eyre::eyre::eyre!("{e}"))
}
