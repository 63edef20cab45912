//! aspect-resize CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, plan the resize
//! (or print the node schema / kernel table), and exit with appropriate status.
//! For programmatic use, prefer the library API (`aspect_resize::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
