//! csvxl CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! conversion, and exit with status 0 on success or 1 on any handled error.
//! For programmatic use, prefer the library API (`csvxl::api`).

use std::process::ExitCode;

use clap::Parser;

mod cli;

fn main() -> ExitCode {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
