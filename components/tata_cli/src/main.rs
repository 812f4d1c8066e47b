//! Tata UI compiler CLI
//!
//! Entry point for the compiler. Parses the input/output paths, runs the
//! pipeline, and converts the first error into a non-zero exit.

use clap::Parser;
use tata_cli::{run, Cli, CliError};

fn main() {
    let cli = Cli::parse();

    match run(&cli.input, &cli.output) {
        Ok(()) => {}
        Err(CliError::Compile(e)) => {
            eprintln!("Error:");
            eprintln!("{}", e);
            std::process::exit(1);
        }
        Err(CliError::Io(e)) => {
            eprintln!("File error: {}", e);
            std::process::exit(1);
        }
    }
}
