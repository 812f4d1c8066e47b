//! Command line argument definitions

use clap::Parser;
use std::path::PathBuf;

/// Compile a Tata UI layout into DOM-building JavaScript.
#[derive(Parser, Debug)]
#[command(name = "tatac", version)]
pub struct Cli {
    /// Path of the source file to compile
    pub input: PathBuf,

    /// Path the generated JavaScript is written to
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_positional_arguments_are_required() {
        assert!(Cli::try_parse_from(["tatac"]).is_err());
        assert!(Cli::try_parse_from(["tatac", "in.tata"]).is_err());
    }

    #[test]
    fn test_parses_input_and_output() {
        let cli = Cli::try_parse_from(["tatac", "in.tata", "out.js"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.tata"));
        assert_eq!(cli.output, PathBuf::from("out.js"));
    }
}
