//! Tata compiler CLI library
//!
//! Thin driver around the compile pipeline: read the source file, run
//! tokenize/parse/codegen, write the generated script. All file I/O lives
//! here; the pipeline itself is a pure function of its input.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod driver;
pub mod error;

pub use cli::Cli;
pub use driver::run;
pub use error::{CliError, CliResult};
