//! Error types for the CLI

use compiler::CompileError;
use std::fmt;

/// CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Compilation failed; carries the position-tagged error
    Compile(CompileError),

    /// File I/O error
    Io(std::io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Compile(e) => write!(f, "{}", e),
            CliError::Io(e) => write!(f, "File error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Compile(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<CompileError> for CliError {
    fn from(err: CompileError) -> Self {
        CliError::Compile(err)
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::Io(err)
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_error_displays_position_trailer() {
        let err: CliError = compiler::compile("place Foo { }", "main.tata")
            .unwrap_err()
            .into();
        let text = err.to_string();
        assert!(text.contains("Foo"));
        assert!(text.contains("at:\nmain.tata:1:7"));
    }

    #[test]
    fn test_io_error_is_distinct() {
        let err: CliError = std::io::Error::from(std::io::ErrorKind::NotFound).into();
        assert!(err.to_string().starts_with("File error:"));
    }
}
