//! Thin driver around the compile pipeline: file in, file out

use crate::error::CliResult;
use std::fs;
use std::path::Path;

/// Read `input`, compile it, and write the generated script to `output`.
///
/// Nothing is written unless the whole pipeline succeeds.
pub fn run(input: &Path, output: &Path) -> CliResult<()> {
    let source = fs::read_to_string(input)?;
    let js = compiler::compile(&source, &input.display().to_string())?;
    fs::write(output, js)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[test]
    fn test_compiles_file_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.tata");
        let output = dir.path().join("main.js");
        fs::write(&input, "place Tombol { text \"Halo\" }").unwrap();

        run(&input, &output).unwrap();

        let js = fs::read_to_string(&output).unwrap();
        assert!(js.contains("function _entry(container)"));
        assert!(js.contains("document.createElement('button')"));
    }

    #[test]
    fn test_missing_input_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = run(&dir.path().join("nope.tata"), &dir.path().join("out.js")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));
    }

    #[test]
    fn test_failed_compile_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.tata");
        let output = dir.path().join("main.js");
        fs::write(&input, "place Foo { }").unwrap();

        let err = run(&input, &output).unwrap_err();
        assert!(matches!(err, CliError::Compile(_)));
        assert!(!output.exists());
    }

    #[test]
    fn test_diagnostic_names_the_input_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("main.tata");
        fs::write(&input, "pasang Foo { }").unwrap();

        let err = run(&input, &dir.path().join("out.js")).unwrap_err();
        assert!(err.to_string().contains("main.tata"));
    }
}
