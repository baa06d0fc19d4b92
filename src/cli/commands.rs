//! CLI command implementation.

use crate::cli::parser::Cli;
use crate::error::Result;
use crate::greeting::greet;
use std::io::Write;

/// Executes the CLI command, writing the greeting line to `out`.
///
/// # Errors
///
/// Returns [`crate::Error::Output`] if writing to `out` fails.
pub fn execute<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let greeting = greet(&cli.name);
    tracing::debug!(name = %cli.name, %greeting, "greeting");

    writeln!(out, "{greeting}")?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::io;

    fn make_cli(name: &str) -> Cli {
        Cli {
            name: name.to_string(),
            verbose: false,
        }
    }

    /// Writer that rejects every write with the given error kind.
    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "rejected"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_execute_writes_greeting_line() {
        let mut out = Vec::new();
        execute(&make_cli("Ada"), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hello, Ada!\n");
    }

    #[test]
    fn test_execute_default_name() {
        let mut out = Vec::new();
        execute(&make_cli(crate::DEFAULT_NAME), &mut out).unwrap();
        assert_eq!(out, b"Hello, world!\n");
    }

    #[test]
    fn test_execute_empty_name() {
        let mut out = Vec::new();
        execute(&make_cli(""), &mut out).unwrap();
        assert_eq!(out, b"Hello, !\n");
    }

    #[test]
    fn test_execute_write_failure() {
        let mut out = FailingWriter(io::ErrorKind::PermissionDenied);
        let err = execute(&make_cli("Ada"), &mut out).unwrap_err();
        assert!(matches!(err, Error::Output { .. }));
        assert!(!err.is_broken_pipe());
    }

    #[test]
    fn test_execute_broken_pipe() {
        let mut out = FailingWriter(io::ErrorKind::BrokenPipe);
        let err = execute(&make_cli("Ada"), &mut out).unwrap_err();
        assert!(err.is_broken_pipe());
    }
}
