//! Rendering of the signing list.

use super::OutputFormat;
use anyhow::Context;
use std::io::{self, Write};
use std::path::PathBuf;

/// Writes the signing list in the selected format
#[derive(Debug, Clone)]
pub struct OutputManager {
    format: OutputFormat,
}

impl OutputManager {
    /// Create a new output manager
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Render `paths` into `out`
    pub fn write_paths<W: Write>(&self, out: &mut W, paths: &[PathBuf]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                for path in paths {
                    writeln!(out, "{}", path.display())
                        .with_context(|| format!("failed to write {}", path.display()))?;
                }
            }
            OutputFormat::Json => {
                let list: Vec<String> = paths
                    .iter()
                    .map(|p| p.to_string_lossy().into_owned())
                    .collect();
                serde_json::to_writer_pretty(&mut *out, &list)
                    .context("failed to write signing list as JSON")?;
                writeln!(out).context("failed to write signing list as JSON")?;
            }
        }
        out.flush().context("failed to flush signing list")?;
        Ok(())
    }

    /// Render `paths` to stdout
    pub fn print_paths(&self, paths: &[PathBuf]) -> crate::error::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        Ok(self.write_paths(&mut lock, paths)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_is_one_path_per_line() {
        let mut buf = Vec::new();
        OutputManager::new(OutputFormat::Text)
            .write_paths(&mut buf, &[PathBuf::from("/a/Lib"), PathBuf::from("/a/App.app")])
            .unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "/a/Lib\n/a/App.app\n");
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_names_the_path() {
        let err = OutputManager::new(OutputFormat::Text)
            .write_paths(&mut ClosedPipe, &[PathBuf::from("/a/Lib")])
            .unwrap_err();
        assert_eq!(err.to_string(), "failed to write /a/Lib");

        let err = crate::error::SignListError::from(err);
        assert!(matches!(err, crate::error::SignListError::Anyhow(_)));
        assert!(err.to_string().contains("/a/Lib"));
    }

    #[test]
    fn json_write_failure_is_reported() {
        let err = OutputManager::new(OutputFormat::Json)
            .write_paths(&mut ClosedPipe, &[PathBuf::from("/a/Lib")])
            .unwrap_err();
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn json_is_array_of_strings() {
        let mut buf = Vec::new();
        OutputManager::new(OutputFormat::Json)
            .write_paths(&mut buf, &[PathBuf::from("/a/Lib")])
            .unwrap();
        let parsed: Vec<String> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed, vec!["/a/Lib".to_string()]);
    }
}
