//! Where grammar lines come from. Obtaining the lines is the source's job;
//! the loader only ever sees an already-read sequence.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::error::GrammarError;

#[cfg_attr(test, mockall::automock)]
pub trait LineSource {
    /// Reads every line, failing with [`GrammarError::SourceUnavailable`].
    fn read_lines(&self) -> Result<Vec<String>, GrammarError>;

    /// Human readable name used in diagnostics.
    fn describe(&self) -> String;
}

/// Splits on `\n`, `\r\n` and a lone `\r`. A trailing terminator does not
/// produce an extra empty line.
pub fn split_lines(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let normalized = raw.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .strip_suffix('\n')
        .unwrap_or(&normalized)
        .split('\n')
        .map(str::to_string)
        .collect()
}

/// UTF-8 text file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    fn read_lines(&self) -> Result<Vec<String>, GrammarError> {
        let raw = fs::read_to_string(&self.path)
            .map_err(|err| GrammarError::from_io(self.describe(), err))?;
        Ok(split_lines(&raw))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Standard input, read to the end.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinSource;

impl LineSource for StdinSource {
    fn read_lines(&self) -> Result<Vec<String>, GrammarError> {
        let mut raw = String::new();
        io::stdin()
            .lock()
            .read_to_string(&mut raw)
            .map_err(|err| GrammarError::from_io(self.describe(), err))?;
        Ok(split_lines(&raw))
    }

    fn describe(&self) -> String {
        "<stdin>".to_string()
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    fn read_lines(&self) -> Result<Vec<String>, GrammarError> {
        Ok(self.lines.clone())
    }

    fn describe(&self) -> String {
        "<memory>".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn file_source_reads_lines() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "S -> aA\r\nA -> ε\n").expect("write grammar");

        let lines = FileSource::new(file.path()).read_lines().expect("readable file");
        assert_eq!(lines, vec!["S -> aA".to_string(), "A -> ε".to_string()]);
    }

    #[test]
    fn file_source_splits_on_lone_carriage_returns() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "S -> aA\rA -> a\r").expect("write grammar");

        let lines = FileSource::new(file.path()).read_lines().expect("readable file");
        assert_eq!(lines, vec!["S -> aA".to_string(), "A -> a".to_string()]);
    }

    #[test]
    fn split_lines_handles_mixed_terminators() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\nb\n"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().expect("temp dir");
        let source = FileSource::new(dir.path().join("data.txt"));

        let err = source.read_lines().unwrap_err();
        match err {
            GrammarError::SourceUnavailable { source_name, source } => {
                assert!(source_name.ends_with("data.txt"));
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
