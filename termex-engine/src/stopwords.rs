//! Stopword lists read from disk

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use termex_core::stopwords::parse_list;
use termex_core::{StopwordIndex, StopwordSource};

/// A stopword list file: one entry per line, `#` starts a comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopwordFile {
    path: PathBuf,
}

impl StopwordFile {
    /// Point at a list file; nothing is read until [`StopwordSource::load`]
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the list
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the file into an index
    pub fn index(&self) -> io::Result<StopwordIndex> {
        StopwordIndex::from_source(self)
    }
}

impl StopwordSource for StopwordFile {
    fn load(&self) -> io::Result<Vec<String>> {
        let content = fs::read_to_string(&self.path)?;
        let entries = parse_list(&content);
        log::debug!(
            "Loaded {} stopwords from {}",
            entries.len(),
            self.path.display()
        );
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_loads_entries_and_comments() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# custom list").unwrap();
        writeln!(file, "kitties").unwrap();
        writeln!(file, "Puppies # trailing comment").unwrap();
        writeln!(file).unwrap();

        let index = StopwordFile::new(file.path()).index().unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.is_stopword("kitties"));
        assert!(index.is_stopword("puppies"));
        assert!(!index.is_stopword("the"));
    }

    #[test]
    fn test_missing_file() {
        let source = StopwordFile::new("/definitely/not/here/stopwords.txt");
        let err = source.load().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
