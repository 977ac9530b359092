//! Session history: the numbers looked up so far, deduplicated, in
//! insertion order. Exportable as a single-column CSV.

use std::fmt;
use std::fs;
use std::path::Path;

/// Default export file name, written to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "phone_number_history.csv";

/// History export failures.
#[derive(Debug)]
pub enum ExportError {
    Io(std::io::Error),
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Cannot write history file: {}", err),
        }
    }
}

impl std::error::Error for ExportError {}

/// Ordered, deduplicated list of raw number strings for the session.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<String>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a number unless it is already present. Returns whether
    /// the entry was new.
    pub fn add(&mut self, raw: &str) -> bool {
        if self.entries.iter().any(|e| e == raw) {
            return false;
        }
        self.entries.push(raw.to_string());
        true
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entry at a position, for re-resolution from the history list.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// CSV body: one number per row, no header. Phone numbers carry no
    /// commas or quotes, so no escaping is involved.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        for entry in &self.entries {
            out.push_str(entry);
            out.push('\n');
        }
        out
    }

    /// Write the CSV to a file, overwriting any previous export.
    pub fn export(&self, path: &Path) -> Result<(), ExportError> {
        fs::write(path, self.to_csv()).map_err(ExportError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_add_deduplicates() {
        let mut history = History::new();
        assert!(history.add("+14155552671"));
        assert!(!history.add("+14155552671"));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut history = History::new();
        history.add("+46701234567");
        history.add("+14155552671");
        history.add("+46701234567"); // duplicate, no reorder
        assert_eq!(history.entries(), &["+46701234567", "+14155552671"]);
        assert_eq!(history.get(1), Some("+14155552671"));
    }

    #[test]
    fn test_clear() {
        let mut history = History::new();
        history.add("+14155552671");
        history.clear();
        assert!(history.is_empty());
        assert!(history.get(0).is_none());
    }

    #[test]
    fn test_to_csv_one_row_per_entry() {
        let mut history = History::new();
        history.add("+46701234567");
        history.add("+14155552671");
        assert_eq!(history.to_csv(), "+46701234567\n+14155552671\n");
    }

    #[test]
    fn test_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");

        let mut history = History::new();
        history.add("+14155552671");
        history.export(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "+14155552671\n");
    }

    #[test]
    fn test_export_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.csv");
        std::fs::write(&path, "stale contents").unwrap();

        let mut history = History::new();
        history.add("+46701234567");
        history.export(&path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "+46701234567\n");
    }

    #[test]
    fn test_export_to_bad_path_fails() {
        let history = History::new();
        let result = history.export(Path::new("/nonexistent-dir/out.csv"));
        assert!(matches!(result, Err(ExportError::Io(_))));
    }
}
