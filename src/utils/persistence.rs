//! File persistence: the high-score text file and JSON settings.
//!
//! Reads never fail: a missing or unparseable file yields the default value.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring invalid {}: {}", path.display(), e);
            T::default()
        }),
        Err(_) => T::default(),
    }
}

/// Best score, stored as the decimal string of the raw (undivided) counter.
#[derive(Debug, Clone)]
pub struct HighScoreStore {
    path: PathBuf,
}

impl HighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored high score. Any I/O or parse failure yields 0.
    pub fn load(&self) -> u64 {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) => {
                log::debug!("No high score at {}: {}", self.path.display(), e);
                return 0;
            }
        };
        match text.trim().parse::<u64>() {
            Ok(score) => score,
            Err(e) => {
                log::warn!(
                    "Corrupt high score file {} ({:?}): {}",
                    self.path.display(),
                    text,
                    e
                );
                0
            }
        }
    }

    /// Overwrite the file with `score`.
    pub fn save(&self, score: u64) -> io::Result<()> {
        fs::write(&self.path, score.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("highscore.txt"));
        assert_eq!(store.load(), 0);
    }

    #[test]
    fn test_save_writes_decimal_text() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("highscore.txt"));

        store.save(1234).expect("save should succeed");

        let raw = fs::read_to_string(store.path()).unwrap();
        assert_eq!(raw, "1234");
        assert_eq!(store.load(), 1234);
    }

    #[test]
    fn test_save_overwrites_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = HighScoreStore::new(dir.path().join("highscore.txt"));

        store.save(90_000).unwrap();
        store.save(7).unwrap();

        assert_eq!(fs::read_to_string(store.path()).unwrap(), "7");
    }

    #[test]
    fn test_load_tolerates_surrounding_whitespace() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "  42\n").unwrap();

        assert_eq!(HighScoreStore::new(path).load(), 42);
    }

    #[test]
    fn test_load_corrupt_returns_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.txt");
        fs::write(&path, "not a number").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);

        fs::write(&path, "-5").unwrap();
        assert_eq!(HighScoreStore::new(&path).load(), 0);
    }

    #[test]
    fn test_load_json_missing_returns_default() {
        let val: Vec<String> = load_json_or_default(Path::new("nonexistent_test_file_12345.json"));
        assert!(val.is_empty());
    }

    #[test]
    fn test_load_json_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("list.json");
        fs::write(&path, r#"["hello", "world"]"#).unwrap();

        let loaded: Vec<String> = load_json_or_default(&path);
        assert_eq!(loaded, vec!["hello".to_string(), "world".to_string()]);
    }
}
