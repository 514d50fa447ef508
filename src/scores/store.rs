//! Highscore persistence
//!
//! Sessions hand finished entries to a [`ScoreSink`]; the leaderboard reads
//! them back through a [`ScoreSource`]. The file store keeps one JSON object
//! per line and only ever appends.

use super::entry::LeaderboardEntry;
use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors for highscore storage
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Highscore file error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode highscore: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Write side of the highscore store
pub trait ScoreSink {
    fn append(&mut self, entry: &LeaderboardEntry) -> StoreResult<()>;
}

/// Read side of the highscore store
pub trait ScoreSource {
    fn all_entries(&self) -> StoreResult<Vec<LeaderboardEntry>>;
}

/// A store that can be both written and read
pub trait ScoreStore: ScoreSink + ScoreSource {}

impl<T: ScoreSink + ScoreSource> ScoreStore for T {}

/// JSON-lines highscore file
#[derive(Debug, Clone)]
pub struct JsonlScoreStore {
    path: PathBuf,
}

impl JsonlScoreStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> StoreResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Decode one raw line; blank lines and lines that are not a valid
    /// UTF-8 JSON record yield `None`
    fn parse_line(line: &[u8], line_number: usize) -> Option<LeaderboardEntry> {
        let line = line.trim_ascii();
        if line.is_empty() {
            return None;
        }
        serde_json::from_slice(line)
            .inspect_err(|e| warn!(line = line_number, error = %e, "skipping malformed highscore"))
            .ok()
    }

    /// Whether the file ends mid-line, so a new record must start on a fresh one
    fn ends_without_newline(file: &mut File) -> io::Result<bool> {
        if file.metadata()?.len() == 0 {
            return Ok(false);
        }
        file.seek(SeekFrom::End(-1))?;
        let mut last = [0u8; 1];
        file.read_exact(&mut last)?;
        Ok(last[0] != b'\n')
    }
}

impl ScoreSink for JsonlScoreStore {
    fn append(&mut self, entry: &LeaderboardEntry) -> StoreResult<()> {
        self.ensure_parent_dir()?;

        let mut file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&self.path)?;

        let mut line = String::new();
        if Self::ends_without_newline(&mut file)? {
            warn!(path = %self.path.display(), "highscore file ends mid-line");
            line.push('\n');
        }
        line.push_str(&serde_json::to_string(entry)?);
        line.push('\n');

        file.write_all(line.as_bytes())?;
        file.flush()?;

        debug!(path = %self.path.display(), name = %entry.name, "highscore appended");
        Ok(())
    }
}

impl ScoreSource for JsonlScoreStore {
    fn all_entries(&self) -> StoreResult<Vec<LeaderboardEntry>> {
        // No file yet means no highscores
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let reader = BufReader::new(File::open(&self.path)?);
        let mut entries = Vec::new();

        for (index, line) in reader.split(b'\n').enumerate() {
            if let Some(entry) = Self::parse_line(&line?, index + 1) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }
}

/// Highscores kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryScoreStore {
    entries: Vec<LeaderboardEntry>,
}

impl MemoryScoreStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(entries: Vec<LeaderboardEntry>) -> Self {
        Self { entries }
    }
}

impl ScoreSink for MemoryScoreStore {
    fn append(&mut self, entry: &LeaderboardEntry) -> StoreResult<()> {
        self.entries.push(entry.clone());
        Ok(())
    }
}

impl ScoreSource for MemoryScoreStore {
    fn all_entries(&self) -> StoreResult<Vec<LeaderboardEntry>> {
        Ok(self.entries.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Difficulty;
    use crate::scores::report;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, JsonlScoreStore) {
        let dir = TempDir::new().unwrap();
        let store = JsonlScoreStore::new(dir.path().join("highscores.jsonl"));
        (dir, store)
    }

    #[test]
    fn missing_file_is_empty() {
        let (_dir, store) = create_test_store();
        assert!(store.all_entries().unwrap().is_empty());
    }

    #[test]
    fn append_and_read_back_in_order() {
        let (_dir, mut store) = create_test_store();
        let first = report("Ada", Difficulty::Hard, 3, 50);
        let second = report("Bob", Difficulty::Easy, 7, 120);

        store.append(&first).unwrap();
        store.append(&second).unwrap();

        assert_eq!(store.all_entries().unwrap(), vec![first, second]);
    }

    #[test]
    fn append_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("scores.jsonl");
        let mut store = JsonlScoreStore::new(&path);

        store.append(&report("Ada", Difficulty::Normal, 2, 9)).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn malformed_lines_are_skipped() {
        let (_dir, mut store) = create_test_store();
        store.append(&report("Ada", Difficulty::Hard, 3, 50)).unwrap();

        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        writeln!(file, "not json").unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"name":"Eve","difficulty":"impossible","guess_count":1,"elapsed_seconds":1}}"#).unwrap();
        drop(file);

        store.append(&report("Bob", Difficulty::Easy, 7, 120)).unwrap();

        let names: Vec<String> = store
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Ada", "Bob"]);
    }

    fn names(store: &JsonlScoreStore) -> Vec<String> {
        store
            .all_entries()
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect()
    }

    #[test]
    fn non_utf8_line_is_skipped() {
        let (_dir, mut store) = create_test_store();
        store.append(&report("Ada", Difficulty::Hard, 3, 50)).unwrap();

        let mut file = OpenOptions::new().append(true).open(store.path()).unwrap();
        file.write_all(b"\xff\xfe garbage\n").unwrap();
        drop(file);

        store.append(&report("Bob", Difficulty::Easy, 7, 120)).unwrap();

        assert_eq!(names(&store), vec!["Ada", "Bob"]);
    }

    #[test]
    fn append_after_unterminated_last_line_starts_new_line() {
        let (_dir, mut store) = create_test_store();
        let ada = serde_json::to_string(&report("Ada", Difficulty::Hard, 3, 50)).unwrap();
        fs::write(store.path(), ada).unwrap();

        store.append(&report("Bob", Difficulty::Easy, 7, 120)).unwrap();

        assert_eq!(names(&store), vec!["Ada", "Bob"]);
        let content = fs::read_to_string(store.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let (_dir, store) = create_test_store();
        let ada = serde_json::to_string(&report("Ada", Difficulty::Hard, 3, 50)).unwrap();
        fs::write(store.path(), format!("{ada}\r\n")).unwrap();

        assert_eq!(names(&store), vec!["Ada"]);
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryScoreStore::new();
        let entry = report("Ada", Difficulty::Normal, 4, 61);

        store.append(&entry).unwrap();

        assert_eq!(store.all_entries().unwrap(), vec![entry]);
    }

    #[test]
    fn stores_are_object_safe() {
        fn _takes_boxed(_: Box<dyn ScoreStore>) {}
        _takes_boxed(Box::new(MemoryScoreStore::new()));
    }
}
