//! Persistent best score.
//!
//! The record is a bare JSON integer (e.g. `42`) in ~/.flappy/highscore.json.
//! A missing record reads as 0 and is re-created; a malformed one also reads
//! as 0 so a damaged file never blocks play.

use crate::utils::persistence::{high_score_path, save_json};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub trait HighScoreStore {
    /// Read the stored best score, 0 if there is none.
    fn load(&mut self) -> u32;

    /// Overwrite the stored best score.
    fn save(&mut self, score: u32) -> io::Result<()>;
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for Box<S> {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        (**self).save(score)
    }
}

/// File store at `path`, or an in-memory store for this session when the
/// location could not be resolved (e.g. no home directory).
pub fn open_store(path: io::Result<PathBuf>) -> Box<dyn HighScoreStore> {
    match path {
        Ok(path) => Box::new(FileHighScoreStore::at(path)),
        Err(e) => {
            log::warn!("High score will not be saved ({}), keeping it in memory", e);
            Box::new(MemoryHighScoreStore::default())
        }
    }
}

/// Store at the default ~/.flappy/ location, falling back to memory.
pub fn open_default_store() -> Box<dyn HighScoreStore> {
    open_store(high_score_path())
}

/// File-backed store.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> u32 {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No high score at {}, creating", self.path.display());
                if let Err(e) = self.save(0) {
                    log::warn!("Could not create high score record: {}", e);
                }
                return 0;
            }
            Err(e) => {
                log::warn!("Could not read high score: {}", e);
                return 0;
            }
        };

        match serde_json::from_str::<u32>(contents.trim()) {
            Ok(score) => {
                log::info!("Loaded high score {}", score);
                score
            }
            Err(e) => {
                log::warn!("Malformed high score record ({}), treating as 0", e);
                0
            }
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        save_json(&self.path, &score)?;
        log::info!("Saved high score {}", score);
        Ok(())
    }
}

/// In-memory store that remembers every write.
#[derive(Debug, Default)]
pub struct MemoryHighScoreStore {
    pub value: u32,
    pub writes: Vec<u32>,
}

impl MemoryHighScoreStore {
    pub fn with_value(value: u32) -> Self {
        Self {
            value,
            writes: Vec::new(),
        }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.value = score;
        self.writes.push(score);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unresolvable_location_falls_back_to_memory() {
        let missing_home = io::Error::new(io::ErrorKind::NotFound, "no home directory");
        let mut store = open_store(Err(missing_home));
        assert_eq!(store.load(), 0);
        store.save(8).unwrap();
        assert_eq!(store.load(), 8);
    }

    #[test]
    fn test_open_store_uses_file_when_resolved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        open_store(Ok(path.clone())).save(21).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap().trim(), "21");
        assert_eq!(open_store(Ok(path)).load(), 21);
    }

    #[test]
    fn test_missing_record_is_zero_and_created() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScoreStore::at(dir.path().join("highscore.json"));
        assert_eq!(store.load(), 0);
        assert!(store.path().exists());
        assert_eq!(fs::read_to_string(store.path()).unwrap().trim(), "0");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileHighScoreStore::at(dir.path().join("highscore.json"));
        store.save(37).unwrap();
        assert_eq!(store.load(), 37);
    }

    #[test]
    fn test_plain_integer_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "12\n").unwrap();
        assert_eq!(FileHighScoreStore::at(&path).load(), 12);
    }

    #[test]
    fn test_malformed_record_is_zero() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("highscore.json");
        fs::write(&path, "twelve").unwrap();
        assert_eq!(FileHighScoreStore::at(&path).load(), 0);

        fs::write(&path, "-3").unwrap();
        assert_eq!(FileHighScoreStore::at(&path).load(), 0);
    }
}
