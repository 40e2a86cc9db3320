//! File-backed leaderboard storage
//!
//! The leaderboard is the only durable state of the game. It is stored as
//! a small JSON record in the platform data directory. Read and write
//! failures are logged and degraded (empty board / unsaved write) rather
//! than propagated; losing score history must never take down a session.

use std::fs;
use std::io;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::leaderboard::{Leaderboard, LeaderboardEntry};

/// Current on-disk schema version
pub const SCHEMA_VERSION: u32 = 1;

/// On-disk record. Older files used a `leaderboard` key for the entry
/// list and carried no version tag; both are normalized on read.
#[derive(Debug, Serialize, Deserialize)]
struct LeaderboardFile {
    #[serde(default = "schema_version")]
    version: u32,
    #[serde(alias = "leaderboard")]
    scores: Vec<LeaderboardEntry>,
}

fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Handle to the persisted leaderboard file
#[derive(Debug, Clone)]
pub struct LeaderboardStore {
    path: PathBuf,
}

impl Default for LeaderboardStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LeaderboardStore {
    /// Store at the platform data directory (falls back to the working
    /// directory if none can be resolved)
    pub fn new() -> Self {
        let path = ProjectDirs::from("", "", "gapwing")
            .map(|dirs| dirs.data_dir().join("leaderboard.json"))
            .unwrap_or_else(|| PathBuf::from("leaderboard.json"));
        Self { path }
    }

    /// Store at an explicit path (used by tests)
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted leaderboard.
    ///
    /// A missing file initializes empty storage; a malformed one degrades
    /// to an empty board. Neither is an error to the caller.
    pub fn load(&self) -> Leaderboard {
        if !self.path.exists() {
            log::info!("no leaderboard at {}, initializing", self.path.display());
            let board = Leaderboard::new();
            self.save(&board);
            return board;
        }

        match self.read() {
            Ok(board) => {
                log::info!("loaded {} leaderboard entries", board.entries.len());
                board
            }
            Err(e) => {
                log::warn!("unreadable leaderboard ({e}), starting empty");
                Leaderboard::new()
            }
        }
    }

    /// Persist the full leaderboard, overwriting prior contents.
    ///
    /// A failed write is logged and dropped; the in-memory board keeps
    /// reflecting the intended state for the rest of the session.
    pub fn save(&self, board: &Leaderboard) {
        if let Err(e) = self.write(board) {
            log::warn!("failed to save leaderboard to {}: {e}", self.path.display());
        } else {
            log::debug!("leaderboard saved ({} entries)", board.entries.len());
        }
    }

    fn read(&self) -> io::Result<Leaderboard> {
        let text = fs::read_to_string(&self.path)?;
        let file: LeaderboardFile = serde_json::from_str(&text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        Ok(Leaderboard {
            entries: file.scores,
        })
    }

    fn write(&self, board: &Leaderboard) -> io::Result<()> {
        if let Some(dir) = self.path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)?;
            }
        }
        let file = LeaderboardFile {
            version: SCHEMA_VERSION,
            scores: board.entries.clone(),
        };
        let json = serde_json::to_string(&file)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static COUNTER: AtomicU32 = AtomicU32::new(0);

    fn temp_store(tag: &str) -> LeaderboardStore {
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!(
            "gapwing-test-{}-{}-{}.json",
            tag,
            std::process::id(),
            n
        ));
        let _ = fs::remove_file(&path);
        LeaderboardStore::with_path(path)
    }

    #[test]
    fn test_missing_file_initializes_empty() {
        let store = temp_store("missing");
        let board = store.load();
        assert!(board.is_empty());

        // The load should have created the file
        let again = store.load();
        assert_eq!(again, board);
    }

    #[test]
    fn test_round_trip() {
        let store = temp_store("roundtrip");

        let mut board = Leaderboard::new();
        board.add_score("Ada", 42);
        board.add_score("Grace", 30);
        store.save(&board);

        let loaded = store.load();
        assert_eq!(loaded, board);
        assert_eq!(loaded.entries[0].name, "Ada");
        assert_eq!(loaded.entries[1].score, 30);
    }

    #[test]
    fn test_legacy_key_accepted() {
        let store = temp_store("legacy");
        let path = store.path.clone();
        fs::write(
            &path,
            r#"{"leaderboard": [{"name": "Old", "score": 7}]}"#,
        )
        .unwrap();

        let board = store.load();
        assert_eq!(board.entries.len(), 1);
        assert_eq!(board.entries[0].name, "Old");
        assert_eq!(board.entries[0].score, 7);

        // Saving rewrites in the canonical schema
        store.save(&board);
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"scores\""));
        assert!(text.contains("\"version\""));
    }

    #[test]
    fn test_malformed_file_degrades_to_empty() {
        let store = temp_store("malformed");
        fs::write(&store.path, "not json {{{").unwrap();

        let board = store.load();
        assert!(board.is_empty());
    }
}
