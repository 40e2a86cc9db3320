//! Ranked leaderboard
//!
//! Keeps the top 10 name/score entries, sorted by score descending. The
//! sort is stable, so entries with equal scores stay in insertion order.

use serde::{Deserialize, Serialize};

/// Maximum number of entries retained
pub const MAX_ENTRIES: usize = 10;

/// Name used when a submission is blank
pub const DEFAULT_NAME: &str = "Player";

/// A single leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Player's display name
    pub name: String,
    /// Score achieved
    pub score: u32,
}

/// Ranked, capacity-bounded score list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    pub entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Check if a score would earn a spot on the board.
    ///
    /// A score of zero never qualifies. Otherwise any score qualifies
    /// while the board has room; once full, the score must strictly beat
    /// the current minimum.
    pub fn qualifies(&self, score: u32) -> bool {
        if score == 0 {
            return false;
        }
        if self.entries.len() < MAX_ENTRIES {
            return true;
        }
        // Entries are sorted descending, so the last one is the minimum
        self.entries.last().map(|e| score > e.score).unwrap_or(true)
    }

    /// Add an entry, re-rank, and enforce the capacity cap.
    ///
    /// Blank or whitespace-only names are normalized to [`DEFAULT_NAME`].
    /// The append is unconditional; qualification gating happens at the
    /// scoring layer, not here.
    pub fn add_score(&mut self, name: &str, score: u32) {
        let name = name.trim();
        let name = if name.is_empty() { DEFAULT_NAME } else { name };

        self.entries.push(LeaderboardEntry {
            name: name.to_string(),
            score,
        });

        // Stable sort: ties keep insertion order
        self.entries.sort_by(|a, b| b.score.cmp(&a.score));
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Get the top `limit` entries
    pub fn top(&self, limit: usize) -> &[LeaderboardEntry] {
        &self.entries[..limit.min(self.entries.len())]
    }

    /// Get the highest score (if any)
    pub fn top_score(&self) -> Option<u32> {
        self.entries.first().map(|e| e.score)
    }

    /// Check if the leaderboard is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sorted_descending() {
        let mut board = Leaderboard::new();
        board.add_score("Player3", 30);
        board.add_score("Player1", 10);
        board.add_score("Player2", 20);

        let top = board.top(MAX_ENTRIES);
        assert_eq!(top.len(), 3);
        assert_eq!(top[0].name, "Player3");
        assert_eq!(top[0].score, 30);
        assert_eq!(top[1].name, "Player2");
        assert_eq!(top[1].score, 20);
        assert_eq!(top[2].name, "Player1");
        assert_eq!(top[2].score, 10);
    }

    #[test]
    fn test_capacity_cap() {
        let mut board = Leaderboard::new();
        for i in 0..10u32 {
            board.add_score(&format!("Player{i}"), i);
        }

        assert_eq!(board.entries.len(), MAX_ENTRIES);
        assert_eq!(board.entries[0].score, 9);
        assert_eq!(board.entries.last().unwrap().score, 0);
    }

    #[test]
    fn test_cap_drops_lowest() {
        let mut board = Leaderboard::new();
        for i in 0..15u32 {
            board.add_score("p", i);
        }

        assert_eq!(board.entries.len(), MAX_ENTRIES);
        assert_eq!(board.entries[0].score, 14);
        assert_eq!(board.entries.last().unwrap().score, 5);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let mut board = Leaderboard::new();
        board.add_score("first", 5);
        board.add_score("second", 5);
        board.add_score("third", 5);

        assert_eq!(board.entries[0].name, "first");
        assert_eq!(board.entries[1].name, "second");
        assert_eq!(board.entries[2].name, "third");
    }

    #[test]
    fn test_blank_name_normalized() {
        let mut board = Leaderboard::new();
        board.add_score("   ", 3);
        board.add_score("", 2);

        assert_eq!(board.entries[0].name, DEFAULT_NAME);
        assert_eq!(board.entries[1].name, DEFAULT_NAME);
    }

    #[test]
    fn test_qualifies_zero_never() {
        let board = Leaderboard::new();
        assert!(!board.qualifies(0));
        assert!(board.qualifies(1));
    }

    #[test]
    fn test_qualifies_full_board_needs_strict_beat() {
        let mut board = Leaderboard::new();
        for i in 1..=10u32 {
            board.add_score("p", i * 10);
        }

        // Minimum on the board is 10
        assert!(!board.qualifies(10));
        assert!(board.qualifies(11));
        assert!(board.qualifies(200));
    }
}
