//! Leaderboard ranking
//!
//! Pure functions over an already-fetched leaderboard; nothing here
//! suspends or touches shared state. Ordering is score descending under a
//! stable sort, so entries with equal scores keep their source order — an
//! intentional simplification, there is no secondary tie-break key.

use crate::types::LeaderboardEntry;

/// A user's position within the sorted leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankPlacement {
    /// 1-based position
    pub rank: usize,
    pub score: i64,
}

/// One decorated leaderboard row, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRow {
    pub entry: LeaderboardEntry,
    /// 1-based position
    pub rank: usize,
    pub is_current_user: bool,
}

fn sorted_by_score_desc(entries: &[LeaderboardEntry]) -> Vec<LeaderboardEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.score.cmp(&a.score));
    sorted
}

/// Rank and score of the entry with the given id, or `None` when the user
/// is not on the leaderboard (the caller applies its own fallback).
pub fn rank(entries: &[LeaderboardEntry], user_id: u64) -> Option<RankPlacement> {
    let sorted = sorted_by_score_desc(entries);
    sorted
        .iter()
        .position(|entry| entry.id == user_id)
        .map(|index| RankPlacement {
            rank: index + 1,
            score: sorted[index].score,
        })
}

/// Decorate every leaderboard row with its rank and whether it belongs to
/// the viewer. The viewer may only be known by a cached email string, so
/// the match here is by email, case-insensitive.
pub fn annotate(entries: &[LeaderboardEntry], current_email: Option<&str>) -> Vec<RankedRow> {
    sorted_by_score_desc(entries)
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let is_current_user = current_email
                .is_some_and(|email| !email.is_empty() && entry.email.eq_ignore_ascii_case(email));
            RankedRow {
                entry,
                rank: index + 1,
                is_current_user,
            }
        })
        .collect()
}

/// The viewer's rank within an annotated leaderboard, if present
pub fn current_placement(rows: &[RankedRow]) -> Option<usize> {
    rows.iter().find(|row| row.is_current_user).map(|row| row.rank)
}
