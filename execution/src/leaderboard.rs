use craps_types::casino::{Leaderboard, LeaderboardEntry, LeaderboardError};

/// Persists finalized scores.
pub trait LeaderboardStore {
    /// Records a score and returns the stored entry.
    fn save(
        &mut self,
        player_name: &str,
        score: i64,
        achievements: &str,
    ) -> Result<LeaderboardEntry, LeaderboardError>;

    /// Best `n` scores, highest first. Equal scores keep arrival order.
    fn top(&self, n: usize) -> Vec<LeaderboardEntry>;
}

/// In-memory store.
impl LeaderboardStore for Leaderboard {
    fn save(
        &mut self,
        player_name: &str,
        score: i64,
        achievements: &str,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        self.insert(player_name, score, achievements)
    }

    fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        Leaderboard::top(self, n)
    }
}

impl<S: LeaderboardStore + ?Sized> LeaderboardStore for Box<S> {
    fn save(
        &mut self,
        player_name: &str,
        score: i64,
        achievements: &str,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        (**self).save(player_name, score, achievements)
    }

    fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        (**self).top(n)
    }
}
