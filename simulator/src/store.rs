use craps_execution::LeaderboardStore;
use craps_types::casino::{Leaderboard, LeaderboardEntry, LeaderboardError};
use std::{fs, io, path::PathBuf};
use tracing::{debug, info};

/// Leaderboard persisted as a JSON file.
///
/// Every save rewrites the whole file through a temporary sibling and only commits the new
/// entry to memory once the write succeeded.
pub struct JsonLeaderboard {
    path: PathBuf,
    board: Leaderboard,
}

impl JsonLeaderboard {
    /// Load the board at `path`, starting empty if the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, LeaderboardError> {
        let path = path.into();
        let board = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes).map_err(|e| {
                LeaderboardError::Storage(format!("failed to parse {}: {e}", path.display()))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => Leaderboard::default(),
            Err(e) => {
                return Err(LeaderboardError::Storage(format!(
                    "failed to read {}: {e}",
                    path.display()
                )))
            }
        };
        info!(path = %path.display(), entries = board.len(), "loaded leaderboard");
        Ok(Self { path, board })
    }

    fn persist(&self, board: &Leaderboard) -> Result<(), LeaderboardError> {
        let bytes = serde_json::to_vec_pretty(board)
            .map_err(|e| LeaderboardError::Storage(format!("failed to serialize: {e}")))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, bytes).map_err(|e| {
            LeaderboardError::Storage(format!("failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            LeaderboardError::Storage(format!("failed to replace {}: {e}", self.path.display()))
        })?;
        debug!(path = %self.path.display(), entries = board.len(), "persisted leaderboard");
        Ok(())
    }
}

impl LeaderboardStore for JsonLeaderboard {
    fn save(
        &mut self,
        player_name: &str,
        score: i64,
        achievements: &str,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        let mut next = self.board.clone();
        let entry = next.insert(player_name, score, achievements)?;
        self.persist(&next)?;
        self.board = next;
        Ok(entry)
    }

    fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.board.top(n)
    }
}
