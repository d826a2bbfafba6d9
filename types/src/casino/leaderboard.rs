use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, Read, ReadExt, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error as ThisError;

use super::{
    codec::{read_chips, write_chips, CHIPS_SIZE},
    read_string, string_encode_size, write_string, MAX_ACHIEVEMENTS_LENGTH,
    MAX_LEADERBOARD_ENTRIES, MAX_NAME_LENGTH,
};

#[derive(Debug, ThisError, PartialEq, Eq)]
pub enum LeaderboardError {
    #[error("player name is empty")]
    EmptyName,
    #[error("player name too long (len={len}, max={max})")]
    NameTooLong { len: usize, max: usize },
    #[error("leaderboard storage failed: {0}")]
    Storage(String),
}

/// Structural problem found in a stored leaderboard.
#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("invalid leaderboard: {0}")]
pub struct InvalidLeaderboard(pub &'static str);

/// Names must be non-empty and at most [MAX_NAME_LENGTH] characters.
fn validate_name(player_name: &str) -> Result<(), LeaderboardError> {
    if player_name.is_empty() {
        return Err(LeaderboardError::EmptyName);
    }
    let len = player_name.chars().count();
    if len > MAX_NAME_LENGTH {
        return Err(LeaderboardError::NameTooLong {
            len,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Finalized score recorded when a session ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub player_name: String,
    pub score: i64,
    /// Comma-joined achievement identifiers unlocked during the session.
    pub achievements: String,
}

impl Write for LeaderboardEntry {
    fn write(&self, writer: &mut impl BufMut) {
        self.id.write(writer);
        write_string(&self.player_name, writer);
        write_chips(self.score, writer);
        write_string(&self.achievements, writer);
    }
}

impl Read for LeaderboardEntry {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let entry = Self {
            id: u64::read(reader)?,
            // A name may use up to four UTF-8 bytes per character
            player_name: read_string(reader, MAX_NAME_LENGTH * 4)?,
            score: read_chips(reader)?,
            achievements: read_string(reader, MAX_ACHIEVEMENTS_LENGTH)?,
        };
        validate_name(&entry.player_name)
            .map_err(|_| Error::Invalid("LeaderboardEntry", "invalid player name"))?;
        Ok(entry)
    }
}

impl EncodeSize for LeaderboardEntry {
    fn encode_size(&self) -> usize {
        self.id.encode_size()
            + string_encode_size(&self.player_name)
            + CHIPS_SIZE
            + string_encode_size(&self.achievements)
    }
}

/// In-memory leaderboard.
///
/// Entries are kept sorted by score descending; equal scores keep arrival order. Once
/// [MAX_LEADERBOARD_ENTRIES] are stored the lowest score is evicted.
#[derive(Clone, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawLeaderboard")]
pub struct Leaderboard {
    next_id: u64,
    entries: Vec<LeaderboardEntry>,
}

/// Unchecked serde form of [Leaderboard].
#[derive(Deserialize)]
struct RawLeaderboard {
    next_id: u64,
    entries: Vec<LeaderboardEntry>,
}

impl TryFrom<RawLeaderboard> for Leaderboard {
    type Error = InvalidLeaderboard;

    fn try_from(raw: RawLeaderboard) -> Result<Self, Self::Error> {
        let board = Self {
            next_id: raw.next_id,
            entries: raw.entries,
        };
        board.validate()?;
        Ok(board)
    }
}

impl Leaderboard {
    /// Records a finalized score and returns the stored entry.
    pub fn insert(
        &mut self,
        player_name: &str,
        score: i64,
        achievements: &str,
    ) -> Result<LeaderboardEntry, LeaderboardError> {
        validate_name(player_name)?;

        self.next_id += 1;
        let entry = LeaderboardEntry {
            id: self.next_id,
            player_name: player_name.to_string(),
            score,
            achievements: achievements.to_string(),
        };

        // Insert after every entry with an equal or higher score so ties stay in arrival order
        let insert_pos = self.entries.partition_point(|e| e.score >= score);
        self.entries.insert(insert_pos, entry.clone());
        self.entries.truncate(MAX_LEADERBOARD_ENTRIES);
        Ok(entry)
    }

    /// Check the ordering and id invariants of a board loaded from storage.
    pub fn validate(&self) -> Result<(), InvalidLeaderboard> {
        if self.entries.len() > MAX_LEADERBOARD_ENTRIES {
            return Err(InvalidLeaderboard("too many entries"));
        }
        if !self.entries.windows(2).all(|w| w[0].score >= w[1].score) {
            return Err(InvalidLeaderboard("entries not sorted by score"));
        }
        let mut ids = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if entry.id == 0 {
                return Err(InvalidLeaderboard("entry id is zero"));
            }
            if entry.id > self.next_id {
                return Err(InvalidLeaderboard("entry id ahead of counter"));
            }
            if !ids.insert(entry.id) {
                return Err(InvalidLeaderboard("duplicate entry id"));
            }
            if validate_name(&entry.player_name).is_err() {
                return Err(InvalidLeaderboard("invalid player name"));
            }
        }
        Ok(())
    }

    /// Highest `n` scores, best first.
    pub fn top(&self, n: usize) -> Vec<LeaderboardEntry> {
        self.entries.iter().take(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Write for Leaderboard {
    fn write(&self, writer: &mut impl BufMut) {
        self.next_id.write(writer);
        self.entries.write(writer);
    }
}

impl Read for Leaderboard {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let next_id = u64::read(reader)?;
        let entries =
            Vec::<LeaderboardEntry>::read_range(reader, 0..=MAX_LEADERBOARD_ENTRIES)?;
        let board = Self { next_id, entries };
        board
            .validate()
            .map_err(|InvalidLeaderboard(reason)| Error::Invalid("Leaderboard", reason))?;
        Ok(board)
    }
}

impl EncodeSize for Leaderboard {
    fn encode_size(&self) -> usize {
        self.next_id.encode_size() + self.entries.encode_size()
    }
}
