//! Table plumbing around the session engine.
//!
//! A [Layer] owns every open session, the dice source and the leaderboard store. Sessions are
//! addressed by an explicit [SessionId] and each one sits behind its own mutex, so concurrent
//! requests for the same session are applied one at a time while different sessions proceed
//! independently.

use crate::{
    casino::{craps::CrapsSession, Dice, DiceSource, GameError},
    leaderboard::LeaderboardStore,
};
use craps_types::casino::{LeaderboardEntry, LeaderboardError, SessionSnapshot};
use serde::{Deserialize, Serialize};
use std::{
    collections::HashMap,
    fmt,
    str::FromStr,
    sync::{Arc, Mutex, MutexGuard, RwLock},
};
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Handle for one player's session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayerError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("session {0} has no chips left")]
    GameOver(SessionId),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Leaderboard(#[from] LeaderboardError),
}

/// Acquire `mutex`, recovering the guard if a previous holder panicked.
fn lock<'a, T>(mutex: &'a Mutex<T>, name: &str) -> MutexGuard<'a, T> {
    mutex.lock().unwrap_or_else(|poisoned| {
        error!("Recovering poisoned {} lock", name);
        poisoned.into_inner()
    })
}

pub struct Layer<D, S> {
    sessions: RwLock<HashMap<SessionId, Arc<Mutex<CrapsSession>>>>,
    dice: Mutex<D>,
    store: Mutex<S>,
}

impl<D: DiceSource, S: LeaderboardStore> Layer<D, S> {
    pub fn new(dice: D, store: S) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            dice: Mutex::new(dice),
            store: Mutex::new(store),
        }
    }

    /// Start a fresh session and return its handle.
    pub fn open(&self) -> SessionId {
        let id = SessionId::random();
        let mut sessions = self.sessions.write().unwrap_or_else(|poisoned| {
            error!("Recovering poisoned sessions lock in open");
            poisoned.into_inner()
        });
        sessions.insert(id, Arc::new(Mutex::new(CrapsSession::new())));
        info!(session = %id, open = sessions.len(), "opened session");
        id
    }

    /// Drop a session. Returns whether it existed.
    pub fn close(&self, id: SessionId) -> bool {
        let mut sessions = self.sessions.write().unwrap_or_else(|poisoned| {
            error!("Recovering poisoned sessions lock in close");
            poisoned.into_inner()
        });
        let existed = sessions.remove(&id).is_some();
        if existed {
            info!(session = %id, "closed session");
        }
        existed
    }

    fn session(&self, id: SessionId) -> Result<Arc<Mutex<CrapsSession>>, LayerError> {
        let sessions = self.sessions.read().unwrap_or_else(|poisoned| {
            error!("Recovering poisoned sessions lock in session");
            poisoned.into_inner()
        });
        sessions
            .get(&id)
            .cloned()
            .ok_or(LayerError::SessionNotFound(id))
    }

    pub fn snapshot(&self, id: SessionId) -> Result<SessionSnapshot, LayerError> {
        let session = self.session(id)?;
        let session = lock(&session, "session");
        Ok(session.snapshot())
    }

    /// Source one pair of dice and apply it.
    ///
    /// Bankrupt sessions are refused before any dice are drawn.
    pub fn roll(&self, id: SessionId) -> Result<SessionSnapshot, LayerError> {
        let session = self.session(id)?;
        let mut session = lock(&session, "session");
        if session.is_game_over() {
            debug!(session = %id, bankroll = session.bankroll(), "roll refused, game over");
            return Err(LayerError::GameOver(id));
        }

        let (d1, d2) = lock(&self.dice, "dice").next();
        let dice = Dice::new(d1, d2).inspect_err(|e| {
            warn!(session = %id, d1, d2, "dice source returned invalid roll: {}", e);
        })?;
        session.roll(dice.d1(), dice.d2());
        debug!(
            session = %id,
            d1 = dice.d1(),
            d2 = dice.d2(),
            point = session.point(),
            bankroll = session.bankroll(),
            "rolled"
        );
        Ok(session.snapshot())
    }

    pub fn set_bet(&self, id: SessionId, amount: i64) -> Result<SessionSnapshot, LayerError> {
        let session = self.session(id)?;
        let mut session = lock(&session, "session");
        session.set_bet(amount);
        Ok(session.snapshot())
    }

    /// Returns whether the odds bet was taken, along with the resulting state.
    pub fn place_odds(
        &self,
        id: SessionId,
        amount: i64,
    ) -> Result<(bool, SessionSnapshot), LayerError> {
        let session = self.session(id)?;
        let mut session = lock(&session, "session");
        let placed = session.place_odds_bet(amount);
        debug!(session = %id, amount, placed, "odds bet");
        Ok((placed, session.snapshot()))
    }

    pub fn reset(&self, id: SessionId) -> Result<SessionSnapshot, LayerError> {
        let session = self.session(id)?;
        let mut session = lock(&session, "session");
        session.reset();
        info!(session = %id, "reset session");
        Ok(session.snapshot())
    }

    /// End a session: record its bankroll and achievements under `player_name`, then reset it.
    ///
    /// A blank name skips the leaderboard but still resets. If the store rejects the entry the
    /// session is left untouched.
    pub fn finish(
        &self,
        id: SessionId,
        player_name: &str,
    ) -> Result<Option<LeaderboardEntry>, LayerError> {
        let session = self.session(id)?;
        let mut session = lock(&session, "session");

        let name = player_name.trim();
        let entry = if name.is_empty() {
            None
        } else {
            let entry = lock(&self.store, "store").save(
                name,
                session.bankroll(),
                &session.achievement_ids(),
            )?;
            info!(
                session = %id,
                player = %entry.player_name,
                score = entry.score,
                achievements = %entry.achievements,
                "recorded score"
            );
            Some(entry)
        };

        session.reset();
        Ok(entry)
    }

    pub fn leaderboard(&self, n: usize) -> Vec<LeaderboardEntry> {
        lock(&self.store, "store").top(n)
    }
}
