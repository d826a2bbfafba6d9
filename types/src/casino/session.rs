use serde::{Deserialize, Serialize};

use super::{AchievementBadge, RollRecord};

/// Read-only view of a craps session, taken after an operation completes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub bankroll: i64,
    /// 0 during the come-out phase, otherwise the established point.
    pub point: u8,
    pub wins: u32,
    pub losses: u32,
    pub last_dice1: u8,
    pub last_dice2: u8,
    /// Die glyphs for the last roll; a generic die before the first roll.
    pub dice_faces: [char; 2],
    pub message: String,
    pub current_bet: i64,
    pub odds_bet: i64,
    pub roll_history: Vec<RollRecord>,
    /// Positive for consecutive wins, negative for consecutive losses.
    pub current_streak: i64,
    pub achievements: Vec<AchievementBadge>,
    pub game_over: bool,
}

impl SessionSnapshot {
    pub fn is_point_phase(&self) -> bool {
        self.point != 0
    }
}
