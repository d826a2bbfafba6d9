//! Pass-line craps for a single player session.
//!
//! Phases:
//! - Come out: 7/11 win (natural), 2/3/12 lose (craps), any other total establishes the point
//! - Point: the point wins, 7 loses (seven-out), any other total rolls again
//!
//! The pass-line bet pays even money and is locked once a point is established. One odds bet
//! may be taken behind it per point; it pays true odds truncated to whole chips:
//! 4/10 pay 2:1, 5/9 pay 3:2, 6/8 pay 6:5.
//!
//! Every operation is a total, synchronous transformation of the session. Invalid requests are
//! clamped or ignored rather than reported, except [CrapsSession::place_odds_bet] which returns
//! whether the bet was taken.

use craps_types::casino::{
    dice_face, Achievement, AchievementSet, RollOutcome, RollRecord, SessionSnapshot,
    COMEBACK_FLOOR, COMEBACK_TARGET, DEFAULT_BET, HIGH_ROLLER_BANKROLL, HOT_STREAK_WINS,
    LUCKY_SEVEN_WINS, MAX_ODDS_MULTIPLE, MIN_BET, ROLL_HISTORY_LIMIT, STARTING_BANKROLL,
    WELCOME_MESSAGE,
};
use std::collections::VecDeque;

/// Craps phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    ComeOut,
    Point(u8),
}

/// Calculate true odds payout (WINNINGS ONLY) for an odds bet behind `point`.
pub fn odds_payout(point: u8, odds_bet: i64) -> i64 {
    if odds_bet <= 0 {
        return 0;
    }
    match point {
        4 | 10 => odds_bet.saturating_mul(2),     // 2:1
        5 | 9 => odds_bet.saturating_mul(3) / 2,  // 3:2
        6 | 8 => odds_bet.saturating_mul(6) / 5,  // 6:5
        _ => 0,
    }
}

/// All mutable game state for one player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrapsSession {
    bankroll: i64,
    point: u8,
    wins: u32,
    losses: u32,
    last_dice1: u8,
    last_dice2: u8,
    message: String,
    current_bet: i64,
    odds_bet: i64,
    roll_history: VecDeque<RollRecord>,
    current_streak: i64,
    achievements: AchievementSet,

    // Achievement progress
    natural_seven_wins: u32,
    was_below_floor: bool,
    rolls_since_point_set: u32,
}

impl Default for CrapsSession {
    fn default() -> Self {
        Self {
            bankroll: STARTING_BANKROLL,
            point: 0,
            wins: 0,
            losses: 0,
            last_dice1: 0,
            last_dice2: 0,
            message: WELCOME_MESSAGE.to_string(),
            current_bet: DEFAULT_BET,
            odds_bet: 0,
            roll_history: VecDeque::with_capacity(ROLL_HISTORY_LIMIT + 1),
            current_streak: 0,
            achievements: AchievementSet::default(),
            natural_seven_wins: 0,
            was_below_floor: false,
            rolls_since_point_set: 0,
        }
    }
}

impl CrapsSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the pass-line wager, clamped to `[MIN_BET, bankroll]`.
    ///
    /// Ignored while a point is established.
    pub fn set_bet(&mut self, amount: i64) {
        if self.point != 0 {
            return;
        }
        self.current_bet = amount.min(self.bankroll).max(MIN_BET);
    }

    /// Take odds behind the pass line, clamped to `[0, min(3 * bet, bankroll)]`.
    ///
    /// Returns false without touching state when there is no point or odds are already working.
    pub fn place_odds_bet(&mut self, amount: i64) -> bool {
        if self.point == 0 || self.odds_bet > 0 {
            return false;
        }
        let max_odds = self
            .current_bet
            .saturating_mul(MAX_ODDS_MULTIPLE)
            .min(self.bankroll);
        self.odds_bet = amount.min(max_odds).max(0);
        self.odds_bet > 0
    }

    /// Apply a roll of `d1` and `d2`.
    ///
    /// Values are trusted; range checks belong to whoever sourced the dice. A bankrupt session
    /// ignores the roll entirely.
    pub fn roll(&mut self, d1: u8, d2: u8) {
        if self.is_game_over() {
            return;
        }
        self.current_bet = self.current_bet.min(self.bankroll);

        self.last_dice1 = d1;
        self.last_dice2 = d2;
        let total = d1.saturating_add(d2);

        let outcome = match self.point {
            0 => self.come_out(total),
            point => self.point_roll(point, total),
        };

        self.update_streak(outcome);
        self.record(RollRecord::new(d1, d2, outcome));
        self.evaluate_achievements(d1, d2, outcome);
    }

    /// Restore the session to its starting state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn come_out(&mut self, total: u8) -> RollOutcome {
        match total {
            7 | 11 => {
                self.settle_win(total, "Natural!");
                RollOutcome::Win
            }
            2 | 3 | 12 => {
                self.settle_loss(total, "Craps!");
                RollOutcome::Loss
            }
            _ => {
                self.point = total;
                self.rolls_since_point_set = 0;
                self.message = format!("Rolled {total}. Point is set to {total}. Roll again!");
                RollOutcome::PointSet
            }
        }
    }

    fn point_roll(&mut self, point: u8, total: u8) -> RollOutcome {
        self.rolls_since_point_set += 1;
        if total == point {
            if self.rolls_since_point_set == 1 {
                self.achievements.insert(Achievement::PointSniper);
            }
            self.settle_win(total, &format!("Hit the point ({point})!"));
            RollOutcome::Win
        } else if total == 7 {
            self.settle_loss(total, "Seven Out!");
            RollOutcome::Loss
        } else {
            self.message = format!("Rolled {total}. Roll again to hit {point}.");
            RollOutcome::Continue
        }
    }

    fn settle_win(&mut self, total: u8, headline: &str) {
        let payout = self
            .current_bet
            .saturating_add(odds_payout(self.point, self.odds_bet));
        self.bankroll = self.bankroll.saturating_add(payout);
        self.wins += 1;
        if total == 7 {
            self.natural_seven_wins += 1;
        }
        self.message = format!("Rolled {total}. {headline} You win ${payout}!");
        self.end_round();
    }

    fn settle_loss(&mut self, total: u8, headline: &str) {
        let loss = self.current_bet.saturating_add(self.odds_bet);
        self.bankroll = self.bankroll.saturating_sub(loss);
        self.losses += 1;
        self.message = format!("Rolled {total}. {headline} You lose ${loss}.");
        self.end_round();
        if self.bankroll < COMEBACK_FLOOR {
            self.was_below_floor = true;
        }
    }

    fn end_round(&mut self) {
        self.point = 0;
        self.odds_bet = 0;
        self.rolls_since_point_set = 0;
    }

    fn update_streak(&mut self, outcome: RollOutcome) {
        match outcome {
            RollOutcome::Win => {
                self.current_streak = if self.current_streak > 0 {
                    self.current_streak + 1
                } else {
                    1
                };
            }
            RollOutcome::Loss => {
                self.current_streak = if self.current_streak < 0 {
                    self.current_streak - 1
                } else {
                    -1
                };
            }
            RollOutcome::PointSet | RollOutcome::Continue => {}
        }
    }

    fn record(&mut self, record: RollRecord) {
        self.roll_history.push_back(record);
        while self.roll_history.len() > ROLL_HISTORY_LIMIT {
            self.roll_history.pop_front();
        }
    }

    /// Runs after settlement, so every check sees the resolved bankroll and counters.
    ///
    /// Point Sniper is awarded while resolving the point roll instead.
    fn evaluate_achievements(&mut self, d1: u8, d2: u8, outcome: RollOutcome) {
        let checks = [
            (
                Achievement::FirstBlood,
                outcome == RollOutcome::Win && self.wins == 1,
            ),
            (
                Achievement::HotStreak,
                self.current_streak >= HOT_STREAK_WINS,
            ),
            (
                Achievement::HighRoller,
                self.bankroll >= HIGH_ROLLER_BANKROLL,
            ),
            (
                Achievement::Lucky7,
                self.natural_seven_wins >= LUCKY_SEVEN_WINS,
            ),
            (
                Achievement::ComebackKid,
                self.was_below_floor && self.bankroll >= COMEBACK_TARGET,
            ),
            (Achievement::SnakeEyes, d1 == 1 && d2 == 1),
        ];
        for (achievement, unlocked) in checks {
            if unlocked {
                self.achievements.insert(achievement);
            }
        }
    }

    pub fn bankroll(&self) -> i64 {
        self.bankroll
    }

    /// 0 during the come-out phase.
    pub fn point(&self) -> u8 {
        self.point
    }

    pub fn phase(&self) -> Phase {
        match self.point {
            0 => Phase::ComeOut,
            point => Phase::Point(point),
        }
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn last_dice(&self) -> (u8, u8) {
        (self.last_dice1, self.last_dice2)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn current_bet(&self) -> i64 {
        self.current_bet
    }

    pub fn odds_bet(&self) -> i64 {
        self.odds_bet
    }

    /// Most recent roll last.
    pub fn roll_history(&self) -> &VecDeque<RollRecord> {
        &self.roll_history
    }

    pub fn current_streak(&self) -> i64 {
        self.current_streak
    }

    pub fn is_on_win_streak(&self) -> bool {
        self.current_streak > 0
    }

    pub fn is_on_loss_streak(&self) -> bool {
        self.current_streak < 0
    }

    pub fn achievements(&self) -> &AchievementSet {
        &self.achievements
    }

    /// Comma-joined achievement ids, as persisted with a leaderboard score.
    pub fn achievement_ids(&self) -> String {
        self.achievements.to_ids()
    }

    pub fn natural_seven_wins(&self) -> u32 {
        self.natural_seven_wins
    }

    pub fn was_below_floor(&self) -> bool {
        self.was_below_floor
    }

    pub fn rolls_since_point_set(&self) -> u32 {
        self.rolls_since_point_set
    }

    /// A session with no chips left takes no further rolls until reset.
    pub fn is_game_over(&self) -> bool {
        self.bankroll <= 0
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            bankroll: self.bankroll,
            point: self.point,
            wins: self.wins,
            losses: self.losses,
            last_dice1: self.last_dice1,
            last_dice2: self.last_dice2,
            dice_faces: [dice_face(self.last_dice1), dice_face(self.last_dice2)],
            message: self.message.clone(),
            current_bet: self.current_bet,
            odds_bet: self.odds_bet,
            roll_history: self.roll_history.iter().copied().collect(),
            current_streak: self.current_streak,
            achievements: self.achievements.iter().map(Achievement::badge).collect(),
            game_over: self.is_game_over(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcomes(session: &CrapsSession) -> Vec<RollOutcome> {
        session.roll_history().iter().map(|r| r.outcome).collect()
    }

    #[test]
    fn test_odds_payout() {
        assert_eq!(odds_payout(4, 10), 20);
        assert_eq!(odds_payout(10, 7), 14);
        assert_eq!(odds_payout(5, 10), 15);
        assert_eq!(odds_payout(9, 7), 10); // floor(10.5)
        assert_eq!(odds_payout(6, 10), 12);
        assert_eq!(odds_payout(8, 7), 8); // floor(8.4)
        assert_eq!(odds_payout(6, 0), 0);
        assert_eq!(odds_payout(0, 10), 0);
    }

    #[test]
    fn test_new_session_defaults() {
        let session = CrapsSession::new();
        assert_eq!(session.bankroll(), 100);
        assert_eq!(session.current_bet(), 10);
        assert_eq!(session.phase(), Phase::ComeOut);
        assert_eq!(session.last_dice(), (0, 0));
        assert_eq!(session.message(), WELCOME_MESSAGE);
        assert!(session.roll_history().is_empty());
        assert!(session.achievements().is_empty());
        assert!(!session.is_game_over());
    }

    #[test]
    fn test_come_out_naturals_win() {
        let mut session = CrapsSession::new();
        session.roll(3, 4);
        assert_eq!(session.bankroll(), 110);
        assert_eq!(session.wins(), 1);
        assert_eq!(session.point(), 0);
        assert_eq!(session.message(), "Rolled 7. Natural! You win $10!");

        session.roll(5, 6);
        assert_eq!(session.bankroll(), 120);
        assert_eq!(session.wins(), 2);
        assert_eq!(session.point(), 0);
    }

    #[test]
    fn test_come_out_craps_loses() {
        let mut session = CrapsSession::new();
        session.roll(1, 1);
        assert_eq!(session.bankroll(), 90);
        assert_eq!(session.losses(), 1);
        assert_eq!(session.message(), "Rolled 2. Craps! You lose $10.");

        session.roll(1, 2);
        assert_eq!(session.bankroll(), 80);
        session.roll(6, 6);
        assert_eq!(session.bankroll(), 70);
        assert_eq!(session.losses(), 3);
        assert_eq!(session.point(), 0);
    }

    #[test]
    fn test_come_out_establishes_every_point() {
        for (d1, d2) in [(2, 2), (2, 3), (3, 3), (4, 4), (4, 5), (5, 5)] {
            let mut session = CrapsSession::new();
            session.roll(d1, d2);
            assert_eq!(session.phase(), Phase::Point(d1 + d2));
            assert_eq!(outcomes(&session), vec![RollOutcome::PointSet]);
            assert_eq!(session.bankroll(), 100);
            assert_eq!(session.current_streak(), 0);
        }
    }

    #[test]
    fn test_point_hit_wins() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        assert_eq!(session.point(), 4);
        assert_eq!(session.message(), "Rolled 4. Point is set to 4. Roll again!");

        session.roll(1, 2);
        assert_eq!(session.point(), 4);
        assert_eq!(session.bankroll(), 100);
        assert_eq!(session.message(), "Rolled 3. Roll again to hit 4.");

        session.roll(3, 1);
        assert_eq!(session.point(), 0);
        assert_eq!(session.bankroll(), 110);
        assert_eq!(session.wins(), 1);
        assert_eq!(session.message(), "Rolled 4. Hit the point (4)! You win $10!");
        assert_eq!(
            outcomes(&session),
            vec![
                RollOutcome::PointSet,
                RollOutcome::Continue,
                RollOutcome::Win
            ]
        );
    }

    #[test]
    fn test_point_seven_out_loses() {
        let mut session = CrapsSession::new();
        session.roll(4, 5);
        assert_eq!(session.point(), 9);

        session.roll(3, 4);
        assert_eq!(session.point(), 0);
        assert_eq!(session.bankroll(), 90);
        assert_eq!(session.losses(), 1);
        assert_eq!(session.message(), "Rolled 7. Seven Out! You lose $10.");
        // A seven-out is not a natural
        assert_eq!(session.natural_seven_wins(), 0);
    }

    #[test]
    fn test_eleven_during_point_continues() {
        let mut session = CrapsSession::new();
        session.roll(3, 3);
        session.roll(5, 6);
        session.roll(1, 1);
        assert_eq!(session.point(), 6);
        assert_eq!(session.bankroll(), 100);
        assert_eq!(session.rolls_since_point_set(), 2);
        assert_eq!(
            outcomes(&session),
            vec![
                RollOutcome::PointSet,
                RollOutcome::Continue,
                RollOutcome::Continue
            ]
        );
    }

    #[test]
    fn test_custom_bet_pays_exactly() {
        let mut session = CrapsSession::new();
        session.set_bet(25);
        session.roll(3, 4);
        assert_eq!(session.bankroll(), 125);
    }

    #[test]
    fn test_bet_clamped() {
        let mut session = CrapsSession::new();
        session.set_bet(200);
        assert_eq!(session.current_bet(), 100);
        session.set_bet(1);
        assert_eq!(session.current_bet(), 5);
        session.set_bet(-40);
        assert_eq!(session.current_bet(), 5);
    }

    #[test]
    fn test_bet_locked_during_point() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.set_bet(50);
        assert_eq!(session.current_bet(), 10);

        // Unlocks once the round resolves
        session.roll(2, 2);
        session.set_bet(50);
        assert_eq!(session.current_bet(), 50);
    }

    #[test]
    fn test_bet_reclamped_to_bankroll_before_roll() {
        let mut session = CrapsSession::new();
        session.set_bet(100);
        session.roll(1, 1); // lose 100 -> 0
        assert_eq!(session.bankroll(), 0);
        assert!(session.is_game_over());

        let mut session = CrapsSession::new();
        session.set_bet(60);
        session.roll(1, 2); // 40 left, bet still 60
        assert_eq!(session.current_bet(), 60);
        session.roll(3, 4);
        assert_eq!(session.current_bet(), 40);
        assert_eq!(session.bankroll(), 80);
    }

    #[test]
    fn test_odds_requires_point() {
        let mut session = CrapsSession::new();
        assert!(!session.place_odds_bet(10));
        assert_eq!(session.odds_bet(), 0);
    }

    #[test]
    fn test_odds_placed_once_per_point() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        assert!(session.place_odds_bet(10));
        assert_eq!(session.odds_bet(), 10);

        assert!(!session.place_odds_bet(20));
        assert_eq!(session.odds_bet(), 10);
    }

    #[test]
    fn test_odds_limited_to_three_times_bet() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        assert!(session.place_odds_bet(50));
        assert_eq!(session.odds_bet(), 30);
    }

    #[test]
    fn test_odds_limited_by_bankroll() {
        let mut session = CrapsSession::new();
        session.set_bet(60);
        session.roll(2, 2);
        assert!(session.place_odds_bet(500));
        assert_eq!(session.odds_bet(), 100);
    }

    #[test]
    fn test_zero_odds_is_not_placed() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        assert!(!session.place_odds_bet(0));
        assert!(!session.place_odds_bet(-5));
        assert_eq!(session.odds_bet(), 0);
        // Still allowed to take odds afterwards
        assert!(session.place_odds_bet(5));
    }

    #[test]
    fn test_odds_payouts_by_point() {
        for ((d1, d2), (h1, h2), expected) in [
            ((2, 2), (1, 3), 130), // 2:1
            ((2, 3), (1, 4), 125), // 3:2
            ((2, 4), (1, 5), 122), // 6:5
            ((4, 4), (2, 6), 122),
            ((4, 5), (3, 6), 125),
            ((5, 5), (4, 6), 130),
        ] {
            let mut session = CrapsSession::new();
            session.roll(d1, d2);
            assert!(session.place_odds_bet(10));
            session.roll(h1, h2);
            assert_eq!(session.bankroll(), expected, "point {}", d1 + d2);
            assert_eq!(session.odds_bet(), 0);
        }
    }

    #[test]
    fn test_odds_win_narrates_total_payout() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.place_odds_bet(10);
        session.roll(1, 3);
        assert_eq!(session.message(), "Rolled 4. Hit the point (4)! You win $30!");
    }

    #[test]
    fn test_odds_truncates_fractional_chips() {
        let mut session = CrapsSession::new();
        session.roll(2, 3);
        session.place_odds_bet(7);
        session.roll(2, 3);
        // 10 pass + floor(7 * 3 / 2) = 10
        assert_eq!(session.bankroll(), 120);
    }

    #[test]
    fn test_odds_lost_on_seven_out() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.place_odds_bet(10);
        session.roll(3, 4);
        assert_eq!(session.bankroll(), 80);
        assert_eq!(session.odds_bet(), 0);
        assert_eq!(session.message(), "Rolled 7. Seven Out! You lose $20.");
    }

    #[test]
    fn test_history_capped_fifo() {
        let mut session = CrapsSession::new();
        session.roll(1, 1); // oldest, will be evicted
        for _ in 0..19 {
            session.roll(3, 4);
        }
        assert_eq!(session.roll_history().len(), ROLL_HISTORY_LIMIT);
        assert!(session.roll_history().iter().all(|r| r.sum == 7));
    }

    #[test]
    fn test_history_records_dice() {
        let mut session = CrapsSession::new();
        session.roll(3, 4);
        let record = session.roll_history()[0];
        assert_eq!((record.dice1, record.dice2, record.sum), (3, 4, 7));
        assert!(record.is_win);
        assert_eq!(session.last_dice(), (3, 4));
    }

    #[test]
    fn test_streaks() {
        let mut session = CrapsSession::new();
        session.roll(3, 4);
        session.roll(5, 6);
        session.roll(3, 4);
        assert_eq!(session.current_streak(), 3);
        assert!(session.is_on_win_streak());

        session.roll(1, 1);
        assert_eq!(session.current_streak(), -1);
        session.roll(1, 2);
        assert_eq!(session.current_streak(), -2);
        assert!(session.is_on_loss_streak());

        session.roll(5, 6);
        assert_eq!(session.current_streak(), 1);
    }

    #[test]
    fn test_point_set_keeps_streak() {
        let mut session = CrapsSession::new();
        session.roll(3, 4);
        session.roll(2, 2);
        session.roll(1, 2);
        assert_eq!(session.current_streak(), 1);
    }

    #[test]
    fn test_first_blood() {
        let mut session = CrapsSession::new();
        session.roll(1, 2);
        assert!(!session.achievements().contains(Achievement::FirstBlood));
        session.roll(3, 4);
        assert!(session.achievements().contains(Achievement::FirstBlood));
    }

    #[test]
    fn test_snake_eyes() {
        let mut session = CrapsSession::new();
        session.roll(1, 1);
        assert!(session.achievements().contains(Achievement::SnakeEyes));

        // Also unlocks during the point phase
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.roll(1, 1);
        assert!(session.achievements().contains(Achievement::SnakeEyes));
    }

    #[test]
    fn test_hot_streak_on_fifth_win() {
        let mut session = CrapsSession::new();
        for _ in 0..4 {
            session.roll(3, 4);
        }
        assert!(!session.achievements().contains(Achievement::HotStreak));
        session.roll(3, 4);
        assert!(session.achievements().contains(Achievement::HotStreak));
    }

    #[test]
    fn test_lucky_seven_on_third_natural() {
        let mut session = CrapsSession::new();
        session.roll(3, 4);
        session.roll(5, 6); // eleven does not count
        session.roll(3, 4);
        assert!(!session.achievements().contains(Achievement::Lucky7));
        session.roll(3, 4);
        assert!(session.achievements().contains(Achievement::Lucky7));
        assert_eq!(session.natural_seven_wins(), 3);
    }

    #[test]
    fn test_point_sniper() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.roll(1, 3);
        assert!(session.achievements().contains(Achievement::PointSniper));
    }

    #[test]
    fn test_point_sniper_not_after_multiple_rolls() {
        let mut session = CrapsSession::new();
        session.roll(2, 2);
        session.roll(1, 2);
        session.roll(1, 3);
        assert!(!session.achievements().contains(Achievement::PointSniper));
    }

    #[test]
    fn test_high_roller() {
        let mut session = CrapsSession::new();
        session.set_bet(100);
        // 100 -> 200 -> 400 -> 800
        for _ in 0..2 {
            session.roll(3, 4);
            session.set_bet(session.bankroll());
        }
        assert!(!session.achievements().contains(Achievement::HighRoller));
        session.roll(3, 4);
        assert_eq!(session.bankroll(), 800);
        assert!(session.achievements().contains(Achievement::HighRoller));
    }

    #[test]
    fn test_comeback_kid() {
        let mut session = CrapsSession::new();
        session.set_bet(85);
        session.roll(1, 1); // 15 left
        assert!(session.was_below_floor());
        assert!(!session.achievements().contains(Achievement::ComebackKid));

        // Double up until the bankroll clears the target
        while session.bankroll() < COMEBACK_TARGET {
            session.set_bet(session.bankroll());
            session.roll(3, 4);
        }
        assert_eq!(session.bankroll(), 240);
        assert!(session.achievements().contains(Achievement::ComebackKid));
    }

    #[test]
    fn test_comeback_needs_dip() {
        let mut session = CrapsSession::new();
        session.set_bet(100);
        session.roll(3, 4); // 200 without ever dipping
        assert!(!session.was_below_floor());
        assert!(!session.achievements().contains(Achievement::ComebackKid));
    }

    #[test]
    fn test_below_floor_is_sticky() {
        let mut session = CrapsSession::new();
        session.set_bet(90);
        session.roll(1, 1); // 10
        session.set_bet(10);
        session.roll(3, 4); // 20
        assert!(session.was_below_floor());
    }

    #[test]
    fn test_achievement_ids_in_unlock_order() {
        let mut session = CrapsSession::new();
        session.roll(1, 1);
        session.roll(3, 4);
        assert_eq!(session.achievement_ids(), "SNAKE_EYES,FIRST_BLOOD");
    }

    #[test]
    fn test_roll_ignored_when_bankrupt() {
        let mut session = CrapsSession::new();
        session.set_bet(100);
        session.roll(1, 2);
        assert!(session.is_game_over());

        let before = session.clone();
        session.roll(3, 4);
        assert_eq!(session, before);
        assert_eq!(session.roll_history().len(), 1);
    }

    #[test]
    fn test_odds_can_drive_bankroll_negative() {
        let mut session = CrapsSession::new();
        session.set_bet(60);
        session.roll(2, 2);
        session.place_odds_bet(100); // clamped to bankroll
        session.roll(3, 4);
        assert_eq!(session.bankroll(), -60);
        assert!(session.is_game_over());
        assert!(session.snapshot().game_over);
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut session = CrapsSession::new();
        session.set_bet(50);
        session.roll(1, 1);
        session.roll(3, 4);
        session.roll(2, 2);
        session.place_odds_bet(10);
        assert!(!session.achievements().is_empty());

        session.reset();
        assert_eq!(session, CrapsSession::new());
        assert_eq!(session.bankroll(), 100);
        assert_eq!(session.current_bet(), 10);
        assert_eq!(session.point(), 0);
        assert_eq!((session.wins(), session.losses()), (0, 0));
        assert!(session.roll_history().is_empty());
        assert!(session.achievements().is_empty());
        assert_eq!(session.current_streak(), 0);
        assert!(!session.was_below_floor());
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut session = CrapsSession::new();
        session.roll(1, 1);
        session.roll(2, 2);
        session.place_odds_bet(10);

        let snapshot = session.snapshot();
        assert_eq!(snapshot.bankroll, 90);
        assert_eq!(snapshot.point, 4);
        assert!(snapshot.is_point_phase());
        assert_eq!(snapshot.odds_bet, 10);
        assert_eq!(snapshot.losses, 1);
        assert_eq!((snapshot.last_dice1, snapshot.last_dice2), (2, 2));
        assert_eq!(snapshot.dice_faces, ['\u{2681}', '\u{2681}']);
        assert_eq!(snapshot.roll_history.len(), 2);
        assert_eq!(snapshot.current_streak, -1);
        assert_eq!(snapshot.achievements.len(), 1);
        assert_eq!(snapshot.achievements[0].id, "SNAKE_EYES");
        assert!(!snapshot.game_over);
    }
}
