/// Bankroll a fresh (or reset) session starts with
pub const STARTING_BANKROLL: i64 = 100;

/// Pass-line wager a fresh (or reset) session starts with
pub const DEFAULT_BET: i64 = 10;

/// Smallest accepted pass-line wager
pub const MIN_BET: i64 = 5;

/// Odds bets are capped at this multiple of the pass-line wager
pub const MAX_ODDS_MULTIPLE: i64 = 3;

/// Number of rolls kept in a session's history
pub const ROLL_HISTORY_LIMIT: usize = 15;

/// Consecutive wins required for Hot Streak
pub const HOT_STREAK_WINS: i64 = 5;

/// Bankroll required for High Roller
pub const HIGH_ROLLER_BANKROLL: i64 = 500;

/// Natural seven wins required for Lucky 7
pub const LUCKY_SEVEN_WINS: u32 = 3;

/// Dropping below this bankroll arms Comeback Kid
pub const COMEBACK_FLOOR: i64 = 20;

/// Bankroll that completes Comeback Kid once armed
pub const COMEBACK_TARGET: i64 = 200;

/// Maximum name length for leaderboard entries
pub const MAX_NAME_LENGTH: usize = 32;

/// Entries shown on the leaderboard
pub const LEADERBOARD_SIZE: usize = 5;

/// Upper bound on entries accepted when decoding a leaderboard
pub const MAX_LEADERBOARD_ENTRIES: usize = 10_000;

/// Maximum length of an encoded achievement id list
pub const MAX_ACHIEVEMENTS_LENGTH: usize = 128;

/// Narration shown before the first roll
pub const WELCOME_MESSAGE: &str = "Welcome to Craps! Place your bet and roll the dice.";
