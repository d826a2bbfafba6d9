//! Craps domain types.
//!
//! Defines achievement/roll/session/leaderboard types and constants used by the execution layer
//! and clients.

mod achievement;
mod codec;
mod constants;
mod leaderboard;
mod roll;
mod session;

pub use achievement::*;
pub use codec::{read_string, string_encode_size, write_string};
pub use constants::*;
pub use leaderboard::*;
pub use roll::*;
pub use session::*;
