pub mod casino;
pub mod leaderboard;

#[cfg(any(test, feature = "mocks"))]
pub mod mocks;

mod layer;

pub use layer::{Layer, LayerError, SessionId};
pub use leaderboard::LeaderboardStore;
