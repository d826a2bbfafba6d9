use crate::casino::DiceSource;
use std::collections::VecDeque;

/// Dice source that replays a fixed list of rolls.
///
/// Once the script runs out every further roll is a natural seven.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<(u8, u8)>,
}

impl ScriptedDice {
    pub fn new(rolls: &[(u8, u8)]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, d1: u8, d2: u8) {
        self.rolls.push_back((d1, d2));
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn next(&mut self) -> (u8, u8) {
        self.rolls.pop_front().unwrap_or((3, 4))
    }
}
