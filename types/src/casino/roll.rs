use bytes::{Buf, BufMut};
use commonware_codec::{Error, FixedSize, Read, ReadExt, Write};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a single roll resolved the pass-line wager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum RollOutcome {
    /// Natural on the come-out, or the point was made.
    Win = 0,
    /// Craps on the come-out, or a seven-out.
    Loss = 1,
    /// Come-out roll established a point.
    PointSet = 2,
    /// Point phase roll that neither made the point nor sevened out.
    Continue = 3,
}

impl RollOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            RollOutcome::Win => "WIN",
            RollOutcome::Loss => "LOSS",
            RollOutcome::PointSet => "POINT_SET",
            RollOutcome::Continue => "CONTINUE",
        }
    }

    /// Wins and losses end a round; the other outcomes leave streaks untouched.
    pub fn is_terminal(&self) -> bool {
        matches!(self, RollOutcome::Win | RollOutcome::Loss)
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Write for RollOutcome {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for RollOutcome {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        match value {
            0 => Ok(Self::Win),
            1 => Ok(Self::Loss),
            2 => Ok(Self::PointSet),
            3 => Ok(Self::Continue),
            i => Err(Error::InvalidEnum(i)),
        }
    }
}

impl FixedSize for RollOutcome {
    const SIZE: usize = 1;
}

/// One entry of a session's roll history. Never mutated once recorded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRecord {
    pub dice1: u8,
    pub dice2: u8,
    pub sum: u8,
    pub outcome: RollOutcome,
    pub is_win: bool,
    pub is_loss: bool,
}

impl RollRecord {
    pub fn new(dice1: u8, dice2: u8, outcome: RollOutcome) -> Self {
        Self {
            dice1,
            dice2,
            sum: dice1.saturating_add(dice2),
            outcome,
            is_win: outcome == RollOutcome::Win,
            is_loss: outcome == RollOutcome::Loss,
        }
    }
}

impl Write for RollRecord {
    fn write(&self, writer: &mut impl BufMut) {
        self.dice1.write(writer);
        self.dice2.write(writer);
        self.outcome.write(writer);
    }
}

impl Read for RollRecord {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let dice1 = u8::read(reader)?;
        let dice2 = u8::read(reader)?;
        let outcome = RollOutcome::read(reader)?;
        Ok(Self::new(dice1, dice2, outcome))
    }
}

impl FixedSize for RollRecord {
    const SIZE: usize = u8::SIZE + u8::SIZE + RollOutcome::SIZE;
}

/// Unicode die face for `value` (1-6), or a generic die for anything else.
pub fn dice_face(value: u8) -> char {
    match value {
        1 => '\u{2680}',
        2 => '\u{2681}',
        3 => '\u{2682}',
        4 => '\u{2683}',
        5 => '\u{2684}',
        6 => '\u{2685}',
        _ => '\u{1F3B2}',
    }
}
