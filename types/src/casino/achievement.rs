use bytes::{Buf, BufMut};
use commonware_codec::{EncodeSize, Error, FixedSize, Read, ReadExt, ReadRangeExt, Write};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error as ThisError;

/// Milestones a player can unlock during a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Achievement {
    FirstBlood = 0,
    HotStreak = 1,
    HighRoller = 2,
    #[serde(rename = "LUCKY_7")]
    Lucky7 = 3,
    PointSniper = 4,
    ComebackKid = 5,
    SnakeEyes = 6,
}

/// Display metadata attached to an achievement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Metadata {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

const METADATA: [Metadata; 7] = [
    Metadata {
        id: "FIRST_BLOOD",
        name: "First Blood",
        description: "Win your first roll",
        icon: "\u{1FA78}",
    },
    Metadata {
        id: "HOT_STREAK",
        name: "Hot Streak",
        description: "Win 5 in a row",
        icon: "\u{1F525}",
    },
    Metadata {
        id: "HIGH_ROLLER",
        name: "High Roller",
        description: "Reach $500 bankroll",
        icon: "\u{1F4B0}",
    },
    Metadata {
        id: "LUCKY_7",
        name: "Lucky 7",
        description: "Win on natural 7 three times",
        icon: "\u{1F3B0}",
    },
    Metadata {
        id: "POINT_SNIPER",
        name: "Point Sniper",
        description: "Hit the point on the very next roll",
        icon: "\u{1F3AF}",
    },
    Metadata {
        id: "COMEBACK_KID",
        name: "Comeback Kid",
        description: "Recover from below $20 to above $200",
        icon: "\u{1F4AA}",
    },
    Metadata {
        id: "SNAKE_EYES",
        name: "Snake Eyes",
        description: "Roll snake eyes (1+1)",
        icon: "\u{1F40D}",
    },
];

impl Achievement {
    /// Every achievement in declaration order.
    pub const ALL: [Achievement; 7] = [
        Achievement::FirstBlood,
        Achievement::HotStreak,
        Achievement::HighRoller,
        Achievement::Lucky7,
        Achievement::PointSniper,
        Achievement::ComebackKid,
        Achievement::SnakeEyes,
    ];

    fn metadata(&self) -> &'static Metadata {
        &METADATA[*self as usize]
    }

    /// Stable identifier used when persisting achievements (e.g. `"LUCKY_7"`).
    pub fn id(&self) -> &'static str {
        self.metadata().id
    }

    pub fn name(&self) -> &'static str {
        self.metadata().name
    }

    pub fn description(&self) -> &'static str {
        self.metadata().description
    }

    pub fn icon(&self) -> &'static str {
        self.metadata().icon
    }

    pub fn badge(&self) -> AchievementBadge {
        AchievementBadge {
            id: self.id().to_string(),
            name: self.name().to_string(),
            description: self.description().to_string(),
            icon: self.icon().to_string(),
        }
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, ThisError, PartialEq, Eq)]
#[error("unknown achievement: {0}")]
pub struct UnknownAchievement(pub String);

impl FromStr for Achievement {
    type Err = UnknownAchievement;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Achievement::ALL
            .into_iter()
            .find(|achievement| achievement.id() == s)
            .ok_or_else(|| UnknownAchievement(s.to_string()))
    }
}

impl Write for Achievement {
    fn write(&self, writer: &mut impl BufMut) {
        (*self as u8).write(writer);
    }
}

impl Read for Achievement {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let value = u8::read(reader)?;
        Achievement::ALL
            .get(value as usize)
            .copied()
            .ok_or(Error::InvalidEnum(value))
    }
}

impl FixedSize for Achievement {
    const SIZE: usize = 1;
}

/// Render-ready view of an unlocked achievement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AchievementBadge {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
}

/// Unlocked achievements in unlock order, without duplicates.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AchievementSet(Vec<Achievement>);

impl AchievementSet {
    /// Adds `achievement` unless it is already unlocked. Returns whether it was new.
    pub fn insert(&mut self, achievement: Achievement) -> bool {
        if self.contains(achievement) {
            return false;
        }
        self.0.push(achievement);
        true
    }

    pub fn contains(&self, achievement: Achievement) -> bool {
        self.0.contains(&achievement)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.0.iter()
    }

    /// Comma-joined identifiers, the format stored alongside leaderboard scores.
    pub fn to_ids(&self) -> String {
        self.0
            .iter()
            .map(Achievement::id)
            .collect::<Vec<_>>()
            .join(",")
    }

    /// Parses a comma-joined identifier list produced by [AchievementSet::to_ids].
    pub fn parse_ids(ids: &str) -> Result<Self, UnknownAchievement> {
        let mut set = AchievementSet::default();
        for id in ids.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            set.insert(id.parse()?);
        }
        Ok(set)
    }
}

impl<'a> IntoIterator for &'a AchievementSet {
    type Item = &'a Achievement;
    type IntoIter = std::slice::Iter<'a, Achievement>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Write for AchievementSet {
    fn write(&self, writer: &mut impl BufMut) {
        self.0.write(writer);
    }
}

impl Read for AchievementSet {
    type Cfg = ();

    fn read_cfg(reader: &mut impl Buf, _: &Self::Cfg) -> Result<Self, Error> {
        let achievements = Vec::<Achievement>::read_range(reader, 0..=Achievement::ALL.len())?;
        let mut set = AchievementSet::default();
        for achievement in achievements {
            if !set.insert(achievement) {
                return Err(Error::Invalid("AchievementSet", "duplicate achievement"));
            }
        }
        Ok(set)
    }
}

impl EncodeSize for AchievementSet {
    fn encode_size(&self) -> usize {
        self.0.encode_size()
    }
}
