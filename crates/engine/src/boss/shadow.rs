//! Shadow companions - extractable units obtained from defeated bosses.

use crate::attribute::Attribute;

/// Shadow rank ladder, lowest to highest.
///
/// Rank is decided by the difficulty tier of the dungeon the boss was
/// extracted from, never by player state.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum ShadowRank {
    #[default]
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

impl ShadowRank {
    /// Total number of ranks.
    pub const COUNT: usize = 8;

    /// Returns all ranks from lowest to highest.
    pub const fn all() -> [ShadowRank; Self::COUNT] {
        [
            ShadowRank::E,
            ShadowRank::D,
            ShadowRank::C,
            ShadowRank::B,
            ShadowRank::A,
            ShadowRank::S,
            ShadowRank::SS,
            ShadowRank::SSS,
        ]
    }

    /// Zero-based position on the ladder.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// The flat stat bonus a shadow grants its owner while deployed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowBonus {
    pub stat: Attribute,
    pub value: i32,
}

/// A candidate shadow companion attached to an extractable boss.
///
/// Produced by generation; becomes an owned shadow only when the player
/// wins the encounter and performs the extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowData {
    pub name: String,
    pub rank: ShadowRank,
    pub bonus: ShadowBonus,
}

/// A shadow in the player's army, as the power aggregator sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedShadow {
    pub name: String,
    pub rank: ShadowRank,
}
