//! Dungeon difficulty tiers.

/// Difficulty bracket, E through SSS.
///
/// Each tier spans a fixed range of floors; floors beyond the last authored
/// tier stay at [`Tier::Sss`] rather than erroring - an explicit overflow
/// policy so the ladder has no upper bound.
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
pub enum Tier {
    #[default]
    E,
    D,
    C,
    B,
    A,
    S,
    #[strum(serialize = "SS")]
    Ss,
    #[strum(serialize = "SSS")]
    Sss,
}

impl Tier {
    /// Total number of tiers.
    pub const COUNT: usize = 8;

    /// Returns all tiers from easiest to hardest.
    pub const fn all() -> [Tier; Self::COUNT] {
        [
            Tier::E,
            Tier::D,
            Tier::C,
            Tier::B,
            Tier::A,
            Tier::S,
            Tier::Ss,
            Tier::Sss,
        ]
    }

    /// Zero-based position on the ladder.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Tier for a 1-based floor number given a tier span in floors.
    ///
    /// Clamps at the highest tier beyond the authored range.
    pub fn for_floor(floor: u32, floors_per_tier: u32) -> Tier {
        let all = Self::all();
        let idx = ((floor.saturating_sub(1)) / floors_per_tier.max(1)) as usize;
        all[idx.min(Self::COUNT - 1)]
    }
}
