//! Rarity - the ordered quality scale shared by titles, frames, equipment
//! and dungeon drops.

/// Ordered quality enum. Ordering is part of the contract: higher rarity
/// compares greater, and tables indexed by rarity walk this order.
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
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Rarity {
    #[default]
    Common,
    Rare,
    Epic,
    Legendary,
    Mythic,
    Godlike,
}

impl Rarity {
    /// Total number of rarity grades.
    pub const COUNT: usize = 6;

    /// Returns all rarities from lowest to highest.
    pub const fn all() -> [Rarity; Self::COUNT] {
        [
            Rarity::Common,
            Rarity::Rare,
            Rarity::Epic,
            Rarity::Legendary,
            Rarity::Mythic,
            Rarity::Godlike,
        ]
    }

    /// Zero-based position on the quality scale.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A per-rarity value table.
///
/// Used for title power, frame power and equipment multipliers; each
/// component of the power aggregator owns its own table instance so tuning
/// one surface never leaks into another.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RarityTable<T: Copy> {
    pub common: T,
    pub rare: T,
    pub epic: T,
    pub legendary: T,
    pub mythic: T,
    pub godlike: T,
}

impl<T: Copy> RarityTable<T> {
    /// Look up the value for a rarity.
    #[inline]
    pub const fn get(&self, rarity: Rarity) -> T {
        match rarity {
            Rarity::Common => self.common,
            Rarity::Rare => self.rare,
            Rarity::Epic => self.epic,
            Rarity::Legendary => self.legendary,
            Rarity::Mythic => self.mythic,
            Rarity::Godlike => self.godlike,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rarity_order_is_ascending() {
        let all = Rarity::all();
        for pair in all.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn table_lookup_matches_field() {
        let table = RarityTable {
            common: 1,
            rare: 2,
            epic: 3,
            legendary: 4,
            mythic: 5,
            godlike: 6,
        };
        for (i, rarity) in Rarity::all().into_iter().enumerate() {
            assert_eq!(table.get(rarity), (i + 1) as i32);
        }
    }
}
