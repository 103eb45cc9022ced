//! The avatar frame catalog.

use nacho_engine::Rarity;

/// An authored frame definition.
///
/// The `"default"` frame is part of the catalog for display purposes but
/// carries no power; the aggregator excludes it by id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameDef {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
}

impl FrameDef {
    fn new(id: &str, name: &str, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
        }
    }
}

/// The shipped frame catalog.
pub fn builtin_frames() -> Vec<FrameDef> {
    vec![
        FrameDef::new("default", "Default", Rarity::Common),
        FrameDef::new("bronze_laurel", "Bronze Laurel", Rarity::Common),
        FrameDef::new("silver_thorn", "Silver Thorn", Rarity::Rare),
        FrameDef::new("gold_gate", "Gold Gate", Rarity::Epic),
        FrameDef::new("abyssal_ring", "Abyssal Ring", Rarity::Legendary),
        FrameDef::new("monarch_sigil", "Monarch Sigil", Rarity::Mythic),
        FrameDef::new("world_tree", "World Tree", Rarity::Godlike),
    ]
}
