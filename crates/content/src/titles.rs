//! The title catalog.

use nacho_engine::Rarity;

/// An authored title definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TitleDef {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
}

impl TitleDef {
    fn new(id: &str, name: &str, rarity: Rarity) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            rarity,
        }
    }
}

/// The shipped title catalog.
///
/// Ids are stable: sheets reference them and the uniqueness invariant on
/// unlocked sets depends on them never being reused.
pub fn builtin_titles() -> Vec<TitleDef> {
    vec![
        TitleDef::new("early_riser", "Early Riser", Rarity::Common),
        TitleDef::new("first_steps", "First Steps", Rarity::Common),
        TitleDef::new("iron_will", "Iron Will", Rarity::Rare),
        TitleDef::new("wolf_slayer", "Wolf Slayer", Rarity::Rare),
        TitleDef::new("dungeon_diver", "Dungeon Diver", Rarity::Epic),
        TitleDef::new("streak_keeper", "Streak Keeper", Rarity::Epic),
        TitleDef::new("gate_breaker", "Gate Breaker", Rarity::Legendary),
        TitleDef::new("sovereign_of_dawn", "Sovereign of Dawn", Rarity::Mythic),
        TitleDef::new("shadow_monarch", "Shadow Monarch", Rarity::Godlike),
    ]
}
