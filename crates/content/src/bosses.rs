//! Boss and dungeon-ladder content.

use nacho_engine::{
    Attribute, BossCatalog, Element, ElementTable, FloorCatalog, ShadowBonus, ShadowData,
    ShadowRank,
};

/// The shipped floor catalog: zone names per tier, the boss name cycle and
/// the authored extractable shadows.
///
/// Only the first few bosses carry authored shadows; deeper bosses stay
/// extractable with nothing attached until more are authored.
pub fn builtin_floor_catalog() -> FloorCatalog {
    FloorCatalog {
        zone_names: vec![
            "Goblin Den".into(),
            "Wolf Forest".into(),
            "Frost Cavern".into(),
            "Storm Spire".into(),
            "Ember Wastes".into(),
            "Sunken Temple".into(),
            "Obsidian Keep".into(),
            "Monarch's Threshold".into(),
        ],
        boss_names: vec![
            "Razor Fang".into(),
            "Igris the Red".into(),
            "Frost Warden".into(),
            "Baruka".into(),
            "Cinder Queen".into(),
            "Tide Caller".into(),
            "Iron Colossus".into(),
            "Veilbreaker".into(),
        ],
        boss_shadows: vec![
            ShadowData {
                name: "Fang".into(),
                rank: ShadowRank::E,
                bonus: ShadowBonus {
                    stat: Attribute::Agility,
                    value: 2,
                },
            },
            ShadowData {
                name: "Igris".into(),
                rank: ShadowRank::C,
                bonus: ShadowBonus {
                    stat: Attribute::Strength,
                    value: 4,
                },
            },
            ShadowData {
                name: "Warden".into(),
                rank: ShadowRank::B,
                bonus: ShadowBonus {
                    stat: Attribute::Intelligence,
                    value: 5,
                },
            },
            ShadowData {
                name: "Baruka".into(),
                rank: ShadowRank::A,
                bonus: ShadowBonus {
                    stat: Attribute::Agility,
                    value: 7,
                },
            },
        ],
    }
}

/// The shipped boss generation content: id keywords, per-element move
/// lists and the universal finisher.
pub fn builtin_boss_catalog() -> BossCatalog {
    BossCatalog {
        keywords: vec![
            ("ember".into(), Element::Fire),
            ("cinder".into(), Element::Fire),
            ("frost".into(), Element::Ice),
            ("ice".into(), Element::Ice),
            ("storm".into(), Element::Lightning),
            ("spire".into(), Element::Lightning),
            ("den".into(), Element::Earth),
            ("keep".into(), Element::Earth),
            ("forest".into(), Element::Wind),
            ("sunken".into(), Element::Ice),
            ("threshold".into(), Element::Shadow),
            ("monarch".into(), Element::Shadow),
        ],
        moves: ElementTable {
            fire: vec![
                "Flame Burst".into(),
                "Magma Wave".into(),
                "Cinder Storm".into(),
            ],
            ice: vec![
                "Frost Nova".into(),
                "Glacial Spike".into(),
                "Hailbind".into(),
            ],
            lightning: vec![
                "Thunder Lance".into(),
                "Static Field".into(),
                "Storm Call".into(),
            ],
            earth: vec![
                "Stone Crush".into(),
                "Seismic Slam".into(),
                "Granite Shell".into(),
            ],
            wind: vec![
                "Gale Slash".into(),
                "Cyclone Step".into(),
                "Razor Draft".into(),
            ],
            shadow: vec![
                "Umbral Grasp".into(),
                "Night Veil".into(),
                "Soul Rend".into(),
            ],
        },
        finisher: "Monarch's Wrath".into(),
    }
}
