//! Passive skill definitions.

use nacho_engine::{Attribute, PassiveDef};

/// The shipped passive skill set: one per attribute, matching the shop's
/// upgrade tracks.
pub fn builtin_passives() -> Vec<PassiveDef> {
    let def = |id: &str, stat: Attribute, bonus_per_level: f64, max_level: u32| PassiveDef {
        id: id.into(),
        stat,
        bonus_per_level,
        max_level,
    };
    vec![
        def("iron_body", Attribute::Strength, 0.05, 10),
        def("deep_sleep", Attribute::Vitality, 0.05, 10),
        def("light_feet", Attribute::Agility, 0.05, 10),
        def("keen_mind", Attribute::Intelligence, 0.05, 10),
        def("lucky_find", Attribute::Fortune, 0.04, 10),
        def("clean_fuel", Attribute::Metabolism, 0.04, 10),
    ]
}
