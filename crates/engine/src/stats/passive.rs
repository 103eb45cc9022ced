//! Passive skill definitions.

use crate::attribute::Attribute;

/// Static definition of a passive skill.
///
/// Definitions live in content; the player's invested level lives in the
/// character sheet (`passive_levels`). Pairing the two yields a percentage
/// multiplier on one attribute.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PassiveDef {
    pub id: String,
    pub stat: Attribute,
    /// Fractional bonus per invested level (0.05 = +5% per level).
    pub bonus_per_level: f64,
    pub max_level: u32,
}

impl PassiveDef {
    /// Multiplier at a given invested level.
    ///
    /// Levels beyond `max_level` are clamped; level 0 is the identity.
    pub fn multiplier(&self, level: u32) -> f64 {
        1.0 + f64::from(level.min(self.max_level)) * self.bonus_per_level
    }
}
