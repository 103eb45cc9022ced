//! Base attributes - the single source of truth for a character.
//!
//! The six attributes are the only stat values that are permanently stored.
//! Everything else (effective stats, power) is derived from them on demand
//! and never written back.

/// The six base attributes that define a character.
///
/// - **Strength**: physical training volume
/// - **Vitality**: recovery, sleep quality
/// - **Agility**: cardio, mobility work
/// - **Intelligence**: study and deep-work habits
/// - **Fortune**: consistency bonuses, lucky finds
/// - **Metabolism**: nutrition habits
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Attribute {
    Strength,
    Vitality,
    Agility,
    Intelligence,
    Fortune,
    Metabolism,
}

impl Attribute {
    /// Total number of attributes.
    pub const COUNT: usize = 6;

    /// Returns all attributes in canonical order.
    pub const fn all() -> [Attribute; Self::COUNT] {
        [
            Attribute::Strength,
            Attribute::Vitality,
            Attribute::Agility,
            Attribute::Intelligence,
            Attribute::Fortune,
            Attribute::Metabolism,
        ]
    }
}

/// A full block of the six base attribute values.
///
/// Stored in [`crate::sheet::CharacterSheet`] and reused for boss stat
/// distributions, which are shaped like a character sheet on purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeBlock {
    pub strength: i32,
    pub vitality: i32,
    pub agility: i32,
    pub intelligence: i32,
    pub fortune: i32,
    pub metabolism: i32,
}

impl AttributeBlock {
    /// Create a block with specified values.
    pub const fn new(
        strength: i32,
        vitality: i32,
        agility: i32,
        intelligence: i32,
        fortune: i32,
        metabolism: i32,
    ) -> Self {
        Self {
            strength,
            vitality,
            agility,
            intelligence,
            fortune,
            metabolism,
        }
    }

    /// Create a block with every attribute set to the same value.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value, value, value)
    }

    /// Read one attribute.
    #[inline]
    pub const fn get(&self, attribute: Attribute) -> i32 {
        match attribute {
            Attribute::Strength => self.strength,
            Attribute::Vitality => self.vitality,
            Attribute::Agility => self.agility,
            Attribute::Intelligence => self.intelligence,
            Attribute::Fortune => self.fortune,
            Attribute::Metabolism => self.metabolism,
        }
    }

    /// Write one attribute.
    pub fn set(&mut self, attribute: Attribute, value: i32) {
        match attribute {
            Attribute::Strength => self.strength = value,
            Attribute::Vitality => self.vitality = value,
            Attribute::Agility => self.agility = value,
            Attribute::Intelligence => self.intelligence = value,
            Attribute::Fortune => self.fortune = value,
            Attribute::Metabolism => self.metabolism = value,
        }
    }

    /// Add to one attribute.
    pub fn add(&mut self, attribute: Attribute, delta: i32) {
        self.set(attribute, self.get(attribute) + delta);
    }

    /// Sum of all six values.
    pub fn total(&self) -> i64 {
        Attribute::all().iter().map(|a| self.get(*a) as i64).sum()
    }

    /// True if any attribute is negative (malformed stored state).
    pub fn has_negative(&self) -> bool {
        Attribute::all().iter().any(|a| self.get(*a) < 0)
    }
}

impl Default for AttributeBlock {
    /// Fresh hunter baseline: all attributes at 10.
    fn default() -> Self {
        Self::uniform(10)
    }
}
