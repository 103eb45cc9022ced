//! The persistent character sheet.
//!
//! [`CharacterSheet`] is the stored representation of the player: base
//! attributes, level and experience, streak, cosmetic unlocks and the job
//! class progression. It is mutated by mission completion, leveling, shop
//! purchases and equipment changes, and never destroyed except on a full
//! account reset.

use std::collections::{BTreeMap, BTreeSet};

use crate::attribute::AttributeBlock;

/// Experience required to advance from `level` to `level + 1`.
///
/// Linear ramp; the carry-over in [`CharacterSheet::gain_xp`] means a large
/// reward can clear several levels in one call.
pub const fn xp_for_level(level: u32) -> i64 {
    (level as i64) * 100
}

/// Attribute points granted on each level-up.
pub const POINTS_PER_LEVEL: u32 = 3;

/// The ordered job class progression.
///
/// Classes are strictly ordered and cumulative: unlocking a class implies
/// every class before it. Only the highest unlocked class is stored.
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
pub enum JobClass {
    #[default]
    Novice,
    Apprentice,
    Adept,
    Fighter,
    Elite,
    Knight,
    Captain,
    Commander,
    Sovereign,
    Monarch,
}

impl JobClass {
    /// Total number of job classes.
    pub const COUNT: usize = 10;

    /// Returns all classes in progression order.
    pub const fn all() -> [JobClass; Self::COUNT] {
        [
            JobClass::Novice,
            JobClass::Apprentice,
            JobClass::Adept,
            JobClass::Fighter,
            JobClass::Elite,
            JobClass::Knight,
            JobClass::Captain,
            JobClass::Commander,
            JobClass::Sovereign,
            JobClass::Monarch,
        ]
    }

    /// Zero-based position in the progression.
    #[inline]
    pub const fn index(self) -> u32 {
        self as u32
    }

    /// The next class in the progression, if any.
    pub const fn next(self) -> Option<JobClass> {
        let all = Self::all();
        let idx = self.index() as usize;
        if idx + 1 < Self::COUNT {
            Some(all[idx + 1])
        } else {
            None
        }
    }
}

/// Outcome of an experience gain: how far the sheet advanced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelUp {
    /// Number of levels cleared by this gain (0 if none).
    pub levels_gained: u32,
    /// Attribute points awarded for those levels.
    pub attribute_points: u32,
}

impl LevelUp {
    /// True if at least one level was gained.
    pub const fn leveled(&self) -> bool {
        self.levels_gained > 0
    }
}

/// The player's persistent character sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterSheet {
    /// Six base attributes (single source of truth, see [`AttributeBlock`]).
    pub attributes: AttributeBlock,
    pub level: u32,
    pub xp_current: i64,
    pub xp_for_next_level: i64,
    /// Consecutive active days.
    pub streak: u32,
    pub equipped_title_id: Option<String>,
    /// Unlocked titles; set semantics keep the uniqueness invariant.
    pub unlocked_title_ids: BTreeSet<String>,
    /// Selected avatar frame; `"default"` carries no power.
    pub selected_frame_id: String,
    pub unlocked_frame_ids: BTreeSet<String>,
    pub job_class: JobClass,
    /// Passive skill id -> invested level. Levels above a passive's max are
    /// clamped at read time, not here.
    pub passive_levels: BTreeMap<String, u32>,
}

impl CharacterSheet {
    /// A fresh level-1 sheet with baseline attributes.
    pub fn new() -> Self {
        Self {
            attributes: AttributeBlock::default(),
            level: 1,
            xp_current: 0,
            xp_for_next_level: xp_for_level(1),
            streak: 0,
            equipped_title_id: None,
            unlocked_title_ids: BTreeSet::new(),
            selected_frame_id: "default".to_owned(),
            unlocked_frame_ids: BTreeSet::new(),
            job_class: JobClass::default(),
            passive_levels: BTreeMap::new(),
        }
    }

    /// Invested level for a passive skill; unknown ids read as 0.
    pub fn passive_level(&self, passive_id: &str) -> u32 {
        self.passive_levels.get(passive_id).copied().unwrap_or(0)
    }

    /// Apply an experience gain, advancing levels while the threshold is met.
    ///
    /// Excess experience carries over into the next level. The threshold is
    /// recomputed per level from [`xp_for_level`].
    pub fn gain_xp(&mut self, amount: i64) -> LevelUp {
        if amount <= 0 {
            return LevelUp::default();
        }
        self.xp_current += amount;
        let mut levels_gained = 0u32;
        while self.xp_current >= self.xp_for_next_level {
            self.xp_current -= self.xp_for_next_level;
            self.level += 1;
            levels_gained += 1;
            self.xp_for_next_level = xp_for_level(self.level);
        }
        if levels_gained > 0 {
            tracing::debug!(level = self.level, levels_gained, "level up");
        }
        LevelUp {
            levels_gained,
            attribute_points: levels_gained * POINTS_PER_LEVEL,
        }
    }

    /// Unlock a title. Returns false if it was already unlocked.
    pub fn unlock_title(&mut self, title_id: impl Into<String>) -> bool {
        self.unlocked_title_ids.insert(title_id.into())
    }

    /// Advance to the next job class, if not already at the last.
    pub fn advance_job_class(&mut self) -> Option<JobClass> {
        let next = self.job_class.next()?;
        self.job_class = next;
        Some(next)
    }
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self::new()
    }
}
