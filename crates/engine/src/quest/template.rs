//! Quest templates - the authored pool daily quests are drawn from.

use crate::attribute::Attribute;
use crate::quest::types::{ConditionKind, StatReward};

/// A level-scaled formula with hard bounds.
///
/// `eval(level) = clamp(floor(base + level × per_level), min, max)`. The
/// clamps keep extreme levels from producing degenerate zero or runaway
/// values.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScaledRange {
    pub base: f64,
    pub per_level: f64,
    pub min: i64,
    pub max: i64,
}

impl ScaledRange {
    /// A constant value regardless of level.
    pub const fn flat(value: i64) -> Self {
        Self {
            base: value as f64,
            per_level: 0.0,
            min: value,
            max: value,
        }
    }

    /// Evaluate at a player level.
    pub fn eval(&self, level: u32) -> i64 {
        let raw = (self.base + self.per_level * f64::from(level)).floor() as i64;
        raw.clamp(self.min, self.max)
    }
}

/// An authored daily-quest template.
///
/// The pool is read-only input to the generator: rendering a template never
/// mutates it, so generation can run indefinitely.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestTemplate {
    pub id: String,
    pub kind: ConditionKind,
    /// Target threshold formula. Ignored for manual verification, which is
    /// always binary (target 1).
    pub target: ScaledRange,
    /// Quest point reward formula.
    pub quest_points: ScaledRange,
    /// Inclusive randomized range for the shard reward.
    pub shards: (u32, u32),
    /// Optional flat attribute payout.
    pub stat_reward: Option<StatReward>,
    /// Title with `{target}` / `{stat}` placeholders.
    pub title: String,
    /// Description with the same placeholders.
    pub description: String,
}

impl QuestTemplate {
    /// Render a format string with the computed target and optional stat.
    pub fn render(text: &str, target: i64, stat: Option<Attribute>) -> String {
        let mut out = text.replace("{target}", &target.to_string());
        if let Some(stat) = stat {
            out = out.replace("{stat}", stat.as_ref());
        }
        out
    }
}
