//! Daily quest data types.

use chrono::{DateTime, Utc};

use crate::attribute::Attribute;

/// What a quest measures.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ConditionKind {
    /// Missions completed today.
    CompleteMissions,
    /// Dungeons cleared today.
    ClearDungeons,
    /// An effective attribute reaching a threshold.
    ReachStat,
    /// The day's health score.
    HealthScore,
    /// Consecutive-day streak.
    MaintainStreak,
    /// Completed only by an explicit user action; the tracker never
    /// advances it.
    ManualVerification,
}

/// A quest's measurable condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestCondition {
    pub kind: ConditionKind,
    pub target: i64,
    pub current: i64,
    /// Which attribute a `ReachStat` quest watches.
    pub stat: Option<Attribute>,
}

/// A flat attribute bonus paid out with a quest reward.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatReward {
    pub stat: Attribute,
    pub amount: i32,
}

/// What claiming the quest pays out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestReward {
    pub quest_points: i64,
    pub shards: u32,
    pub stat_bonus: Option<StatReward>,
}

/// One daily objective.
///
/// Lifecycle: created in a daily batch, advanced by the tracker, claimed at
/// most once, discarded at the next day boundary.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyQuest {
    pub id: String,
    pub title: String,
    pub description: String,
    pub condition: QuestCondition,
    pub reward: QuestReward,
    pub completed: bool,
    pub claimed_at: Option<DateTime<Utc>>,
}
