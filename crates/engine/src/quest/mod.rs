//! Daily quests.
//!
//! A fixed-size batch of objectives is generated each day from a weighted
//! template pool, tracked against context snapshots as the day progresses,
//! and discarded wholesale at the next day boundary. The engine never
//! detects the boundary itself - see [`crate::schedule::is_new_day`].

pub mod generator;
pub mod template;
pub mod tracker;
pub mod types;

pub use generator::{QuestConfig, QuestGenerator, MAX_DAILY_QUESTS};
pub use template::{QuestTemplate, ScaledRange};
pub use tracker::{advance, claim_reward, QuestContext};
pub use types::{ConditionKind, DailyQuest, QuestCondition, QuestReward, StatReward};

use crate::error::{EngineError, ErrorSeverity};

/// Errors raised at the reward-claim boundary.
///
/// The tracker itself never re-checks a completed quest; the idempotence
/// guard lives here, where the caller pays out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestError {
    /// The quest has not been completed yet.
    #[error("quest '{0}' is not completed")]
    NotCompleted(String),

    /// The reward was already paid out.
    #[error("quest '{0}' was already claimed")]
    AlreadyClaimed(String),
}

impl EngineError for QuestError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }
}
