//! Total power aggregation.
//!
//! Power is the single scalar combat-capability rating shown to the player.
//! It is the sum of eight independently weighted components, each floored at
//! its own boundary so the displayed breakdown always reconciles with the
//! displayed total.

pub mod aggregator;
pub mod config;

pub use aggregator::{EquippedItem, OwnedFrame, OwnedTitle, PowerAggregator, PowerInput};
pub use config::{PowerConfig, ShadowRankTable};

use crate::error::{EngineError, ErrorSeverity};

/// Attributable breakdown of total power.
///
/// Ephemeral: recomputed on every display, never persisted. The invariant
/// `total == sum of the eight components` holds for every value this crate
/// produces, and the test suite pins it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerBreakdown {
    pub base_stats: i64,
    pub level: i64,
    pub titles: i64,
    pub frames: i64,
    pub shadows: i64,
    pub equipment: i64,
    pub passives: i64,
    pub job_class: i64,
    pub total: i64,
}

impl PowerBreakdown {
    /// The eight components in display order.
    pub const fn components(&self) -> [i64; 8] {
        [
            self.base_stats,
            self.level,
            self.titles,
            self.frames,
            self.shadows,
            self.equipment,
            self.passives,
            self.job_class,
        ]
    }
}

/// Errors raised on structurally malformed aggregator input.
///
/// A corrupted power value would propagate into displayed and stored
/// player-facing numbers, so these fail fast instead of producing garbage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PowerError {
    /// A stored base attribute is negative.
    #[error("base attribute '{attribute}' is negative ({value})")]
    NegativeAttribute { attribute: String, value: i32 },

    /// An equipped item carries a negative base stat.
    #[error("equipped item '{item_id}' has a negative base stat ({value})")]
    NegativeItemStat { item_id: String, value: i32 },
}

impl EngineError for PowerError {
    fn severity(&self) -> ErrorSeverity {
        // Both variants mean the stored sheet or inventory is corrupt.
        ErrorSeverity::Fatal
    }
}
