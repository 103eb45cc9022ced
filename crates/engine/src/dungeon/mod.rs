//! Procedural dungeon floors.
//!
//! A dungeon is never authored or persisted: every floor definition is a
//! pure function of its floor number, regenerated on demand. The generator
//! is fully deterministic - the same floor always yields the same dungeon in
//! every field.

pub mod drops;
pub mod floor;
pub mod tier;

pub use drops::{DropCurve, DropCurves, DropRates};
pub use floor::{BossSpec, Dungeon, DungeonConfig, DungeonRewards, FloorCatalog, FloorGenerator};
pub use tier::Tier;

use crate::error::{EngineError, ErrorSeverity};

/// Errors raised by the floor generator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DungeonError {
    /// Floors are numbered from 1.
    #[error("floor number must be >= 1 (got {0})")]
    InvalidFloor(u32),

    /// The generator was built without the catalog entries it cycles over.
    #[error("floor catalog is missing {0}")]
    EmptyCatalog(String),
}

impl EngineError for DungeonError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            DungeonError::InvalidFloor(_) => ErrorSeverity::Validation,
            DungeonError::EmptyCatalog(_) => ErrorSeverity::Fatal,
        }
    }
}
