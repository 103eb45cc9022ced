//! Common error infrastructure for the engine.
//!
//! The engine is designed to be total wherever plausible: unknown lookups
//! fall back to zero contribution, out-of-range indices clamp or cycle, and
//! formula outputs are clamped to explicit bounds. The error types that do
//! exist cover the one legitimate failure class: structurally malformed
//! input that would otherwise propagate garbage into player-facing numbers.
//!
//! Domain-specific errors (e.g. [`crate::power::PowerError`],
//! [`crate::dungeon::DungeonError`]) are defined in their respective modules
//! alongside the operations they validate.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: floor number zero, negative base attribute
    Validation,

    /// Fatal error - stored state corrupted, cannot continue.
    ///
    /// Examples: attribute values that cannot have come from normal play
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Trait implemented by every engine error type.
///
/// Callers that persist player-facing numbers use the severity to decide
/// between rejecting one request and halting the write path entirely.
pub trait EngineError: core::error::Error {
    /// Severity classification for this error.
    fn severity(&self) -> ErrorSeverity;
}
