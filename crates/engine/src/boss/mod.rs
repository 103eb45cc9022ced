//! Procedural boss generation.
//!
//! Where the floor generator is fully deterministic, boss encounters carry
//! bounded randomness (power variance, stat top-ups, move picks). All of it
//! flows through the [`crate::rng::RngOracle`] so a stored seed replays the
//! exact same encounter.
//!
//! Boss power is intrinsic to the dungeon: it scales with the dungeon's
//! power budget and difficulty tier, never with the player, which keeps the
//! ladder resistant to power-creep exploits.

pub mod element;
pub mod generator;
pub mod shadow;

pub use element::{Element, ElementTable};
pub use generator::{Boss, BossCatalog, BossConfig, BossGenerator, DungeonContext, ElementBias};
pub use shadow::{OwnedShadow, ShadowBonus, ShadowData, ShadowRank};
