//! Authored content and data-file loaders for Sistema Nacho.
//!
//! This crate houses the static game content the engine generators consume:
//! - Title and avatar-frame catalogs (rarity-graded cosmetics)
//! - Passive skill definitions
//! - The daily-quest template pool
//! - Boss content (zone names, boss names, element keywords, move lists,
//!   extractable shadows)
//!
//! Every catalog ships a `builtin_*` set and, behind the `loaders` feature,
//! a RON loader so deployments can override data without recompiling.
//! Content is plain data consumed by engine constructors and never appears
//! inside engine state.

pub mod bosses;
pub mod frames;
pub mod passives;
pub mod quests;
pub mod titles;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use bosses::{builtin_boss_catalog, builtin_floor_catalog};
pub use frames::{builtin_frames, FrameDef};
pub use passives::builtin_passives;
pub use quests::builtin_quest_templates;
pub use titles::{builtin_titles, TitleDef};

#[cfg(feature = "loaders")]
pub use loaders::{BossCatalogLoader, QuestTemplateLoader, TitleLoader};
