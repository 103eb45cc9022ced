//! Content loaders for reading game data from files.
//!
//! Loaders convert RON files into the same plain data structures the
//! builtin catalogs produce, so a deployment can override any catalog
//! without recompiling.

pub mod bosses;
pub mod quests;
pub mod titles;

pub use bosses::BossCatalogLoader;
pub use quests::QuestTemplateLoader;
pub use titles::TitleLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
