//! Title and frame catalog loaders.

use std::path::Path;

use crate::frames::FrameDef;
use crate::loaders::{read_file, LoadResult};
use crate::titles::TitleDef;

/// Loader for cosmetic catalogs from RON files.
pub struct TitleLoader;

impl TitleLoader {
    /// Load a title catalog from a RON file.
    pub fn load(path: &Path) -> LoadResult<Vec<TitleDef>> {
        let content = read_file(path)?;
        let titles: Vec<TitleDef> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse title RON: {}", e))?;
        Ok(titles)
    }

    /// Load a frame catalog from a RON file.
    pub fn load_frames(path: &Path) -> LoadResult<Vec<FrameDef>> {
        let content = read_file(path)?;
        let frames: Vec<FrameDef> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse frame RON: {}", e))?;
        Ok(frames)
    }
}
