//! Boss content loaders.

use std::path::Path;

use nacho_engine::{BossCatalog, FloorCatalog};

use crate::loaders::{read_file, LoadResult};

/// Loader for boss and dungeon-ladder content from RON files.
pub struct BossCatalogLoader;

impl BossCatalogLoader {
    /// Load boss generation content (keywords, moves, finisher).
    pub fn load(path: &Path) -> LoadResult<BossCatalog> {
        let content = read_file(path)?;
        let catalog: BossCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse boss catalog RON: {}", e))?;
        Ok(catalog)
    }

    /// Load the floor catalog (zone names, boss names, shadows).
    pub fn load_floors(path: &Path) -> LoadResult<FloorCatalog> {
        let content = read_file(path)?;
        let catalog: FloorCatalog = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse floor catalog RON: {}", e))?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nacho_engine::Element;
    use std::io::Write;

    #[test]
    fn loads_boss_catalog_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                keywords: [("frost", Ice)],
                moves: (
                    fire: ["Flame Burst"],
                    ice: ["Frost Nova", "Hailbind"],
                    lightning: ["Thunder Lance"],
                    earth: ["Stone Crush"],
                    wind: ["Gale Slash"],
                    shadow: ["Umbral Grasp"],
                ),
                finisher: "Monarch's Wrath",
            )"#
        )
        .unwrap();

        let catalog = BossCatalogLoader::load(file.path()).unwrap();
        assert_eq!(catalog.keywords[0].1, Element::Ice);
        assert_eq!(catalog.moves.get(Element::Ice).len(), 2);
        assert_eq!(catalog.finisher, "Monarch's Wrath");
    }

    #[test]
    fn loads_floor_catalog_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"(
                zone_names: ["Goblin Den"],
                boss_names: ["Razor Fang"],
                boss_shadows: [
                    (name: "Fang", rank: E, bonus: (stat: Agility, value: 2)),
                ],
            )"#
        )
        .unwrap();

        let catalog = BossCatalogLoader::load_floors(file.path()).unwrap();
        assert_eq!(catalog.boss_names.len(), 1);
        assert_eq!(catalog.boss_shadows[0].bonus.value, 2);
    }
}
