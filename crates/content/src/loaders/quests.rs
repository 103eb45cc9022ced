//! Quest template pool loader.

use std::path::Path;

use nacho_engine::QuestTemplate;

use crate::loaders::{read_file, LoadResult};

/// Loader for the daily-quest template pool from RON files.
pub struct QuestTemplateLoader;

impl QuestTemplateLoader {
    /// Load a template pool from a RON file.
    ///
    /// Rejects pools with duplicate template ids; duplicate *rendered
    /// titles* are legal here and handled by the generator's batch dedup.
    pub fn load(path: &Path) -> LoadResult<Vec<QuestTemplate>> {
        let content = read_file(path)?;
        let templates: Vec<QuestTemplate> = ron::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quest template RON: {}", e))?;

        let mut ids: Vec<&str> = templates.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        for pair in ids.windows(2) {
            if pair[0] == pair[1] {
                return Err(anyhow::anyhow!(
                    "duplicate quest template id '{}' in {}",
                    pair[0],
                    path.display()
                ));
            }
        }
        Ok(templates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nacho_engine::ConditionKind;
    use std::io::Write;

    const POOL: &str = r#"[
        (
            id: "missions",
            kind: CompleteMissions,
            target: (base: 2.0, per_level: 0.05, min: 2, max: 8),
            quest_points: (base: 10.0, per_level: 1.0, min: 10, max: 120),
            shards: (2, 6),
            stat_reward: None,
            title: "Complete {target} missions",
            description: "Finish {target} missions today.",
        ),
    ]"#;

    #[test]
    fn loads_templates_from_ron() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{POOL}").unwrap();
        let pool = QuestTemplateLoader::load(file.path()).unwrap();
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].kind, ConditionKind::CompleteMissions);
        assert_eq!(pool[0].target.eval(40), 4);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let entry = r#"(
            id: "missions",
            kind: CompleteMissions,
            target: (base: 2.0, per_level: 0.05, min: 2, max: 8),
            quest_points: (base: 10.0, per_level: 1.0, min: 10, max: 120),
            shards: (2, 6),
            stat_reward: None,
            title: "Complete {target} missions",
            description: "Finish {target} missions today.",
        )"#;
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[{entry}, {entry}]").unwrap();
        let err = QuestTemplateLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("duplicate quest template id"));
    }
}
