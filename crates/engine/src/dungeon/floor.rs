//! The floor-to-dungeon generator.

use crate::attribute::Attribute;
use crate::boss::shadow::ShadowData;
use crate::dungeon::drops::{DropCurves, DropRates};
use crate::dungeon::tier::Tier;
use crate::dungeon::DungeonError;

/// Attribute rotation for `recommended_stats`, indexed by `floor % len`.
const STAT_ROTATION: [[Attribute; 2]; 5] = [
    [Attribute::Strength, Attribute::Vitality],
    [Attribute::Agility, Attribute::Intelligence],
    [Attribute::Strength, Attribute::Fortune],
    [Attribute::Vitality, Attribute::Metabolism],
    [Attribute::Agility, Attribute::Strength],
];

/// Growth-curve and pacing constants for the dungeon ladder.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonConfig {
    /// Floors spanned by each difficulty tier.
    pub floors_per_tier: u32,
    /// Every Nth floor hosts a boss.
    pub boss_interval: u32,
    /// Power requirement at floor 1.
    pub base_power: i64,
    /// Linear growth per floor past the first.
    pub linear_coefficient: i64,
    /// Quadratic growth per floor past the first.
    pub quadratic_coefficient: i64,
    /// XP reward as a fraction of the power requirement.
    pub reward_fraction: f64,
    /// Recommended player level per floor.
    pub level_per_floor: u32,
    /// Gap between recommended and minimum entry level.
    pub min_level_gap: u32,
    /// Clear-time limit at tier E, in minutes.
    pub base_time_limit_minutes: u32,
    /// Extra minutes granted per tier above E.
    pub time_limit_per_tier: u32,
    /// Per-rarity drop curves.
    pub drop_curves: DropCurves,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            floors_per_tier: 20,
            boss_interval: 10,
            base_power: 100,
            linear_coefficient: 50,
            quadratic_coefficient: 5,
            reward_fraction: 0.2,
            level_per_floor: 2,
            min_level_gap: 5,
            base_time_limit_minutes: 30,
            time_limit_per_tier: 15,
            drop_curves: DropCurves::default(),
        }
    }
}

/// Authored names the generator cycles over.
///
/// Provided by the content crate; the generator only requires that the
/// lists it indexes into are non-empty.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorCatalog {
    /// One zone name per tier; floors past the authored range reuse the last.
    pub zone_names: Vec<String>,
    /// Boss names, cycled once the ladder outruns them.
    pub boss_names: Vec<String>,
    /// Extractable shadow definitions, aligned with boss index.
    ///
    /// Bosses beyond this list remain extractable but carry no shadow - a
    /// content-authoring gap the generator preserves rather than papering
    /// over.
    pub boss_shadows: Vec<ShadowData>,
}

/// Reward block of a generated dungeon.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonRewards {
    pub xp: i64,
    pub drop_rates: DropRates,
}

/// The deterministic boss descriptor on every 10th floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossSpec {
    pub id: String,
    pub name: String,
    pub can_extract: bool,
    pub shadow: Option<ShadowData>,
}

/// A fully specified dungeon floor.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dungeon {
    pub id: String,
    pub name: String,
    pub difficulty: Tier,
    pub recommended_level: u32,
    pub recommended_power: i64,
    pub time_limit_minutes: u32,
    pub min_level: u32,
    pub recommended_stats: Vec<Attribute>,
    pub rewards: DungeonRewards,
    pub boss: Option<BossSpec>,
}

/// Pure floor-number-to-dungeon generator.
///
/// Callable for any floor >= 1 with no upper bound; there is no persisted
/// floor table. Out-of-range lookups clamp (tiers, zones) or cycle (boss
/// names), never index out of bounds.
#[derive(Clone, Debug)]
pub struct FloorGenerator {
    config: DungeonConfig,
    catalog: FloorCatalog,
}

impl FloorGenerator {
    /// Build a generator, validating the catalog up front.
    pub fn new(config: DungeonConfig, catalog: FloorCatalog) -> Result<Self, DungeonError> {
        if catalog.zone_names.is_empty() {
            return Err(DungeonError::EmptyCatalog("zone names".into()));
        }
        if catalog.boss_names.is_empty() {
            return Err(DungeonError::EmptyCatalog("boss names".into()));
        }
        Ok(Self { config, catalog })
    }

    /// Access the active tuning.
    pub fn config(&self) -> &DungeonConfig {
        &self.config
    }

    /// Generate the dungeon for a 1-based floor number.
    pub fn generate(&self, floor: u32) -> Result<Dungeon, DungeonError> {
        if floor == 0 {
            return Err(DungeonError::InvalidFloor(0));
        }
        let cfg = &self.config;

        let difficulty = Tier::for_floor(floor, cfg.floors_per_tier);
        let recommended_power = self.recommended_power(floor);
        let xp = ((recommended_power as f64) * cfg.reward_fraction).floor() as i64;
        let recommended_level = floor * cfg.level_per_floor;
        let min_level = recommended_level.saturating_sub(cfg.min_level_gap).max(1);

        let zone_idx = (difficulty.index()).min(self.catalog.zone_names.len() - 1);
        let zone = &self.catalog.zone_names[zone_idx];

        let rotation = &STAT_ROTATION[(floor as usize) % STAT_ROTATION.len()];

        Ok(Dungeon {
            id: format!("dungeon_floor_{floor}"),
            name: format!("{zone} - Floor {floor}"),
            difficulty,
            recommended_level,
            recommended_power,
            time_limit_minutes: cfg.base_time_limit_minutes
                + cfg.time_limit_per_tier * difficulty.index() as u32,
            min_level,
            recommended_stats: rotation.to_vec(),
            rewards: DungeonRewards {
                xp,
                drop_rates: cfg.drop_curves.rates_at(floor),
            },
            boss: self.boss_for(floor),
        })
    }

    /// `base + (floor-1)·linear + (floor-1)²·quadratic`.
    ///
    /// Monotonically non-decreasing in floor as long as both coefficients
    /// stay non-negative; the integration tests sweep this.
    fn recommended_power(&self, floor: u32) -> i64 {
        let n = i64::from(floor - 1);
        self.config.base_power
            + n * self.config.linear_coefficient
            + n * n * self.config.quadratic_coefficient
    }

    /// Boss descriptor on every `boss_interval`th floor.
    fn boss_for(&self, floor: u32) -> Option<BossSpec> {
        if floor % self.config.boss_interval != 0 {
            return None;
        }
        let index = (floor / self.config.boss_interval - 1) as usize;
        let name = self.catalog.boss_names[index % self.catalog.boss_names.len()].clone();
        // Shadow authoring stops where the list ends; the boss stays
        // extractable with nothing attached.
        let shadow = self.catalog.boss_shadows.get(index).cloned();
        Some(BossSpec {
            id: format!("boss_{floor}"),
            name,
            can_extract: true,
            shadow,
        })
    }
}
