//! The boss combatant builder.

use crate::attribute::{Attribute, AttributeBlock};
use crate::boss::element::{Element, ElementTable};
use crate::boss::shadow::{ShadowBonus, ShadowData, ShadowRank};
use crate::dungeon::tier::Tier;
use crate::rng::{compute_seed, RngOracle};
use crate::sheet::CharacterSheet;

// Seed streams for the independent rolls inside one generation.
const STREAM_ELEMENT: u64 = 1;
const STREAM_VARIANCE: u64 = 2;
const STREAM_LEVEL: u64 = 3;
const STREAM_TOPUP: u64 = 4;
const STREAM_MOVES: u64 = 5;
const STREAM_EXTRACT: u64 = 6;

/// The slice of a dungeon a boss encounter is built from.
///
/// Derived from a generated [`crate::dungeon::Dungeon`]; carrying only this
/// slice makes it explicit that nothing about the player feeds the boss's
/// power.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DungeonContext {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    /// The dungeon's recommended power - the boss's power budget.
    pub power_budget: i64,
    pub min_level: u32,
}

/// Stat-distribution bias for one element.
///
/// Fractions of the stat pool granted to the element's primary and
/// secondary attributes; the remainder is spread as small random top-ups.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementBias {
    pub primary: Attribute,
    pub primary_fraction: f64,
    pub secondary: Attribute,
    pub secondary_fraction: f64,
}

/// Tuning for boss generation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossConfig {
    /// Power variance half-width in percent (10 = ±10%).
    pub variance_percent: u32,
    /// Boss level is `min_level + 0..=level_roll_max`.
    pub level_roll_max: u32,
    /// Starting value of every boss stat before pool distribution.
    pub stat_floor: i32,
    /// Pool = power level / this divisor.
    pub stat_pool_divisor: i64,
    /// Chance (percent) that the boss is shadow-extractable.
    pub extract_chance_percent: u32,
    /// Per-element stat bias.
    pub bias: ElementTable<ElementBias>,
    /// Shadow bonus value at tier E.
    pub shadow_bonus_base: i32,
    /// Shadow bonus growth per tier above E.
    pub shadow_bonus_per_tier: i32,
}

impl Default for BossConfig {
    fn default() -> Self {
        Self {
            variance_percent: 10,
            level_roll_max: 4,
            stat_floor: 10,
            stat_pool_divisor: 10,
            extract_chance_percent: 70,
            bias: ElementTable {
                fire: ElementBias {
                    primary: Attribute::Strength,
                    primary_fraction: 0.40,
                    secondary: Attribute::Vitality,
                    secondary_fraction: 0.30,
                },
                ice: ElementBias {
                    primary: Attribute::Intelligence,
                    primary_fraction: 0.40,
                    secondary: Attribute::Vitality,
                    secondary_fraction: 0.30,
                },
                lightning: ElementBias {
                    primary: Attribute::Agility,
                    primary_fraction: 0.40,
                    secondary: Attribute::Strength,
                    secondary_fraction: 0.30,
                },
                earth: ElementBias {
                    primary: Attribute::Vitality,
                    primary_fraction: 0.40,
                    secondary: Attribute::Metabolism,
                    secondary_fraction: 0.30,
                },
                wind: ElementBias {
                    primary: Attribute::Agility,
                    primary_fraction: 0.40,
                    secondary: Attribute::Fortune,
                    secondary_fraction: 0.30,
                },
                shadow: ElementBias {
                    primary: Attribute::Intelligence,
                    primary_fraction: 0.40,
                    secondary: Attribute::Agility,
                    secondary_fraction: 0.30,
                },
            },
            shadow_bonus_base: 2,
            shadow_bonus_per_tier: 2,
        }
    }
}

/// Authored boss content: element keywords and move lists.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossCatalog {
    /// Dungeon-id substring -> element. First match wins; no match falls
    /// back to a random element.
    pub keywords: Vec<(String, Element)>,
    /// Element-specific special moves.
    pub moves: ElementTable<Vec<String>>,
    /// The universal finishing move, always present.
    pub finisher: String,
}

/// A generated boss combatant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Boss {
    pub id: String,
    pub name: String,
    pub element: Element,
    /// Six attributes, shaped like a character sheet.
    pub stats: AttributeBlock,
    pub level: u32,
    pub power_level: i64,
    /// Two element moves plus the universal finisher; no duplicates.
    pub special_moves: Vec<String>,
    pub can_extract: bool,
    pub shadow: Option<ShadowData>,
}

/// Builds a [`Boss`] from a dungeon context and a seed.
#[derive(Clone, Debug)]
pub struct BossGenerator {
    config: BossConfig,
    catalog: BossCatalog,
}

impl BossGenerator {
    /// Create a generator with explicit tuning and authored content.
    pub fn new(config: BossConfig, catalog: BossCatalog) -> Self {
        Self { config, catalog }
    }

    /// Access the active tuning.
    pub fn config(&self) -> &BossConfig {
        &self.config
    }

    /// Generate the boss for an encounter.
    ///
    /// `sheet` is consulted only for level-proximity diagnostics - boss
    /// power and stats never scale with the player. `seed` addresses every
    /// internal roll, so equal seeds replay equal bosses.
    pub fn generate(
        &self,
        context: &DungeonContext,
        sheet: &CharacterSheet,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> Boss {
        let element = self.select_element(context, rng, seed);

        // ±variance% on the dungeon's power budget - the only run-to-run
        // randomness in the boss's headline number.
        let spread = self.config.variance_percent.min(100);
        let variance = rng.range(compute_seed(seed, STREAM_VARIANCE, 0), 100 - spread, 100 + spread);
        let power_level = (context.power_budget as f64 * f64::from(variance) / 100.0).floor() as i64;

        let level = context.min_level
            + rng.range(compute_seed(seed, STREAM_LEVEL, 0), 0, self.config.level_roll_max);

        if sheet.level + 10 < context.min_level {
            tracing::debug!(
                player_level = sheet.level,
                boss_level = level,
                dungeon = %context.id,
                "player far below the encounter's entry level"
            );
        }

        let stats = self.distribute_stats(element, power_level, rng, seed);
        let special_moves = self.select_moves(element, rng, seed);

        let can_extract = rng.chance(
            compute_seed(seed, STREAM_EXTRACT, 0),
            self.config.extract_chance_percent,
        );
        let shadow = can_extract.then(|| self.shadow_for(context, element));

        Boss {
            id: format!("{}_boss", context.id),
            name: context.name.clone(),
            element,
            stats,
            level,
            power_level,
            special_moves,
            can_extract,
            shadow,
        }
    }

    /// Keyword match over the dungeon id, random element as fallback.
    ///
    /// Unknown keyword combinations never fail - they land in the fallback.
    fn select_element(&self, context: &DungeonContext, rng: &dyn RngOracle, seed: u64) -> Element {
        let haystack = context.id.to_lowercase();
        for (keyword, element) in &self.catalog.keywords {
            if haystack.contains(keyword.as_str()) {
                return *element;
            }
        }
        let all = Element::all();
        let idx = rng
            .pick_index(compute_seed(seed, STREAM_ELEMENT, 0), all.len())
            .unwrap_or(0);
        all[idx]
    }

    /// Floor every stat, then pour element-biased fractions of the stat
    /// pool into the primary/secondary attributes; the rest get small
    /// random top-ups.
    fn distribute_stats(
        &self,
        element: Element,
        power_level: i64,
        rng: &dyn RngOracle,
        seed: u64,
    ) -> AttributeBlock {
        let cfg = &self.config;
        let pool = (power_level / cfg.stat_pool_divisor.max(1)).max(0);
        let bias = cfg.bias.get(element);

        let mut stats = AttributeBlock::uniform(cfg.stat_floor);
        stats.add(bias.primary, (pool as f64 * bias.primary_fraction).floor() as i32);
        stats.add(bias.secondary, (pool as f64 * bias.secondary_fraction).floor() as i32);

        let topup_max = ((pool / 10) as u32).max(1);
        for (step, attribute) in Attribute::all().into_iter().enumerate() {
            if attribute == bias.primary || attribute == bias.secondary {
                continue;
            }
            let roll = rng.range(compute_seed(seed, STREAM_TOPUP, step as u64), 0, topup_max);
            stats.add(attribute, roll as i32);
        }
        stats
    }

    /// Two element moves (de-duplicated) plus the universal finisher.
    fn select_moves(&self, element: Element, rng: &dyn RngOracle, seed: u64) -> Vec<String> {
        let pool = self.catalog.moves.get(element);
        let mut moves: Vec<String> = Vec::with_capacity(3);
        for step in 0..2u64 {
            let Some(idx) = rng.pick_index(compute_seed(seed, STREAM_MOVES, step), pool.len())
            else {
                break;
            };
            let pick = &pool[idx];
            if !moves.contains(pick) {
                moves.push(pick.clone());
            }
        }
        moves.push(self.catalog.finisher.clone());
        moves
    }

    /// Shadow candidate: rank from the tier ladder, bonus from element and
    /// difficulty.
    fn shadow_for(&self, context: &DungeonContext, element: Element) -> ShadowData {
        let ranks = ShadowRank::all();
        let rank = ranks[context.tier.index().min(ShadowRank::COUNT - 1)];
        let bias = self.config.bias.get(element);
        ShadowData {
            name: context.name.clone(),
            rank,
            bonus: ShadowBonus {
                stat: bias.primary,
                value: self.config.shadow_bonus_base
                    + self.config.shadow_bonus_per_tier * context.tier.index() as i32,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::PcgRng;

    fn catalog() -> BossCatalog {
        BossCatalog {
            keywords: vec![
                ("frost".into(), Element::Ice),
                ("storm".into(), Element::Lightning),
            ],
            moves: ElementTable {
                fire: vec!["Flame Burst".into(), "Magma Wave".into()],
                ice: vec!["Frost Nova".into(), "Glacial Spike".into(), "Hail".into()],
                lightning: vec!["Thunder Lance".into(), "Static Field".into()],
                earth: vec!["Stone Crush".into(), "Quake".into()],
                wind: vec!["Gale Slash".into(), "Cyclone".into()],
                shadow: vec!["Umbral Grasp".into(), "Night Veil".into()],
            },
            finisher: "Monarch's Wrath".into(),
        }
    }

    fn context(id: &str) -> DungeonContext {
        DungeonContext {
            id: id.into(),
            name: "Frost Warden".into(),
            tier: Tier::C,
            power_budget: 1000,
            min_level: 15,
        }
    }

    fn generate(id: &str, seed: u64) -> Boss {
        BossGenerator::new(BossConfig::default(), catalog()).generate(
            &context(id),
            &CharacterSheet::new(),
            &PcgRng,
            seed,
        )
    }

    #[test]
    fn keyword_decides_element() {
        assert_eq!(generate("frost_cavern_10", 1).element, Element::Ice);
        assert_eq!(generate("storm_spire_20", 1).element, Element::Lightning);
    }

    #[test]
    fn unknown_keywords_fall_back_without_failing() {
        // No keyword matches; element comes from the seeded fallback roll.
        let boss = generate("mystery_zone_5", 7);
        assert!(Element::all().contains(&boss.element));
    }

    #[test]
    fn same_seed_same_boss() {
        assert_eq!(generate("frost_cavern_10", 42), generate("frost_cavern_10", 42));
    }

    #[test]
    fn power_stays_within_variance_band() {
        for seed in 0..100 {
            let boss = generate("frost_cavern_10", seed);
            assert!((900..=1100).contains(&boss.power_level), "{}", boss.power_level);
        }
    }

    #[test]
    fn level_rolls_from_dungeon_floor_not_player() {
        for seed in 0..50 {
            let boss = generate("frost_cavern_10", seed);
            assert!((15..=19).contains(&boss.level));
        }
    }

    #[test]
    fn biased_stats_exceed_the_floor() {
        let boss = generate("frost_cavern_10", 3);
        let config = BossConfig::default();
        // Ice: intelligence primary, vitality secondary. Pool = power/10.
        assert!(boss.stats.intelligence >= config.stat_floor + 36); // 0.40 × 90 (min pool)
        assert!(boss.stats.vitality >= config.stat_floor + 27);
        assert!(boss.stats.strength >= config.stat_floor);
    }

    #[test]
    fn finisher_always_present_and_moves_unique() {
        for seed in 0..50 {
            let boss = generate("frost_cavern_10", seed);
            assert_eq!(boss.special_moves.last().unwrap(), "Monarch's Wrath");
            assert!(boss.special_moves.len() >= 2 && boss.special_moves.len() <= 3);
            let mut deduped = boss.special_moves.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), boss.special_moves.len());
        }
    }

    #[test]
    fn shadow_rank_follows_tier_ladder() {
        let generator = BossGenerator::new(BossConfig::default(), catalog());
        let mut ctx = context("frost_cavern_10");
        ctx.tier = Tier::Sss;
        // Find a seed whose extract roll succeeds.
        let boss = (0..100)
            .map(|seed| generator.generate(&ctx, &CharacterSheet::new(), &PcgRng, seed))
            .find(|b| b.can_extract)
            .expect("70% extract chance must hit within 100 seeds");
        let shadow = boss.shadow.unwrap();
        assert_eq!(shadow.rank, ShadowRank::SSS);
        assert_eq!(shadow.bonus.stat, Attribute::Intelligence);
        assert_eq!(shadow.bonus.value, 2 + 2 * 7);
    }

    #[test]
    fn shadow_absent_when_extract_fails() {
        let generator = BossGenerator::new(BossConfig::default(), catalog());
        let boss = (0..200)
            .map(|seed| generator.generate(&context("frost_cavern_10"), &CharacterSheet::new(), &PcgRng, seed))
            .find(|b| !b.can_extract)
            .expect("30% no-extract chance must hit within 200 seeds");
        assert!(boss.shadow.is_none());
    }
}
