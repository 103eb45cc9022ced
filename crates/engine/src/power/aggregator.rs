//! The eight-component power aggregator.

use crate::boss::shadow::OwnedShadow;
use crate::power::config::PowerConfig;
use crate::power::{PowerBreakdown, PowerError};
use crate::rarity::Rarity;
use crate::sheet::CharacterSheet;
use crate::stats::passive::PassiveDef;

/// An unlocked title with its catalog rarity resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedTitle {
    pub id: String,
    pub rarity: Rarity,
}

/// An unlocked avatar frame with its catalog rarity resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OwnedFrame {
    pub id: String,
    pub rarity: Rarity,
}

/// An equipped inventory item as the aggregator sees it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquippedItem {
    pub id: String,
    pub rarity: Rarity,
    /// Raw stat values on the item; their sum drives the item's power.
    pub base_stats: Vec<i32>,
}

/// Full player state feeding one power computation.
///
/// Catalog lookups (title/frame rarity) happen before this point so the
/// aggregator stays a pure function of plain data.
#[derive(Clone, Copy, Debug)]
pub struct PowerInput<'a> {
    pub sheet: &'a CharacterSheet,
    /// Every unlocked title, equipped or not.
    pub titles: &'a [OwnedTitle],
    /// Every unlocked frame, selected or not.
    pub frames: &'a [OwnedFrame],
    pub shadows: &'a [OwnedShadow],
    pub equipment: &'a [EquippedItem],
    pub passives: &'a [PassiveDef],
}

/// Frame id that carries no power, equipped or owned.
const DEFAULT_FRAME_ID: &str = "default";

/// Computes [`PowerBreakdown`] from full player state.
///
/// This is the single source of truth for "how strong is the player". The
/// eight component rules are fixed; every tunable lives in [`PowerConfig`].
/// Each component floors at its own boundary, no component may go negative,
/// and the total is exactly the component sum.
#[derive(Clone, Debug, Default)]
pub struct PowerAggregator {
    config: PowerConfig,
}

impl PowerAggregator {
    /// Create an aggregator with explicit tuning.
    pub fn new(config: PowerConfig) -> Self {
        Self { config }
    }

    /// Access the active tuning.
    pub fn config(&self) -> &PowerConfig {
        &self.config
    }

    /// Compute the full breakdown.
    ///
    /// Fails fast on structurally malformed input (negative stored
    /// attributes or item stats) rather than propagating garbage into
    /// player-facing numbers.
    pub fn compute(&self, input: &PowerInput<'_>) -> Result<PowerBreakdown, PowerError> {
        self.validate(input)?;

        let base_stats = self.base_stats_power(input);
        let level = self.level_power(input);
        let titles = self.title_power(input);
        let frames = self.frame_power(input);
        let shadows = self.shadow_power(input);
        let equipment = self.equipment_power(input);
        let passives = self.passive_power(input);
        let job_class = self.job_class_power(input);

        let components = [
            base_stats, level, titles, frames, shadows, equipment, passives, job_class,
        ];
        let total = components.iter().sum();

        Ok(PowerBreakdown {
            base_stats,
            level,
            titles,
            frames,
            shadows,
            equipment,
            passives,
            job_class,
            total,
        })
    }

    fn validate(&self, input: &PowerInput<'_>) -> Result<(), PowerError> {
        for attribute in crate::attribute::Attribute::all() {
            let value = input.sheet.attributes.get(attribute);
            if value < 0 {
                return Err(PowerError::NegativeAttribute {
                    attribute: attribute.to_string(),
                    value,
                });
            }
        }
        for item in input.equipment {
            if let Some(&value) = item.base_stats.iter().find(|v| **v < 0) {
                return Err(PowerError::NegativeItemStat {
                    item_id: item.id.clone(),
                    value,
                });
            }
        }
        Ok(())
    }

    /// Sum of the six raw attributes × per-point weight.
    fn base_stats_power(&self, input: &PowerInput<'_>) -> i64 {
        input.sheet.attributes.total() * self.config.stat_weight
    }

    fn level_power(&self, input: &PowerInput<'_>) -> i64 {
        i64::from(input.sheet.level) * self.config.level_weight
    }

    /// Equipped title at full value; every other owned title at the
    /// collection fraction.
    fn title_power(&self, input: &PowerInput<'_>) -> i64 {
        let equipped = input.sheet.equipped_title_id.as_deref();
        let mut sum = 0.0f64;
        for title in input.titles {
            let value = self.config.title_power.get(title.rarity) as f64;
            if equipped == Some(title.id.as_str()) {
                sum += value;
            } else {
                sum += value * self.config.collection_fraction;
            }
        }
        (sum.floor() as i64).max(0)
    }

    /// Identical pattern to titles with the frame table; the `"default"`
    /// frame never counts.
    fn frame_power(&self, input: &PowerInput<'_>) -> i64 {
        let selected = input.sheet.selected_frame_id.as_str();
        let mut sum = 0.0f64;
        for frame in input.frames {
            if frame.id == DEFAULT_FRAME_ID {
                continue;
            }
            let value = self.config.frame_power.get(frame.rarity) as f64;
            if frame.id == selected {
                sum += value;
            } else {
                sum += value * self.config.collection_fraction;
            }
        }
        (sum.floor() as i64).max(0)
    }

    /// Per-rank values plus flat squad bonuses at roster thresholds.
    fn shadow_power(&self, input: &PowerInput<'_>) -> i64 {
        let mut sum: i64 = input
            .shadows
            .iter()
            .map(|s| self.config.shadow_power.get(s.rank))
            .sum();
        if input.shadows.len() >= 5 {
            sum += self.config.squad_bonus_5;
        }
        if input.shadows.len() >= 10 {
            sum += self.config.squad_bonus_10;
        }
        sum.max(0)
    }

    /// floor(stat sum × rarity multiplier × scale) per item, summed.
    fn equipment_power(&self, input: &PowerInput<'_>) -> i64 {
        input
            .equipment
            .iter()
            .map(|item| {
                let stat_sum: i64 = item.base_stats.iter().map(|&v| i64::from(v)).sum();
                let mult = self.config.equip_rarity_mult.get(item.rarity);
                ((stat_sum as f64) * mult * self.config.equip_scale).floor() as i64
            })
            .sum::<i64>()
            .max(0)
    }

    /// floor(bonus-per-level × invested level × scale) per leveled passive.
    fn passive_power(&self, input: &PowerInput<'_>) -> i64 {
        input
            .passives
            .iter()
            .filter_map(|passive| {
                let level = input.sheet.passive_level(&passive.id).min(passive.max_level);
                if level == 0 {
                    return None;
                }
                Some(
                    (passive.bonus_per_level * f64::from(level) * self.config.passive_scale)
                        .floor() as i64,
                )
            })
            .sum::<i64>()
            .max(0)
    }

    /// Triangular scaling on the highest unlocked class index: reaching
    /// class n grants n(n+1)/2 × weight, cumulative by construction.
    fn job_class_power(&self, input: &PowerInput<'_>) -> i64 {
        let n = i64::from(input.sheet.job_class.index());
        n * (n + 1) / 2 * self.config.job_class_weight
    }
}
