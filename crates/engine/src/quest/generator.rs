//! The daily batch generator.

use arrayvec::ArrayVec;

use crate::attribute::Attribute;
use crate::quest::template::QuestTemplate;
use crate::quest::types::{ConditionKind, DailyQuest, QuestCondition, QuestReward};
use crate::rng::{compute_seed, RngOracle};

/// Capacity bound for a daily batch.
pub const MAX_DAILY_QUESTS: usize = 8;

// Seed streams for the independent rolls inside one generation.
const STREAM_SHUFFLE: u64 = 1;
const STREAM_STAT: u64 = 2;
const STREAM_SHARDS: u64 = 3;
const STREAM_SLOT: u64 = 4;

/// Batch sizing for the quest generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestConfig {
    /// Quests per daily batch.
    pub batch_size: usize,
}

impl Default for QuestConfig {
    fn default() -> Self {
        Self { batch_size: 3 }
    }
}

/// Draws a fixed-size daily batch from a read-only template pool.
#[derive(Clone, Debug, Default)]
pub struct QuestGenerator {
    config: QuestConfig,
}

impl QuestGenerator {
    /// Create a generator with explicit batch sizing.
    pub fn new(config: QuestConfig) -> Self {
        Self {
            config: QuestConfig {
                batch_size: config.batch_size.min(MAX_DAILY_QUESTS),
            },
        }
    }

    /// Generate today's batch.
    ///
    /// Shuffles the pool, renders templates in shuffled order and skips any
    /// whose rendered title collides with one already chosen - two distinct
    /// templates that happen to render identical text exclude each other.
    /// Stops once the batch is full or the pool is exhausted.
    pub fn generate(
        &self,
        level: u32,
        templates: &[QuestTemplate],
        rng: &dyn RngOracle,
        seed: u64,
    ) -> ArrayVec<DailyQuest, MAX_DAILY_QUESTS> {
        let mut batch: ArrayVec<DailyQuest, MAX_DAILY_QUESTS> = ArrayVec::new();
        let order = rng.permutation(compute_seed(seed, STREAM_SHUFFLE, 0), templates.len());

        for (slot, template_idx) in order.into_iter().enumerate() {
            if batch.len() >= self.config.batch_size {
                break;
            }
            let template = &templates[template_idx];
            let quest = self.build(level, template, rng, compute_seed(seed, STREAM_SLOT, slot as u64));
            if batch.iter().any(|q| q.title == quest.title) {
                tracing::trace!(template = %template.id, "skipping duplicate rendered title");
                continue;
            }
            batch.push(quest);
        }

        if batch.len() < self.config.batch_size {
            tracing::debug!(
                generated = batch.len(),
                wanted = self.config.batch_size,
                "template pool exhausted before the batch filled"
            );
        }
        batch
    }

    fn build(
        &self,
        level: u32,
        template: &QuestTemplate,
        rng: &dyn RngOracle,
        slot_seed: u64,
    ) -> DailyQuest {
        // Manual verification is always binary; everything else scales.
        let target = match template.kind {
            ConditionKind::ManualVerification => 1,
            _ => template.target.eval(level),
        };

        let stat = (template.kind == ConditionKind::ReachStat).then(|| {
            let all = Attribute::all();
            let idx = rng
                .pick_index(compute_seed(slot_seed, STREAM_STAT, 0), all.len())
                .unwrap_or(0);
            all[idx]
        });

        let (shard_min, shard_max) = template.shards;
        let shards = rng.range(compute_seed(slot_seed, STREAM_SHARDS, 0), shard_min, shard_max);

        DailyQuest {
            id: format!("daily_{}", template.id),
            title: QuestTemplate::render(&template.title, target, stat),
            description: QuestTemplate::render(&template.description, target, stat),
            condition: QuestCondition {
                kind: template.kind,
                target,
                current: 0,
                stat,
            },
            reward: QuestReward {
                quest_points: template.quest_points.eval(level),
                shards,
                stat_bonus: template.stat_reward,
            },
            completed: false,
            claimed_at: None,
        }
    }
}
