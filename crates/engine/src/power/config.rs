//! Power aggregation tuning.
//!
//! Every weight in the power formula lives here as named configuration,
//! grouped by component. The `Default` impl carries the tuned values the
//! game balances around; changing any one of them shifts every displayed
//! total, so regressions are pinned by the aggregator test suite.

use crate::boss::shadow::ShadowRank;
use crate::rarity::RarityTable;

/// Per-rank power values for the shadow army component.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowRankTable {
    pub e: i64,
    pub d: i64,
    pub c: i64,
    pub b: i64,
    pub a: i64,
    pub s: i64,
    pub ss: i64,
    pub sss: i64,
}

impl ShadowRankTable {
    /// Look up the power value for a rank.
    #[inline]
    pub const fn get(&self, rank: ShadowRank) -> i64 {
        match rank {
            ShadowRank::E => self.e,
            ShadowRank::D => self.d,
            ShadowRank::C => self.c,
            ShadowRank::B => self.b,
            ShadowRank::A => self.a,
            ShadowRank::S => self.s,
            ShadowRank::SS => self.ss,
            ShadowRank::SSS => self.sss,
        }
    }
}

/// All weights and tables feeding [`crate::power::PowerAggregator`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerConfig {
    // ===== base stats =====
    /// Power per raw attribute point.
    pub stat_weight: i64,

    // ===== level =====
    /// Power per character level.
    pub level_weight: i64,

    // ===== titles =====
    /// Full value granted by the equipped title, per rarity.
    pub title_power: RarityTable<i64>,
    /// Fraction of a title's value granted by merely owning it.
    pub collection_fraction: f64,

    // ===== frames =====
    /// Full value granted by the selected frame, per rarity.
    pub frame_power: RarityTable<i64>,

    // ===== shadows =====
    pub shadow_power: ShadowRankTable,
    /// Flat bonus once the roster reaches 5 shadows.
    pub squad_bonus_5: i64,
    /// Additional flat bonus once the roster reaches 10 shadows.
    pub squad_bonus_10: i64,

    // ===== equipment =====
    /// Stat-sum multiplier per item rarity.
    pub equip_rarity_mult: RarityTable<f64>,
    /// Global equipment scale constant.
    pub equip_scale: f64,

    // ===== passives =====
    /// Global passive skill scale constant.
    pub passive_scale: f64,

    // ===== job class =====
    /// Weight applied to the triangular class index sum n(n+1)/2.
    pub job_class_weight: i64,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            stat_weight: 2,
            level_weight: 10,
            title_power: RarityTable {
                common: 50,
                rare: 120,
                epic: 300,
                legendary: 700,
                mythic: 1500,
                godlike: 3000,
            },
            collection_fraction: 0.10,
            frame_power: RarityTable {
                common: 25,
                rare: 60,
                epic: 150,
                legendary: 350,
                mythic: 750,
                godlike: 1500,
            },
            shadow_power: ShadowRankTable {
                e: 30,
                d: 60,
                c: 120,
                b: 250,
                a: 500,
                s: 1000,
                ss: 2000,
                sss: 4000,
            },
            squad_bonus_5: 150,
            squad_bonus_10: 400,
            equip_rarity_mult: RarityTable {
                common: 1.0,
                rare: 1.25,
                epic: 1.6,
                legendary: 2.0,
                mythic: 2.5,
                godlike: 3.2,
            },
            equip_scale: 1.5,
            passive_scale: 200.0,
            job_class_weight: 25,
        }
    }
}
