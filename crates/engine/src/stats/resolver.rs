//! Effective stat resolution.

use chrono::{DateTime, Utc};

use crate::attribute::{Attribute, AttributeBlock};
use crate::sheet::CharacterSheet;
use crate::stats::buff::{self, ActiveBuff};
use crate::stats::passive::PassiveDef;

/// Compute the effective value of one attribute.
///
/// 1. Read the stored base value.
/// 2. If a passive definition targets this attribute, multiply by
///    `1 + invested_level × bonus_per_level` and floor. No matching passive
///    (or level 0) leaves the base untouched.
/// 3. Add every active buff amount for this attribute.
///
/// Pure read; absent passives and buffs are zero contribution, never errors.
pub fn effective_stat(
    sheet: &CharacterSheet,
    passives: &[PassiveDef],
    buffs: &[ActiveBuff],
    stat: Attribute,
    now: DateTime<Utc>,
) -> i32 {
    let base = sheet.attributes.get(stat);

    let boosted = match passives.iter().find(|p| p.stat == stat) {
        Some(passive) => {
            let level = sheet.passive_level(&passive.id);
            (f64::from(base) * passive.multiplier(level)).floor() as i32
        }
        None => base,
    };

    boosted + buff::active_bonus(buffs, stat, now)
}

/// Resolve all six attributes at once.
pub fn effective_all(
    sheet: &CharacterSheet,
    passives: &[PassiveDef],
    buffs: &[ActiveBuff],
    now: DateTime<Utc>,
) -> AttributeBlock {
    let mut block = AttributeBlock::uniform(0);
    for stat in Attribute::all() {
        block.set(stat, effective_stat(sheet, passives, buffs, stat, now));
    }
    block
}
