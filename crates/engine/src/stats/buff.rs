//! Time-bound additive stat buffs.

use chrono::{DateTime, Utc};

use crate::attribute::Attribute;

/// An additive, expiring bonus to a single attribute.
///
/// Buffs are created by buff-granting actions (e.g. sufficient sleep logged)
/// and naturally expire: expired buffs are filtered out at read time, never
/// explicitly deleted. Multiple buffs on the same attribute stack additively.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveBuff {
    pub id: String,
    pub stat: Attribute,
    pub amount: i32,
    pub expires_at: DateTime<Utc>,
}

impl ActiveBuff {
    /// True while the buff still applies. A buff expiring exactly at `now`
    /// no longer counts.
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Sum of all active buff amounts for one attribute.
pub fn active_bonus(buffs: &[ActiveBuff], stat: Attribute, now: DateTime<Utc>) -> i32 {
    buffs
        .iter()
        .filter(|b| b.stat == stat && b.is_active(now))
        .map(|b| b.amount)
        .sum()
}

/// Drop expired buffs from a stored list.
///
/// Purely a storage-hygiene helper for the persistence layer; resolution
/// never requires it since expired buffs already contribute nothing.
pub fn retain_active(buffs: &mut Vec<ActiveBuff>, now: DateTime<Utc>) {
    buffs.retain(|b| b.is_active(now));
}
