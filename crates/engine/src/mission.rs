//! Recurring missions - the real-world habits feeding progression.

use chrono::{DateTime, Utc};

use crate::attribute::Attribute;
use crate::schedule::{same_calendar_day, weekday_index};

bitflags::bitflags! {
    /// The weekdays a weekly mission is scheduled on. Bit 0 is Sunday,
    /// matching the web convention used across the engine.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct WeekdaySet: u8 {
        const SUNDAY = 1 << 0;
        const MONDAY = 1 << 1;
        const TUESDAY = 1 << 2;
        const WEDNESDAY = 1 << 3;
        const THURSDAY = 1 << 4;
        const FRIDAY = 1 << 5;
        const SATURDAY = 1 << 6;
    }
}

impl WeekdaySet {
    /// Set containing a single 0-based weekday index (0 = Sunday).
    pub fn from_index(index: u8) -> Self {
        Self::from_bits_truncate(1 << (index % 7))
    }

    /// Build a set from 0-based weekday indices.
    pub fn from_indices(indices: &[u8]) -> Self {
        indices
            .iter()
            .fold(Self::empty(), |set, &i| set | Self::from_index(i))
    }

    /// Membership test against a timestamp's weekday.
    pub fn contains_day_of(&self, at: DateTime<Utc>) -> bool {
        self.contains(Self::from_index(weekday_index(at)))
    }
}

/// How often a mission recurs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Frequency {
    #[default]
    Daily,
    Weekly,
}

/// An authored or user-created recurring task.
///
/// Availability is never stored - it is a pure function of the schedule and
/// today's weekday, recomputed on every check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mission {
    pub id: String,
    pub name: String,
    pub target_stat: Attribute,
    pub xp_reward: i64,
    /// Daily-gated missions can be completed at most once per calendar day.
    pub is_daily: bool,
    pub frequency: Frequency,
    /// Scheduled weekdays; only consulted for weekly missions.
    pub days_of_week: WeekdaySet,
    pub last_completed_at: Option<DateTime<Utc>>,
    /// Consecutive-day completion streak for this mission.
    pub streak: u32,
}

impl Mission {
    /// Is this mission scheduled for today?
    ///
    /// Daily missions always are; weekly missions only on their scheduled
    /// weekdays. Completion history plays no part here.
    pub fn is_available(&self, now: DateTime<Utc>) -> bool {
        match self.frequency {
            Frequency::Daily => true,
            Frequency::Weekly => self.days_of_week.contains_day_of(now),
        }
    }

    /// Was this mission completed on today's calendar date?
    pub fn completed_today(&self, now: DateTime<Utc>) -> bool {
        self.last_completed_at
            .is_some_and(|at| same_calendar_day(at, now))
    }

    /// Can the mission be completed right now?
    pub fn can_complete(&self, now: DateTime<Utc>) -> bool {
        self.is_available(now) && (!self.is_daily || !self.completed_today(now))
    }

    /// Record a completion, bumping or resetting the streak.
    ///
    /// A completion on the calendar day after the previous one extends the
    /// streak; any longer gap restarts it at 1. Same-day repeats (possible
    /// for non-daily-gated missions) leave the streak untouched.
    pub fn record_completion(&mut self, now: DateTime<Utc>) {
        match self.last_completed_at {
            Some(prev) if same_calendar_day(prev, now) => {}
            Some(prev) if same_calendar_day(prev + chrono::TimeDelta::days(1), now) => {
                self.streak += 1;
            }
            _ => self.streak = 1,
        }
        self.last_completed_at = Some(now);
    }
}
