//! Progression and reward computation engine for Sistema Nacho.
//!
//! `nacho-engine` turns real-world habit data into RPG progression: it
//! derives effective stats and total power from a character sheet,
//! procedurally generates scaled content (dungeon floors, bosses, daily
//! quests) as pure functions of small inputs, and applies the calendar
//! rules for recurring missions, buffs and daily resets.
//!
//! The engine performs no I/O and holds no global state. Wall-clock time is
//! always a parameter, and every random decision flows through the
//! [`rng::RngOracle`] so a stored seed replays an identical generation.
//! Authored data (catalogs, template pools) comes from the `nacho-content`
//! crate or any other source matching the types re-exported here.

pub mod attribute;
pub mod boss;
pub mod dungeon;
pub mod error;
pub mod mission;
pub mod power;
pub mod quest;
pub mod rarity;
pub mod rng;
pub mod schedule;
pub mod sheet;
pub mod stats;

pub use attribute::{Attribute, AttributeBlock};
pub use boss::{
    Boss, BossCatalog, BossConfig, BossGenerator, DungeonContext, Element, ElementBias,
    ElementTable, OwnedShadow, ShadowBonus, ShadowData, ShadowRank,
};
pub use dungeon::{
    BossSpec, DropCurve, DropCurves, DropRates, Dungeon, DungeonConfig, DungeonError,
    DungeonRewards, FloorCatalog, FloorGenerator, Tier,
};
pub use error::{EngineError, ErrorSeverity};
pub use mission::{Frequency, Mission, WeekdaySet};
pub use power::{
    EquippedItem, OwnedFrame, OwnedTitle, PowerAggregator, PowerBreakdown, PowerConfig,
    PowerError, PowerInput, ShadowRankTable,
};
pub use quest::{
    advance, claim_reward, ConditionKind, DailyQuest, QuestCondition, QuestConfig, QuestContext,
    QuestError, QuestGenerator, QuestReward, QuestTemplate, ScaledRange, StatReward,
    MAX_DAILY_QUESTS,
};
pub use rarity::{Rarity, RarityTable};
pub use rng::{compute_seed, PcgRng, RngOracle};
pub use schedule::{is_new_day, same_calendar_day, weekday_index};
pub use sheet::{xp_for_level, CharacterSheet, JobClass, LevelUp, POINTS_PER_LEVEL};
pub use stats::{effective_all, effective_stat, ActiveBuff, PassiveDef};
