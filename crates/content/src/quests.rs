//! The daily-quest template pool.

use nacho_engine::{Attribute, ConditionKind, QuestTemplate, ScaledRange, StatReward};

/// The shipped template pool the daily batch is drawn from.
///
/// Target and reward formulas scale with player level inside hard clamps so
/// extreme levels never produce zero or runaway objectives.
pub fn builtin_quest_templates() -> Vec<QuestTemplate> {
    vec![
        QuestTemplate {
            id: "missions".into(),
            kind: ConditionKind::CompleteMissions,
            target: ScaledRange {
                base: 2.0,
                per_level: 0.05,
                min: 2,
                max: 8,
            },
            quest_points: ScaledRange {
                base: 10.0,
                per_level: 1.0,
                min: 10,
                max: 120,
            },
            shards: (2, 6),
            stat_reward: None,
            title: "Complete {target} missions".into(),
            description: "Finish {target} missions before the day resets.".into(),
        },
        QuestTemplate {
            id: "dungeons".into(),
            kind: ConditionKind::ClearDungeons,
            target: ScaledRange {
                base: 1.0,
                per_level: 0.02,
                min: 1,
                max: 4,
            },
            quest_points: ScaledRange {
                base: 15.0,
                per_level: 1.2,
                min: 15,
                max: 150,
            },
            shards: (3, 8),
            stat_reward: None,
            title: "Clear {target} dungeons".into(),
            description: "Clear {target} dungeon floors today.".into(),
        },
        QuestTemplate {
            id: "stat_threshold".into(),
            kind: ConditionKind::ReachStat,
            target: ScaledRange {
                base: 12.0,
                per_level: 1.5,
                min: 12,
                max: 400,
            },
            quest_points: ScaledRange {
                base: 12.0,
                per_level: 1.0,
                min: 12,
                max: 120,
            },
            shards: (2, 5),
            stat_reward: None,
            title: "Reach {target} {stat}".into(),
            description: "Push your effective {stat} to {target}.".into(),
        },
        QuestTemplate {
            id: "health".into(),
            kind: ConditionKind::HealthScore,
            target: ScaledRange {
                base: 60.0,
                per_level: 0.2,
                min: 60,
                max: 95,
            },
            quest_points: ScaledRange {
                base: 12.0,
                per_level: 0.8,
                min: 12,
                max: 100,
            },
            shards: (2, 6),
            stat_reward: Some(StatReward {
                stat: Attribute::Vitality,
                amount: 1,
            }),
            title: "Score {target} health points".into(),
            description: "Reach a daily health score of {target}.".into(),
        },
        QuestTemplate {
            id: "streak".into(),
            kind: ConditionKind::MaintainStreak,
            target: ScaledRange {
                base: 3.0,
                per_level: 0.1,
                min: 3,
                max: 30,
            },
            quest_points: ScaledRange {
                base: 8.0,
                per_level: 0.6,
                min: 8,
                max: 80,
            },
            shards: (1, 4),
            stat_reward: None,
            title: "Hold a {target}-day streak".into(),
            description: "Keep your activity streak at {target} days or more.".into(),
        },
        QuestTemplate {
            id: "proof_workout".into(),
            kind: ConditionKind::ManualVerification,
            target: ScaledRange::flat(1),
            quest_points: ScaledRange {
                base: 20.0,
                per_level: 1.0,
                min: 20,
                max: 140,
            },
            shards: (4, 9),
            stat_reward: Some(StatReward {
                stat: Attribute::Strength,
                amount: 1,
            }),
            title: "Log proof of one hard workout".into(),
            description: "Upload proof of a workout and mark it done yourself.".into(),
        },
    ]
}
