//! Cross-component properties of the progression engine.
//!
//! These tests pin the contract-level invariants: growth-curve
//! monotonicity, boss cadence, determinism, breakdown consistency and the
//! one-way lifecycle rules that individual unit tests only touch locally.

use chrono::{TimeZone, Utc};
use nacho_engine::{
    advance, claim_reward, ActiveBuff, Attribute, AttributeBlock, BossCatalog, BossConfig,
    BossGenerator, CharacterSheet, ConditionKind, DungeonConfig, DungeonContext, Element,
    ElementTable, EquippedItem, FloorCatalog, FloorGenerator, Frequency, Mission, OwnedFrame,
    OwnedShadow, OwnedTitle, PcgRng, PowerAggregator, PowerInput, QuestContext, QuestGenerator,
    QuestTemplate, Rarity, ScaledRange, ShadowBonus, ShadowData, ShadowRank, Tier, WeekdaySet,
};

fn floor_generator() -> FloorGenerator {
    let catalog = FloorCatalog {
        zone_names: vec![
            "Goblin Den".into(),
            "Wolf Forest".into(),
            "Frost Cavern".into(),
            "Storm Spire".into(),
            "Ember Wastes".into(),
            "Sunken Temple".into(),
            "Obsidian Keep".into(),
            "Monarch's Threshold".into(),
        ],
        boss_names: vec!["Razor Fang".into(), "Igris the Red".into(), "Baruka".into()],
        boss_shadows: vec![ShadowData {
            name: "Fang".into(),
            rank: ShadowRank::E,
            bonus: ShadowBonus {
                stat: Attribute::Agility,
                value: 2,
            },
        }],
    };
    FloorGenerator::new(DungeonConfig::default(), catalog).unwrap()
}

#[test]
fn recommended_power_and_xp_never_decrease() {
    let generator = floor_generator();
    let mut prev_power = i64::MIN;
    let mut prev_xp = i64::MIN;
    for floor in 1..=400 {
        let dungeon = generator.generate(floor).unwrap();
        assert!(
            dungeon.recommended_power >= prev_power,
            "power regressed at floor {floor}"
        );
        assert!(dungeon.rewards.xp >= prev_xp, "xp regressed at floor {floor}");
        prev_power = dungeon.recommended_power;
        prev_xp = dungeon.rewards.xp;
    }
}

#[test]
fn boss_appears_exactly_on_every_tenth_floor() {
    let generator = floor_generator();
    for floor in 1..=200 {
        let dungeon = generator.generate(floor).unwrap();
        assert_eq!(
            dungeon.boss.is_some(),
            floor % 10 == 0,
            "boss cadence broken at floor {floor}"
        );
    }
}

#[test]
fn floor_generation_is_fully_deterministic() {
    let generator = floor_generator();
    for floor in [1, 9, 10, 55, 137, 1000] {
        assert_eq!(generator.generate(floor).unwrap(), generator.generate(floor).unwrap());
    }
}

#[test]
fn tier_clamps_far_beyond_the_authored_range() {
    let generator = floor_generator();
    assert_eq!(generator.generate(1).unwrap().difficulty, Tier::E);
    let deep = generator.generate(20 * 8 * 50).unwrap();
    assert_eq!(deep.difficulty, Tier::Sss);
}

#[test]
fn level_one_player_floor_one_scenario() {
    let dungeon = floor_generator().generate(1).unwrap();
    assert_eq!(dungeon.difficulty, Tier::E);
    assert!(dungeon.boss.is_none());
    assert_eq!(
        dungeon.recommended_power,
        DungeonConfig::default().base_power
    );
}

#[test]
fn floor_ten_scenario() {
    let dungeon = floor_generator().generate(10).unwrap();
    let boss = dungeon.boss.unwrap();
    assert_eq!(boss.id, "boss_10");
    assert_eq!(boss.name, "Razor Fang"); // index 0 of the name list
}

#[test]
fn buff_expiry_controls_contribution() {
    let now = Utc.with_ymd_and_hms(2024, 3, 6, 12, 0, 0).unwrap();
    let mut sheet = CharacterSheet::new();
    sheet.attributes.agility = 20;
    let buffs = vec![
        ActiveBuff {
            id: "expired".into(),
            stat: Attribute::Agility,
            amount: 7,
            expires_at: now - chrono::TimeDelta::minutes(1),
        },
        ActiveBuff {
            id: "active".into(),
            stat: Attribute::Agility,
            amount: 3,
            expires_at: now + chrono::TimeDelta::minutes(1),
        },
    ];
    assert_eq!(
        nacho_engine::effective_stat(&sheet, &[], &buffs, Attribute::Agility, now),
        23
    );
}

#[test]
fn power_breakdown_total_matches_components_on_rich_state() {
    let mut sheet = CharacterSheet::new();
    sheet.level = 42;
    sheet.attributes = AttributeBlock::new(31, 27, 24, 19, 12, 15);
    sheet.job_class = nacho_engine::JobClass::Commander;
    sheet.equipped_title_id = Some("gate_breaker".into());
    sheet.selected_frame_id = "gold_gate".into();
    sheet.passive_levels.insert("iron_body".into(), 6);

    let titles = vec![
        OwnedTitle {
            id: "gate_breaker".into(),
            rarity: Rarity::Legendary,
        },
        OwnedTitle {
            id: "early_riser".into(),
            rarity: Rarity::Common,
        },
        OwnedTitle {
            id: "wolf_slayer".into(),
            rarity: Rarity::Rare,
        },
    ];
    let frames = vec![
        OwnedFrame {
            id: "default".into(),
            rarity: Rarity::Common,
        },
        OwnedFrame {
            id: "gold_gate".into(),
            rarity: Rarity::Epic,
        },
    ];
    let shadows: Vec<OwnedShadow> = (0..6)
        .map(|i| OwnedShadow {
            name: format!("shadow_{i}"),
            rank: if i == 0 { ShadowRank::A } else { ShadowRank::D },
        })
        .collect();
    let equipment = vec![
        EquippedItem {
            id: "dagger".into(),
            rarity: Rarity::Rare,
            base_stats: vec![3, 4, 2],
        },
        EquippedItem {
            id: "cloak".into(),
            rarity: Rarity::Epic,
            base_stats: vec![5, 1],
        },
    ];
    let passives = vec![nacho_engine::PassiveDef {
        id: "iron_body".into(),
        stat: Attribute::Strength,
        bonus_per_level: 0.05,
        max_level: 10,
    }];

    let input = PowerInput {
        sheet: &sheet,
        titles: &titles,
        frames: &frames,
        shadows: &shadows,
        equipment: &equipment,
        passives: &passives,
    };
    let breakdown = PowerAggregator::default().compute(&input).unwrap();

    assert_eq!(breakdown.total, breakdown.components().iter().sum::<i64>());
    for component in breakdown.components() {
        assert!(component >= 0, "no component may go negative");
    }
}

#[test]
fn boss_power_tracks_dungeon_not_player() {
    let catalog = BossCatalog {
        keywords: vec![("frost".into(), Element::Ice)],
        moves: ElementTable {
            fire: vec!["Flame Burst".into()],
            ice: vec!["Frost Nova".into(), "Hailbind".into()],
            lightning: vec!["Thunder Lance".into()],
            earth: vec!["Stone Crush".into()],
            wind: vec!["Gale Slash".into()],
            shadow: vec!["Umbral Grasp".into()],
        },
        finisher: "Monarch's Wrath".into(),
    };
    let generator = BossGenerator::new(BossConfig::default(), catalog);
    let context = DungeonContext {
        id: "frost_cavern_30".into(),
        name: "Frost Warden".into(),
        tier: Tier::D,
        power_budget: 2000,
        min_level: 25,
    };

    let rookie = CharacterSheet::new();
    let mut veteran = CharacterSheet::new();
    veteran.level = 90;
    veteran.attributes = AttributeBlock::uniform(80);

    let a = generator.generate(&context, &rookie, &PcgRng, 77);
    let b = generator.generate(&context, &veteran, &PcgRng, 77);
    assert_eq!(a, b, "player state must not influence the generated boss");
    assert!((1800..=2200).contains(&a.power_level));
}

#[test]
fn daily_batch_titles_are_unique_across_many_seeds() {
    let templates: Vec<QuestTemplate> = vec![
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
            description: "Finish {target} missions.".into(),
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
            description: "Clear {target} floors.".into(),
        },
        QuestTemplate {
            id: "stat".into(),
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
            description: "Push {stat} to {target}.".into(),
        },
        QuestTemplate {
            id: "proof".into(),
            kind: ConditionKind::ManualVerification,
            target: ScaledRange::flat(1),
            quest_points: ScaledRange {
                base: 20.0,
                per_level: 1.0,
                min: 20,
                max: 140,
            },
            shards: (4, 9),
            stat_reward: None,
            title: "Log proof of one hard workout".into(),
            description: "Mark it done yourself.".into(),
        },
    ];

    let generator = QuestGenerator::default();
    for seed in 0..100 {
        for level in [1, 25, 80] {
            let batch = generator.generate(level, &templates, &PcgRng, seed);
            assert_eq!(batch.len(), 3);
            for (i, a) in batch.iter().enumerate() {
                for b in batch.iter().skip(i + 1) {
                    assert_ne!(a.title, b.title, "seed {seed} level {level}");
                }
            }
        }
    }
}

#[test]
fn quest_completion_survives_regressing_context() {
    let quest = nacho_engine::DailyQuest {
        id: "daily_missions".into(),
        title: "Complete 2 missions".into(),
        description: "Finish 2 missions.".into(),
        condition: nacho_engine::QuestCondition {
            kind: ConditionKind::CompleteMissions,
            target: 2,
            current: 0,
            stat: None,
        },
        reward: nacho_engine::QuestReward {
            quest_points: 10,
            shards: 3,
            stat_bonus: None,
        },
        completed: false,
        claimed_at: None,
    };

    let done = advance(
        &quest,
        &QuestContext {
            missions_completed_today: 2,
            ..QuestContext::default()
        },
    )
    .into_owned();
    assert!(done.completed);

    // A later snapshot implying lower progress must not regress completion.
    let after = advance(&done, &QuestContext::default());
    assert!(after.completed);
    assert_eq!(after.condition.current, 2);
}

#[test]
fn claim_guard_rejects_double_payout() {
    let mut quest = nacho_engine::DailyQuest {
        id: "daily_proof".into(),
        title: "Log proof".into(),
        description: "Mark it done yourself.".into(),
        condition: nacho_engine::QuestCondition {
            kind: ConditionKind::ManualVerification,
            target: 1,
            current: 1,
            stat: None,
        },
        reward: nacho_engine::QuestReward {
            quest_points: 20,
            shards: 5,
            stat_bonus: None,
        },
        completed: true,
        claimed_at: None,
    };
    let now = Utc.with_ymd_and_hms(2024, 3, 6, 21, 0, 0).unwrap();
    assert!(claim_reward(&mut quest, now).is_ok());
    assert!(claim_reward(&mut quest, now).is_err());
}

#[test]
fn weekly_mission_scenario_monday_wednesday_friday() {
    let mut mission = Mission {
        id: "gym".into(),
        name: "Gym session".into(),
        target_stat: Attribute::Strength,
        xp_reward: 50,
        is_daily: false,
        frequency: Frequency::Weekly,
        days_of_week: WeekdaySet::from_indices(&[1, 3, 5]),
        last_completed_at: None,
        streak: 0,
    };

    let wednesday = Utc.with_ymd_and_hms(2024, 3, 6, 10, 0, 0).unwrap();
    let tuesday = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();

    assert!(mission.is_available(wednesday));
    assert!(!mission.is_available(tuesday));

    // Availability ignores completion history entirely.
    mission.last_completed_at = Some(wednesday);
    assert!(mission.is_available(wednesday));
    assert!(!mission.is_available(tuesday));
}
