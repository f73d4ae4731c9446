use commitdrift_game::{
    AchievementCondition, CommitEngine, ConfigError, GameConfig, ItemEffect,
};

const BALANCE_JSON: &str = r#"{
    "levels": [
        {
            "id": 0,
            "name": "Garage Demo",
            "target_commits": 2,
            "max_bugs": 3,
            "reward": 2,
            "bug_chance_base": 0.1
        },
        {
            "id": 1,
            "name": "First Customer",
            "target_commits": 4,
            "max_bugs": 3,
            "reward": 6,
            "bug_chance_base": 0.15
        }
    ],
    "shop": [
        {
            "id": "rubber-duck",
            "name": "Rubber Duck",
            "desc": "Explains your own code back to you.",
            "cost": 5,
            "effect": {"kind": "bug_chance_reduction", "amount": 0.02}
        },
        {
            "id": "mechanical-keyboard",
            "name": "Mechanical Keyboard",
            "desc": "Louder commits are worth more.",
            "cost": 8,
            "effect": {"kind": "commit_money_bonus", "amount": 1}
        }
    ],
    "achievements": [
        {
            "id": "garage-days",
            "name": "Garage Days",
            "desc": "Clear the demo.",
            "condition": {"kind": "level_reached", "value": 1}
        }
    ]
}"#;

#[test]
fn balance_file_parses_and_validates() {
    let config = GameConfig::from_json(BALANCE_JSON).unwrap();
    config.validate().unwrap();

    assert_eq!(config.levels.len(), 2);
    assert_eq!(config.levels[0].target_commits, 2);
    assert_eq!(
        config.shop[0].effect,
        ItemEffect::BugChanceReduction(0.02)
    );
    assert_eq!(
        config.achievements[0].condition,
        AchievementCondition::LevelReached(1)
    );
    assert!(!config.shop[0].purchased);
    assert!(!config.achievements[0].unlocked);
}

#[test]
fn engine_runs_on_an_alternative_balance_file() {
    let config = GameConfig::from_json(BALANCE_JSON).unwrap();
    let mut engine = CommitEngine::new(config, 9).unwrap();

    let outcome = engine.make_commit();
    assert_eq!(outcome.status.target_commits, 2);
    assert_eq!(outcome.status.level_name, "Garage Demo");
}

#[test]
fn shop_and_achievements_default_to_empty_catalogs() {
    let config = GameConfig::from_json(
        r#"{
            "levels": [
                {
                    "id": 0,
                    "name": "Solo",
                    "target_commits": 1,
                    "max_bugs": 1,
                    "reward": 0,
                    "bug_chance_base": 0.0
                }
            ]
        }"#,
    )
    .unwrap();
    config.validate().unwrap();
    assert!(config.shop.is_empty());
    assert!(config.achievements.is_empty());
}

#[test]
fn semantic_faults_surface_as_config_errors() {
    let mut config = GameConfig::from_json(BALANCE_JSON).unwrap();
    config.levels[1].bug_chance_base = 1.5;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::BugChanceOutOfRange { level: 1, .. })
    ));

    let mut config = GameConfig::from_json(BALANCE_JSON).unwrap();
    config.levels.clear();
    assert_eq!(
        CommitEngine::new(config, 1).unwrap_err(),
        ConfigError::EmptyLevelPlan
    );
}
