use commitdrift_game::{CommitEngine, GameConfig, LevelDefinition};

const SAMPLE_SIZE: u32 = 5_000;
const TOLERANCE: f64 = 0.025;

fn soak_config(bug_chance_base: f32) -> GameConfig {
    GameConfig {
        levels: vec![LevelDefinition {
            id: 0,
            name: "Soak".to_string(),
            target_commits: 1_000_000,
            max_bugs: 1_000_000,
            reward: 0,
            bug_chance_base,
        }],
        shop: Vec::new(),
        achievements: Vec::new(),
    }
}

fn observed_bug_rate(seed: u64, bug_chance_base: f32) -> f64 {
    let mut engine = CommitEngine::new(soak_config(bug_chance_base), seed).unwrap();
    let mut bugged = 0u32;
    let mut last_bugs = 0u32;
    for _ in 0..SAMPLE_SIZE {
        let status = engine.make_commit().status;
        if status.bug_count > last_bugs {
            bugged += 1;
        }
        last_bugs = status.bug_count;
    }
    f64::from(bugged) / f64::from(SAMPLE_SIZE)
}

#[test]
fn bug_rate_tracks_the_base_chance() {
    let observed = observed_bug_rate(0xC0FFEE, 0.2);
    assert!(
        (observed - 0.2).abs() <= TOLERANCE,
        "bug rate drifted: observed {observed:.4}"
    );
}

#[test]
fn bug_rate_follows_a_steeper_chance() {
    let observed = observed_bug_rate(0xBEEF, 0.4);
    assert!(
        (observed - 0.4).abs() <= TOLERANCE,
        "bug rate drifted: observed {observed:.4}"
    );
}

#[test]
fn floored_chance_still_produces_some_bugs() {
    // A base below the floor is clamped up to 0.05.
    let observed = observed_bug_rate(0xACED, 0.01);
    assert!(
        (observed - 0.05).abs() <= TOLERANCE,
        "floored rate drifted: observed {observed:.4}"
    );
}
