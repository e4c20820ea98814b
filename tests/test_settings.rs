use std::fs;
use std::path::PathBuf;

use alien_invasion::error::SettingsError;
use alien_invasion::fleet::Formation;
use alien_invasion::settings::*;

use pretty_assertions::assert_eq;
use tempfile::tempdir;

// ── Defaults ──────────────────────────────────────────────────────────────────

#[test]
fn defaults_describe_the_classic_game() {
    let s = Settings::default();
    assert_eq!((s.screen_w, s.screen_h), (1200, 800));
    assert_eq!((s.ship_w, s.ship_h), (40, 60));
    assert_eq!((s.bullet_w, s.bullet_h), (25, 80));
    assert_eq!((s.alien_w, s.alien_h), (40, 40));
    assert_eq!(s.difficulty.max_bullets(), 5);
    assert_eq!(s.starting_lives, 3);
    assert_eq!(s.formation, Formation::Cross);
    assert_eq!(s.scores_file, PathBuf::from("scores.json"));
    assert!(s.validate().is_ok());
}

// ── Difficulty ────────────────────────────────────────────────────────────────

#[test]
fn scaling_returns_a_new_value() {
    let base = Difficulty::default();
    let harder = base.scaled(2.0);
    assert_eq!(harder.ship_speed, 10.0);
    assert_eq!(harder.bullet_speed, 14.0);
    assert_eq!(harder.fleet_speed, 4.0);
    assert_eq!(harder.max_bullets(), 10);
    // The original is untouched
    assert_eq!(base, Difficulty::default());
}

#[test]
fn bullet_capacity_grows_once_the_fraction_crosses_a_whole_bullet() {
    let mut d = Difficulty::default();
    let mut caps = Vec::new();
    for _ in 0..4 {
        d = d.scaled(1.1);
        caps.push(d.max_bullets());
    }
    // 5.5, 6.05, 6.655, 7.32
    assert_eq!(caps, vec![5, 6, 6, 7]);
}

// ── TOML loading ──────────────────────────────────────────────────────────────

#[test]
fn partial_toml_keeps_other_defaults() {
    let s = Settings::from_toml_str(
        r#"
        screen_w = 800
        formation = "checkerboard"

        [difficulty]
        bullet_capacity = 3.0
        "#,
    )
    .unwrap();

    assert_eq!(s.screen_w, 800);
    assert_eq!(s.screen_h, 800);
    assert_eq!(s.formation, Formation::Checkerboard);
    assert_eq!(s.difficulty.max_bullets(), 3);
    assert_eq!(s.difficulty.ship_speed, 5.0);
}

#[test]
fn load_reads_a_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "starting_lives = 5\nscores_file = \"best.json\"\n").unwrap();

    let s = Settings::load(&path).unwrap();
    assert_eq!(s.starting_lives, 5);
    assert_eq!(s.scores_file, PathBuf::from("best.json"));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempdir().unwrap();
    let err = Settings::load(&dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, SettingsError::Read { .. }));
}

#[test]
fn load_reports_bad_toml() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("game.toml");
    fs::write(&path, "screen_w = \"wide\"").unwrap();
    let err = Settings::load(&path).unwrap_err();
    assert!(matches!(err, SettingsError::Parse { .. }));
}

// ── Validation ────────────────────────────────────────────────────────────────

fn invalid_name(s: &Settings) -> &'static str {
    match s.validate() {
        Err(SettingsError::Invalid { name, .. }) => name,
        other => panic!("expected invalid settings, got {other:?}"),
    }
}

#[test]
fn zero_sizes_are_rejected() {
    let s = Settings {
        alien_w: 0,
        ..Settings::default()
    };
    assert_eq!(invalid_name(&s), "alien_w");
}

#[test]
fn shrinking_difficulty_scale_is_rejected() {
    let s = Settings {
        difficulty_scale: 0.9,
        ..Settings::default()
    };
    assert_eq!(invalid_name(&s), "difficulty_scale");
}

#[test]
fn capacity_below_one_bullet_is_rejected() {
    let mut s = Settings::default();
    s.difficulty.bullet_capacity = 0.5;
    assert_eq!(invalid_name(&s), "difficulty.bullet_capacity");
}

#[test]
fn non_positive_speed_is_rejected() {
    let mut s = Settings::default();
    s.difficulty.fleet_speed = 0.0;
    assert_eq!(invalid_name(&s), "difficulty.fleet_speed");
}
