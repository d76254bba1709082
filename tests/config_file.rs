use std::fs;

use tank_arena::{ConfigError, Game, GameConfig};

#[test]
fn loads_overrides_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("arena.json");
    fs::write(
        &path,
        r#"{ "tank_speed": 6.0, "wall_count_min": 2, "wall_count_max": 2, "reset_key": "Enter" }"#,
    )
    .unwrap();

    let config = GameConfig::load(&path).unwrap();
    assert_eq!(config.tank_speed, 6.0);
    assert_eq!(config.players.len(), 3);

    let game = Game::with_config(config, 9).unwrap();
    assert_eq!(game.world().walls.len(), 2);
}

#[test]
fn dumped_config_loads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dump.json");
    let config = GameConfig::default();
    fs::write(&path, config.to_json_pretty().unwrap()).unwrap();

    assert_eq!(GameConfig::load(&path).unwrap(), config);
}

#[test]
fn missing_file_reports_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    match GameConfig::load(&path) {
        Err(ConfigError::Io { path: reported, .. }) => assert_eq!(reported, path),
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn out_of_range_values_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "fps": 0 }"#).unwrap();

    let err = GameConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { field: "fps", .. }));
    assert!(err.to_string().contains("fps"));
}
