use super::*;

fn seeded(teams: usize, seed: u64) -> GenConfig {
    GenConfig {
        teams,
        seed: Some(seed),
    }
}

#[test]
fn test_round_robin_pair_count() {
    let lines = generate(&seeded(6, 42));

    assert_eq!(lines.len(), 6 * 5 / 2);
}

#[test]
fn test_too_few_teams_yield_no_fixtures() {
    assert!(generate(&seeded(0, 42)).is_empty());
    assert!(generate(&seeded(1, 42)).is_empty());
}

#[test]
fn test_team_count_is_clamped_to_the_pool() {
    let lines = generate(&seeded(TEAM_NAMES.len() + 50, 3));
    let n = TEAM_NAMES.len();

    assert_eq!(lines.len(), n * (n - 1) / 2);
}

#[test]
fn test_seeded_runs_are_reproducible() {
    let config = seeded(8, 7);

    assert_eq!(generate(&config), generate(&config));
}

#[test]
fn test_no_team_plays_itself() {
    for line in generate(&seeded(10, 11)) {
        let fields: Vec<&str> = line.split(';').collect();

        assert_eq!(fields.len(), 3);
        assert_ne!(fields[0], fields[1]);
    }
}

#[test]
fn test_output_parses_through_the_pipeline() {
    let input = generate(&seeded(5, 1)).join("\n");
    let standings = tally_core::aggregate(&input).unwrap();

    assert_eq!(standings.len(), 5);
    for row in standings.table() {
        // A single round robin: everyone plays everyone else once.
        assert_eq!(row.matches_played, 4);
    }
}

#[test]
fn test_config_loads_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.toml");
    std::fs::write(&path, "teams = 10\nseed = 99\n").unwrap();

    let config = GenConfig::load(&path).unwrap();

    assert_eq!(config.teams, 10);
    assert_eq!(config.seed, Some(99));
}

#[test]
fn test_config_defaults_apply_for_missing_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.toml");
    std::fs::write(&path, "teams = 12\n").unwrap();

    let config = GenConfig::load(&path).unwrap();

    assert_eq!(config.teams, 12);
    assert_eq!(config.seed, None);
}

#[test]
fn test_config_load_reports_bad_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gen.toml");
    std::fs::write(&path, "teams = \"lots\"\n").unwrap();

    assert!(matches!(GenConfig::load(&path), Err(GenError::Toml(_))));
}

#[test]
fn test_config_load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    assert!(matches!(GenConfig::load(&path), Err(GenError::Io(_))));
}
