use super::*;

fn env(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
    move |name| {
        pairs
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.to_string())
    }
}

#[test]
fn defaults_point_at_local_service() {
    let settings = Settings::default();
    assert_eq!(settings.server_url, "http://127.0.0.1:8080");
    assert_eq!(settings.default_difficulty, Difficulty::Easy);
    assert_eq!(settings.request_timeout_secs, 10);
}

#[test]
fn file_values_override_defaults() {
    let raw = r#"
server_url = "http://puzzles.internal:9000"
default_difficulty = "expert"
request_timeout_secs = 3
"#;
    let file_cfg = parse_settings(raw).expect("parse");
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, &file_cfg);

    assert_eq!(settings.server_url, "http://puzzles.internal:9000");
    assert_eq!(settings.default_difficulty, Difficulty::Expert);
    assert_eq!(settings.request_timeout_secs, 3);
}

#[test]
fn bad_file_values_are_skipped() {
    let raw = r#"
default_difficulty = "impossible"
request_timeout_secs = -4
unrelated = true
"#;
    let file_cfg = parse_settings(raw).expect("parse");
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, &file_cfg);
    assert_eq!(settings, Settings::default());
}

#[test]
fn unparsable_file_is_an_error() {
    assert!(parse_settings("server_url = ").is_err());
}

#[test]
fn env_overrides_file_and_app_prefix_wins() {
    let mut settings = Settings {
        server_url: "http://from-file:1".into(),
        ..Settings::default()
    };
    apply_env_settings(
        &mut settings,
        env(&[
            ("SUDOKU_SERVER_URL", "http://legacy:2"),
            ("APP__SERVER_URL", "http://app:3"),
            ("APP__DEFAULT_DIFFICULTY", "Medium"),
            ("APP__REQUEST_TIMEOUT_SECS", "30"),
        ]),
    );

    assert_eq!(settings.server_url, "http://app:3");
    assert_eq!(settings.default_difficulty, Difficulty::Medium);
    assert_eq!(settings.request_timeout_secs, 30);
}

#[test]
fn invalid_env_values_keep_previous_settings() {
    let mut settings = Settings::default();
    apply_env_settings(
        &mut settings,
        env(&[
            ("APP__DEFAULT_DIFFICULTY", "nightmare"),
            ("APP__REQUEST_TIMEOUT_SECS", "soon"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn missing_settings_file_reports_path() {
    let err = read_settings_file(Path::new("does-not-exist/sudoku.toml")).expect_err("must fail");
    assert!(format!("{err:#}").contains("does-not-exist/sudoku.toml"));
}
