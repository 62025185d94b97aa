use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use shared::domain::Difficulty;
use tracing::warn;

pub const SETTINGS_FILE: &str = "sudoku.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub server_url: String,
    pub default_difficulty: Difficulty,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: "http://127.0.0.1:8080".into(),
            default_difficulty: Difficulty::Easy,
            request_timeout_secs: 10,
        }
    }
}

/// Defaults, then `sudoku.toml` in the working directory, then environment.
pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if Path::new(SETTINGS_FILE).exists() {
        match read_settings_file(Path::new(SETTINGS_FILE)) {
            Ok(file_cfg) => apply_file_settings(&mut settings, &file_cfg),
            Err(err) => warn!("ignoring {SETTINGS_FILE}: {err:#}"),
        }
    }

    apply_env_settings(&mut settings, |name| std::env::var(name).ok());
    settings
}

pub fn read_settings_file(path: &Path) -> anyhow::Result<HashMap<String, toml::Value>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings file '{}'", path.display()))?;
    parse_settings(&raw).with_context(|| format!("invalid settings file '{}'", path.display()))
}

pub fn parse_settings(raw: &str) -> anyhow::Result<HashMap<String, toml::Value>> {
    Ok(toml::from_str::<HashMap<String, toml::Value>>(raw)?)
}

pub fn apply_file_settings(settings: &mut Settings, file_cfg: &HashMap<String, toml::Value>) {
    if let Some(v) = file_cfg.get("server_url").and_then(toml::Value::as_str) {
        settings.server_url = v.to_string();
    }
    if let Some(v) = file_cfg.get("default_difficulty").and_then(toml::Value::as_str) {
        match v.parse() {
            Ok(difficulty) => settings.default_difficulty = difficulty,
            Err(err) => warn!("{SETTINGS_FILE}: {err}"),
        }
    }
    if let Some(v) = file_cfg
        .get("request_timeout_secs")
        .and_then(toml::Value::as_integer)
    {
        if let Ok(secs) = u64::try_from(v) {
            settings.request_timeout_secs = secs;
        }
    }
}

pub fn apply_env_settings(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("SUDOKU_SERVER_URL") {
        settings.server_url = v;
    }
    if let Some(v) = lookup("APP__SERVER_URL") {
        settings.server_url = v;
    }

    if let Some(v) = lookup("APP__DEFAULT_DIFFICULTY") {
        match v.parse() {
            Ok(difficulty) => settings.default_difficulty = difficulty,
            Err(err) => warn!("APP__DEFAULT_DIFFICULTY: {err}"),
        }
    }

    if let Some(v) = lookup("APP__REQUEST_TIMEOUT_SECS") {
        if let Ok(parsed) = v.parse::<u64>() {
            settings.request_timeout_secs = parsed;
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
