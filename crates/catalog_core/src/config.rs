use std::{collections::HashMap, fs, path::PathBuf};

pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub fixtures_dir: Option<PathBuf>,
    pub log_filter: String,
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixtures_dir: None,
            log_filter: "info".into(),
            window_title: "Product Categories".into(),
            window_width: 1024.0,
            window_height: 720.0,
        }
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(SETTINGS_FILE) {
        apply_file_overrides(&mut settings, &raw);
    }
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());

    settings
}

pub fn apply_file_overrides(settings: &mut Settings, raw: &str) {
    let file_cfg = match toml::from_str::<HashMap<String, toml::Value>>(raw) {
        Ok(file_cfg) => file_cfg,
        Err(err) => {
            tracing::warn!(file = SETTINGS_FILE, error = %err, "ignoring malformed settings file");
            return;
        }
    };

    for (key, value) in file_cfg {
        let value = match value {
            toml::Value::String(v) => v,
            toml::Value::Integer(v) => v.to_string(),
            toml::Value::Float(v) => v.to_string(),
            other => {
                tracing::warn!(key = %key, value = %other, "ignoring non-scalar setting");
                continue;
            }
        };
        apply_setting(settings, &key, value);
    }
}

pub fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    const ENV_KEYS: [(&str, &str); 7] = [
        ("CATALOG_FIXTURES_DIR", "fixtures_dir"),
        ("APP__FIXTURES_DIR", "fixtures_dir"),
        ("RUST_LOG", "log_filter"),
        ("APP__LOG_FILTER", "log_filter"),
        ("APP__WINDOW_TITLE", "window_title"),
        ("APP__WINDOW_WIDTH", "window_width"),
        ("APP__WINDOW_HEIGHT", "window_height"),
    ];

    for (var, key) in ENV_KEYS {
        if let Some(value) = lookup(var) {
            apply_setting(settings, key, value);
        }
    }
}

fn apply_setting(settings: &mut Settings, key: &str, value: String) {
    match key {
        "fixtures_dir" => {
            let value = value.trim();
            settings.fixtures_dir = (!value.is_empty()).then(|| PathBuf::from(value));
        }
        "log_filter" => {
            if !value.trim().is_empty() {
                settings.log_filter = value;
            }
        }
        "window_title" => settings.window_title = value,
        "window_width" => {
            if let Some(width) = parse_dimension(key, &value) {
                settings.window_width = width;
            }
        }
        "window_height" => {
            if let Some(height) = parse_dimension(key, &value) {
                settings.window_height = height;
            }
        }
        _ => tracing::debug!(key, "ignoring unknown setting"),
    }
}

fn parse_dimension(key: &str, value: &str) -> Option<f32> {
    match value.trim().parse::<f32>() {
        Ok(parsed) if parsed.is_finite() && parsed > 0.0 => Some(parsed),
        _ => {
            tracing::warn!(key, value, "ignoring invalid window dimension");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
