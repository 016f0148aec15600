use super::*;

use std::collections::HashMap;

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name: &str| vars.get(name).cloned()
}

#[test]
fn defaults_use_embedded_fixtures() {
    let settings = Settings::default();
    assert_eq!(settings.fixtures_dir, None);
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.window_title, "Product Categories");
}

#[test]
fn file_values_override_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(
        &mut settings,
        r#"
fixtures_dir = "./data/fixtures"
log_filter = "catalog_core=debug"
window_width = 1280
window_height = 800.5
unknown_key = "ignored"
"#,
    );
    assert_eq!(settings.fixtures_dir, Some(PathBuf::from("./data/fixtures")));
    assert_eq!(settings.log_filter, "catalog_core=debug");
    assert_eq!(settings.window_width, 1280.0);
    assert_eq!(settings.window_height, 800.5);
}

#[test]
fn malformed_file_leaves_defaults() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "fixtures_dir = [unterminated");
    assert_eq!(settings, Settings::default());
}

#[test]
fn invalid_dimensions_are_skipped() {
    let mut settings = Settings::default();
    apply_file_overrides(&mut settings, "window_width = \"wide\"\nwindow_height = -3");
    assert_eq!(settings.window_width, Settings::default().window_width);
    assert_eq!(settings.window_height, Settings::default().window_height);
}

#[test]
fn app_prefixed_env_wins_over_plain_names() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[
            ("CATALOG_FIXTURES_DIR", "/srv/a"),
            ("APP__FIXTURES_DIR", "/srv/b"),
            ("RUST_LOG", "warn"),
            ("APP__WINDOW_TITLE", "Catalog"),
        ]),
    );
    assert_eq!(settings.fixtures_dir, Some(PathBuf::from("/srv/b")));
    assert_eq!(settings.log_filter, "warn");
    assert_eq!(settings.window_title, "Catalog");
}

#[test]
fn blank_env_values_do_not_clear_log_filter() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env(&[("APP__LOG_FILTER", "  "), ("APP__FIXTURES_DIR", "")]),
    );
    assert_eq!(settings.log_filter, "info");
    assert_eq!(settings.fixtures_dir, None);
}
