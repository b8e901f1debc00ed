use super::*;

// =============================================================
// Theme
// =============================================================

#[test]
fn theme_from_dark_matches_is_dark() {
    assert_eq!(Theme::from_dark(true), Theme::Dark);
    assert_eq!(Theme::from_dark(false), Theme::Light);
    assert!(Theme::Dark.is_dark());
    assert!(!Theme::Light.is_dark());
}

#[test]
fn theme_storage_literals() {
    assert_eq!(Theme::Dark.as_str(), "dark");
    assert_eq!(Theme::Light.as_str(), "light");
    assert_eq!(Theme::Light.to_string(), "light");
}

#[test]
fn theme_toggled_twice_is_identity() {
    for theme in [Theme::Dark, Theme::Light] {
        assert_ne!(theme.toggled(), theme);
        assert_eq!(theme.toggled().toggled(), theme);
    }
}

#[test]
fn theme_default_is_dark() {
    assert_eq!(Theme::default(), Theme::Dark);
}

#[test]
fn toggle_icon_shows_the_action_not_the_state() {
    assert_eq!(Theme::Dark.toggle_icon(), ToggleIcon::Sun);
    assert_eq!(Theme::Light.toggle_icon(), ToggleIcon::Moon);
    assert_eq!(Theme::Dark.toggle_label(), "Switch to light mode");
    assert_eq!(Theme::Light.toggle_label(), "Switch to dark mode");
}

// =============================================================
// PersistedChoice
// =============================================================

#[test]
fn persisted_choice_parses_canonical_literals() {
    assert_eq!(PersistedChoice::parse(Some("dark")), PersistedChoice::Dark);
    assert_eq!(PersistedChoice::parse(Some("light")), PersistedChoice::Light);
    assert_eq!(PersistedChoice::parse(None), PersistedChoice::Absent);
}

#[test]
fn persisted_choice_unknown_values_read_as_absent() {
    for raw in ["", "true", "false", "Dark", " dark", "system"] {
        assert_eq!(PersistedChoice::parse(Some(raw)), PersistedChoice::Absent, "{raw:?}");
    }
}

#[test]
fn persisted_choice_theme_reading() {
    assert_eq!(PersistedChoice::Dark.theme(), Some(Theme::Dark));
    assert_eq!(PersistedChoice::Light.theme(), Some(Theme::Light));
    assert_eq!(PersistedChoice::Absent.theme(), None);
}

// =============================================================
// ThemeConfig / Headless
// =============================================================

#[test]
fn theme_config_defaults() {
    let config = ThemeConfig::default();
    assert_eq!(config.storage_key, "theme");
    assert_eq!(config.marker_class, "dark");
    assert_eq!(config.fallback, Theme::Dark);
}

#[test]
fn headless_host_has_no_capabilities() {
    assert_eq!(Headless.read("theme"), Err(ThemeError::StorageUnavailable));
    assert_eq!(Headless.write("theme", "dark"), Err(ThemeError::StorageUnavailable));
    assert_eq!(Headless.prefers_dark(), None);
    Headless.set_marker("dark", true);
}

#[test]
fn headless_resolves_to_dark() {
    assert_eq!(resolve(&ThemeConfig::default(), &Headless, &Headless), Theme::Dark);
}
