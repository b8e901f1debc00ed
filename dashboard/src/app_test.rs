use super::*;
use theme::Theme;

#[test]
fn root_class_marks_dark_fallback() {
    assert_eq!(root_class(&ThemeConfig::default()), "dark");
}

#[test]
fn root_class_uses_configured_marker() {
    let config = ThemeConfig {
        marker_class: "theme-dark".to_owned(),
        ..ThemeConfig::default()
    };
    assert_eq!(root_class(&config), "theme-dark");
}

#[test]
fn root_class_is_empty_for_light_fallback() {
    let config = ThemeConfig {
        fallback: Theme::Light,
        ..ThemeConfig::default()
    };
    assert_eq!(root_class(&config), "");
}

// =============================================================
// Server rendering
// =============================================================

#[cfg(feature = "ssr")]
fn html_tag(html: &str) -> &str {
    let start = html.find("<html").expect("no <html> tag");
    let end = start + html[start..].find('>').expect("unterminated <html> tag");
    &html[start..=end]
}

#[cfg(feature = "ssr")]
#[test]
fn server_render_marks_root_dark_and_shows_sun() {
    let owner = Owner::new();
    owner.with(|| {
        let options = LeptosOptions::builder().output_name("trading-desk").build();
        let html = shell(options).to_html();
        assert!(html_tag(&html).contains(r#"class="dark""#), "{}", html_tag(&html));
        assert!(html.contains("icon--sun"));
        assert!(!html.contains("icon--moon"));
    });
}

#[cfg(feature = "ssr")]
#[test]
fn app_mounts_all_four_panels() {
    let owner = Owner::new();
    owner.with(|| {
        let html = view! { <App/> }.to_html();
        for class in ["chat-panel", "regime", "portfolio", "signal-board"] {
            assert!(html.contains(&format!("panel {class}")), "missing panel {class}");
        }
        assert!(html.contains("Paper Trading"));
    });
}
