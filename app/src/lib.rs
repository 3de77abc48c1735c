use leptos::prelude::*;
use leptos_meta::{Style, provide_meta_context};
use sitenav_core::NavConfig;
use sitenav_ui::{FADE_CSS, SectionNavigator};

/// Navigation settings for the documentation site, embedded at build time.
pub const NAVIGATION_TOML: &str = include_str!("../navigation.toml");

/// Parse the embedded settings, falling back to the built-in groups.
pub fn site_config() -> NavConfig {
    NavConfig::from_toml_str(NAVIGATION_TOML).unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid navigation.toml, using defaults");
        NavConfig::default()
    })
}

#[component]
pub fn App(config: NavConfig) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
      // fade used when a panel or menu is revealed
      <Style>{FADE_CSS}</Style>

      <SectionNavigator config=config />
    }
}
