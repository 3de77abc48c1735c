//! Leptos entry point for section navigation.

use leptos::prelude::*;
use sitenav_core::NavConfig;

use crate::binding;

/// Takes over the static page's content panels once mounted.
///
/// Renders nothing itself: the panels, menus and triggers come from the
/// page markup. On mount it hides everything, fades in the default panel
/// and wires every trigger to a navigator owned by the click handlers.
#[component]
#[allow(clippy::unused_unit)]
pub fn SectionNavigator(
    /// Groups and id rules for the page.
    config: NavConfig,
) -> impl IntoView {
    Effect::new(move |_| {
        if let Err(err) = binding::start(&config) {
            tracing::error!(error = %err, "section navigation unavailable");
        }
    });
}
