//! The section navigator: one active (group, index) pair and the menus
//! that follow it.

use std::fmt;

use crate::{
    config::NavConfig,
    error::Result,
    registry::SectionRegistry,
    trigger::NavTrigger,
    view::SectionView,
};

/// The (group, index) pair currently displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Selection {
    pub group: String,
    pub index: usize,
}

impl Selection {
    pub fn new(group: impl Into<String>, index: usize) -> Self {
        Self {
            group: group.into(),
            index,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.group, self.index)
    }
}

/// Tab-like navigation over content panels.
///
/// At most one content panel is visible at a time, and the visible menu
/// (if any) belongs to the active group. Requests for panels that do not
/// exist still hide the current one and are otherwise ignored.
pub struct Navigator<V: SectionView> {
    view: V,
    registry: SectionRegistry<V::Handle>,
    home: String,
    default: Selection,
    active: Selection,
}

impl<V: SectionView> Navigator<V> {
    /// Validate `config` and resolve its elements through `view`.
    ///
    /// Nothing is hidden or shown until [`Navigator::initialize`] runs.
    pub fn new(config: &NavConfig, view: V) -> Result<Self> {
        config.validate()?;
        let registry = SectionRegistry::build(config, &view);
        let default = Selection::new(config.home.clone(), config.default_index);

        Ok(Self {
            view,
            registry,
            home: config.home.clone(),
            active: default.clone(),
            default,
        })
    }

    /// Hide all panels and menus, then fade in the default panel.
    pub fn initialize(&mut self) {
        let class = self.registry.scheme().section_class.clone();
        self.view.hide_class(&class);
        for section in self.registry.sections() {
            self.view.hide(section);
        }
        for menu in self.registry.menus() {
            self.view.hide(menu);
        }

        self.active = self.default.clone();
        self.reveal_active();
        tracing::info!(active = %self.active, "section navigator initialized");
    }

    /// Switch to `(group, index)`.
    ///
    /// Menus are only touched when the switch leaves the active group, so
    /// links inside a menu never re-fade it.
    pub fn activate_section(&mut self, group: &str, index: usize) -> &Selection {
        if group != self.active.group {
            self.show_menu(group);
        }
        self.switch_section(group, index);
        &self.active
    }

    /// Switch to the first panel of `group` and show only its menu.
    pub fn activate_group(&mut self, group: &str) -> &Selection {
        self.show_menu(group);
        self.switch_section(group, 0);
        &self.active
    }

    /// Apply a click payload.
    pub fn dispatch(&mut self, trigger: &NavTrigger) -> &Selection {
        match trigger {
            NavTrigger::Group { group } => self.activate_group(group),
            NavTrigger::Section { group, index } => self.activate_section(group, *index),
        }
    }

    /// The pair currently displayed.
    pub fn active(&self) -> &Selection {
        &self.active
    }

    /// Whether `group` is the home group.
    pub fn is_home(&self, group: &str) -> bool {
        self.home == group
    }

    pub fn registry(&self) -> &SectionRegistry<V::Handle> {
        &self.registry
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    fn switch_section(&mut self, group: &str, index: usize) {
        if let Some(current) = self.registry.section(&self.active.group, self.active.index) {
            self.view.hide(current);
        }

        self.active = Selection::new(group, index);
        self.reveal_active();
        tracing::debug!(active = %self.active, "activated section");
    }

    fn show_menu(&mut self, group: &str) {
        for menu in self.registry.menus() {
            self.view.hide(menu);
        }

        if self.is_home(group) {
            return;
        }
        match self.registry.menu(group) {
            Some(menu) => self.view.reveal(menu),
            None => tracing::debug!(group, "group has no navigation menu"),
        }
    }

    fn reveal_active(&mut self) {
        match self.registry.section(&self.active.group, self.active.index) {
            Some(section) => self.view.reveal(section),
            None => tracing::debug!(selection = %self.active, "no panel for selection"),
        }
    }
}

impl<V: SectionView + fmt::Debug> fmt::Debug for Navigator<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("view", &self.view)
            .field("home", &self.home)
            .field("active", &self.active)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{headless::HeadlessView, ids::IdScheme};

    fn navigator() -> Navigator<HeadlessView> {
        let view = HeadlessView::site(
            &IdScheme::default(),
            "home",
            &[("home", 1), ("tut", 3), ("doc", 2)],
        );
        let mut nav = Navigator::new(&NavConfig::default(), view).expect("navigator");
        nav.initialize();
        nav
    }

    fn sections(nav: &Navigator<HeadlessView>) -> Vec<&str> {
        nav.view().visible_with_class("section")
    }

    fn menus(nav: &Navigator<HeadlessView>) -> Vec<&str> {
        nav.view().visible_with_class("menu")
    }

    #[test]
    fn test_default_state() {
        let nav = navigator();
        assert_eq!(nav.active(), &Selection::new("home", 0));
        assert_eq!(sections(&nav), vec!["home-0"]);
        assert!(menus(&nav).is_empty());
    }

    #[test]
    fn test_group_switch() {
        let mut nav = navigator();
        nav.activate_group("tut");

        assert_eq!(nav.active(), &Selection::new("tut", 0));
        assert_eq!(sections(&nav), vec!["tut-0"]);
        assert!(nav.view().is_visible("tut-nav"));
        assert!(!nav.view().is_visible("doc-nav"));
    }

    #[test]
    fn test_group_switch_replaces_menu() {
        let mut nav = navigator();
        nav.activate_group("tut");
        nav.activate_group("doc");

        assert_eq!(sections(&nav), vec!["doc-0"]);
        assert_eq!(menus(&nav), vec!["doc-nav"]);
    }

    #[test]
    fn test_home_hides_menus() {
        let mut nav = navigator();
        nav.activate_group("doc");
        nav.activate_group("home");

        assert_eq!(sections(&nav), vec!["home-0"]);
        assert!(menus(&nav).is_empty());
    }

    #[test]
    fn test_sub_section_switch() {
        let mut nav = navigator();
        nav.activate_group("tut");
        nav.activate_section("tut", 2);

        assert!(!nav.view().is_visible("tut-0"));
        assert_eq!(sections(&nav), vec!["tut-2"]);
        assert_eq!(menus(&nav), vec!["tut-nav"]);
    }

    #[test]
    fn test_unknown_target() {
        let mut nav = navigator();
        nav.activate_group("tut");
        let active = nav.activate_section("tut", 99).clone();

        assert_eq!(active, Selection::new("tut", 99));
        assert!(sections(&nav).is_empty());
        assert_eq!(menus(&nav), vec!["tut-nav"]);

        // Nothing to hide on the way out of a missing panel.
        nav.activate_section("doc", 1);
        assert_eq!(sections(&nav), vec!["doc-1"]);
    }

    #[test]
    fn test_cross_group_section_syncs_menu() {
        let mut nav = navigator();
        nav.activate_group("tut");
        nav.activate_section("doc", 1);

        assert_eq!(sections(&nav), vec!["doc-1"]);
        assert_eq!(menus(&nav), vec!["doc-nav"]);

        nav.activate_section("home", 0);
        assert_eq!(sections(&nav), vec!["home-0"]);
        assert!(menus(&nav).is_empty());
    }

    #[test]
    fn test_section_link_keeps_menu_fade() {
        let mut nav = navigator();
        nav.activate_group("tut");
        let reveals = nav.view().reveal_count();
        nav.activate_section("tut", 1);

        // Only the panel is faded in, the menu stays as it was.
        assert_eq!(nav.view().reveal_count(), reveals + 1);
    }

    #[test]
    fn test_section_after_numbering_gap() {
        let mut view = HeadlessView::site(&IdScheme::default(), "home", &[("home", 1), ("tut", 2)]);
        view.add_element("tut-3", ["section"]);
        let mut nav = Navigator::new(&NavConfig::default(), view).expect("navigator");
        nav.initialize();

        nav.activate_group("tut");
        nav.activate_section("tut", 3);

        assert_eq!(sections(&nav), vec!["tut-3"]);
        assert_eq!(menus(&nav), vec!["tut-nav"]);
    }

    #[test]
    fn test_unknown_group() {
        let mut nav = navigator();
        nav.activate_group("blog");

        assert!(sections(&nav).is_empty());
        assert!(menus(&nav).is_empty());
    }

    #[test]
    fn test_activate_section_idempotent() {
        let mut nav = navigator();
        nav.activate_section("doc", 1);
        let once = nav.view().visible().into_iter().map(String::from).collect::<Vec<_>>();
        nav.activate_section("doc", 1);
        let twice = nav.view().visible().into_iter().map(String::from).collect::<Vec<_>>();

        assert_eq!(once, twice);
        assert_eq!(nav.active(), &Selection::new("doc", 1));
    }

    #[test]
    fn test_dispatch() {
        let mut nav = navigator();
        assert_eq!(
            nav.dispatch(&NavTrigger::group("doc")),
            &Selection::new("doc", 0)
        );
        assert_eq!(
            nav.dispatch(&NavTrigger::section("doc", 1)),
            &Selection::new("doc", 1)
        );
        assert_eq!(sections(&nav), vec!["doc-1"]);
        assert_eq!(menus(&nav), vec!["doc-nav"]);
    }

    #[test]
    fn test_initialize_resets_selection() {
        let mut nav = navigator();
        nav.activate_group("doc");
        nav.initialize();

        assert_eq!(nav.active(), &Selection::new("home", 0));
        assert_eq!(sections(&nav), vec!["home-0"]);
        assert!(menus(&nav).is_empty());
    }

    #[test]
    fn test_initialize_hides_unregistered_sections() {
        let mut view = HeadlessView::site(&IdScheme::default(), "home", &[("home", 1)]);
        view.add_element("extra", ["section"]);
        let mut nav = Navigator::new(&NavConfig::default(), view).expect("navigator");
        nav.initialize();

        assert_eq!(nav.view().visible(), vec!["home-0"]);
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = NavConfig {
            home: "landing".to_string(),
            ..NavConfig::default()
        };
        assert!(Navigator::new(&config, HeadlessView::new()).is_err());
    }

    #[test]
    fn test_custom_default_selection() {
        let config = NavConfig {
            default_index: 1,
            ..NavConfig::default()
        };
        let view = HeadlessView::site(&IdScheme::default(), "home", &[("home", 2)]);
        let mut nav = Navigator::new(&config, view).expect("navigator");
        nav.initialize();

        assert_eq!(nav.view().visible(), vec!["home-1"]);
    }
}
