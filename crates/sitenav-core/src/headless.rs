//! In-memory page model.
//!
//! Mirrors the visibility bookkeeping of a real document without a browser,
//! so the navigator can be driven from native tests and tools.

use std::collections::BTreeMap;

use crate::{ids::IdScheme, view::SectionView};

#[derive(Debug, Clone)]
struct Element {
    visible: bool,
    classes: Vec<String>,
}

/// A page made of id-addressed elements that are either shown or hidden.
#[derive(Debug, Clone, Default)]
pub struct HeadlessView {
    elements: BTreeMap<String, Element>,
    reveals: usize,
}

impl HeadlessView {
    /// Create an empty page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a page following `scheme`: `sections` panels per group and a
    /// menu for every group except `home`. Everything starts visible, as
    /// static markup does before the navigator runs.
    pub fn site(scheme: &IdScheme, home: &str, groups: &[(&str, usize)]) -> Self {
        let mut view = Self::new();
        for &(group, sections) in groups {
            for index in 0..sections {
                view.add_element(
                    scheme.content_id(group, index),
                    [scheme.section_class.as_str()],
                );
            }
            if group != home {
                view.add_element(scheme.menu_id(group), ["menu"]);
            }
        }
        view
    }

    /// Add a visible element.
    pub fn add_element<'a>(
        &mut self,
        id: impl Into<String>,
        classes: impl IntoIterator<Item = &'a str>,
    ) {
        self.elements.insert(
            id.into(),
            Element {
                visible: true,
                classes: classes.into_iter().map(str::to_string).collect(),
            },
        );
    }

    /// Whether the element exists and is shown.
    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).is_some_and(|e| e.visible)
    }

    /// Ids of all shown elements, sorted.
    pub fn visible(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, e)| e.visible)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Ids of shown elements carrying `class`, sorted.
    pub fn visible_with_class(&self, class: &str) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, e)| e.visible && e.classes.iter().any(|c| c == class))
            .map(|(id, _)| id.as_str())
            .collect()
    }

    /// Number of reveal calls that hit an existing element.
    pub fn reveal_count(&self) -> usize {
        self.reveals
    }
}

impl SectionView for HeadlessView {
    type Handle = String;

    fn resolve(&self, id: &str) -> Option<String> {
        self.elements.contains_key(id).then(|| id.to_string())
    }

    fn hide(&mut self, handle: &String) {
        if let Some(element) = self.elements.get_mut(handle) {
            element.visible = false;
        }
    }

    fn reveal(&mut self, handle: &String) {
        if let Some(element) = self.elements.get_mut(handle) {
            element.visible = true;
            self.reveals += 1;
        }
    }

    fn hide_class(&mut self, class: &str) {
        for element in self.elements.values_mut() {
            if element.classes.iter().any(|c| c == class) {
                element.visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_layout() {
        let view = HeadlessView::site(&IdScheme::default(), "home", &[("home", 1), ("tut", 2)]);
        assert_eq!(view.visible(), vec!["home-0", "tut-0", "tut-1", "tut-nav"]);
        assert_eq!(view.visible_with_class("section"), vec!["home-0", "tut-0", "tut-1"]);
        assert!(view.resolve("home-nav").is_none());
    }

    #[test]
    fn test_hide_and_reveal() {
        let mut view = HeadlessView::new();
        view.add_element("a", ["section"]);
        view.add_element("b", std::iter::empty());

        view.hide_class("section");
        assert!(!view.is_visible("a"));
        assert!(view.is_visible("b"));

        let a = view.resolve("a").expect("element a");
        view.reveal(&a);
        assert!(view.is_visible("a"));
        assert_eq!(view.reveal_count(), 1);

        view.reveal(&"missing".to_string());
        assert_eq!(view.reveal_count(), 1);
        assert!(!view.is_visible("missing"));
    }
}
