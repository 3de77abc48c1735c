//! Element addressing shared with the page markup.
//!
//! Content panels are `<group>-<index>`, menus are `<group>-nav`, group
//! triggers carry the bare group name, and section links inside a menu
//! carry their index in a marker attribute (`data-ch`).

use serde::{Deserialize, Serialize};

/// Naming rules that tie groups and indices to element ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdScheme {
    /// Joins a group name to an index or to the menu suffix.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Suffix identifying a group's navigation menu.
    #[serde(default = "default_menu_suffix")]
    pub menu_suffix: String,

    /// Attribute carrying the target index on menu links.
    #[serde(default = "default_index_attr")]
    pub index_attr: String,

    /// Class shared by every content panel, hidden wholesale on startup.
    #[serde(default = "default_section_class")]
    pub section_class: String,
}

fn default_separator() -> String {
    "-".to_string()
}

fn default_menu_suffix() -> String {
    "nav".to_string()
}

fn default_index_attr() -> String {
    "data-ch".to_string()
}

fn default_section_class() -> String {
    "section".to_string()
}

impl Default for IdScheme {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            menu_suffix: default_menu_suffix(),
            index_attr: default_index_attr(),
            section_class: default_section_class(),
        }
    }
}

impl IdScheme {
    /// Id of the content panel for `(group, index)`.
    pub fn content_id(&self, group: &str, index: usize) -> String {
        format!("{group}{}{index}", self.separator)
    }

    /// Id of a group's navigation menu.
    pub fn menu_id(&self, group: &str) -> String {
        format!("{group}{}{}", self.separator, self.menu_suffix)
    }

    /// Id of the top-level trigger that opens a group.
    pub fn trigger_id<'a>(&self, group: &'a str) -> &'a str {
        group
    }

    /// Group owning a menu, taken from the id prefix before the first separator.
    pub fn group_of<'a>(&self, id: &'a str) -> Option<&'a str> {
        id.split_once(self.separator.as_str())
            .map(|(group, _)| group)
            .filter(|group| !group.is_empty())
    }

    /// Selector list matching the menus of `groups`, e.g. `#tut-nav, #doc-nav`.
    pub fn menu_selector<S: AsRef<str>>(&self, groups: &[S]) -> String {
        let suffix = format!("{}{}", self.separator, self.menu_suffix);
        join_affixed(groups, "#", &suffix, ", ")
    }

    /// Selector list matching the marked links inside the menus of `groups`.
    pub fn link_selector<S: AsRef<str>>(&self, groups: &[S]) -> String {
        let suffix = format!("{}{} [{}]", self.separator, self.menu_suffix, self.index_attr);
        join_affixed(groups, "#", &suffix, ", ")
    }
}

/// Wraps every item in `prefix`/`suffix` and joins the results with `separator`.
pub fn join_affixed<S: AsRef<str>>(
    items: &[S],
    prefix: &str,
    suffix: &str,
    separator: &str,
) -> String {
    items
        .iter()
        .map(|item| format!("{prefix}{}{suffix}", item.as_ref()))
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ids() {
        let scheme = IdScheme::default();
        assert_eq!(scheme.content_id("tut", 2), "tut-2");
        assert_eq!(scheme.menu_id("doc"), "doc-nav");
        assert_eq!(scheme.trigger_id("home"), "home");
    }

    #[test]
    fn test_group_of() {
        let scheme = IdScheme::default();
        assert_eq!(scheme.group_of("tut-nav"), Some("tut"));
        assert_eq!(scheme.group_of("doc-3"), Some("doc"));
        assert_eq!(scheme.group_of("home"), None);
        assert_eq!(scheme.group_of("-nav"), None);
    }

    #[test]
    fn test_join_affixed() {
        let types = ["home", "tut", "doc"];
        assert_eq!(join_affixed(&types, "#", "", ", "), "#home, #tut, #doc");
        assert_eq!(
            join_affixed(&types, "#", "-nav", ", "),
            "#home-nav, #tut-nav, #doc-nav"
        );
        assert_eq!(join_affixed::<&str>(&[], "#", "", ", "), "");
    }

    #[test]
    fn test_selectors() {
        let scheme = IdScheme::default();
        assert_eq!(scheme.menu_selector(&["tut", "doc"]), "#tut-nav, #doc-nav");
        assert_eq!(scheme.link_selector(&["tut"]), "#tut-nav [data-ch]");
    }

    #[test]
    fn test_custom_separator() {
        let scheme = IdScheme {
            separator: "_".to_string(),
            menu_suffix: "menu".to_string(),
            ..IdScheme::default()
        };
        assert_eq!(scheme.content_id("doc", 0), "doc_0");
        assert_eq!(scheme.menu_id("doc"), "doc_menu");
        assert_eq!(scheme.group_of("doc_menu"), Some("doc"));
    }
}
