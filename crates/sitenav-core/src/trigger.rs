//! Typed click payloads attached to triggers when they are registered.

use std::fmt;

use crate::ids::IdScheme;

/// What a trigger click asks the navigator to do.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum NavTrigger {
    /// Open a group at its first sub-section and show its menu.
    Group { group: String },
    /// Show one sub-section. Menus follow only when `group` is not the
    /// active group.
    Section { group: String, index: usize },
}

impl NavTrigger {
    pub fn group(group: impl Into<String>) -> Self {
        Self::Group {
            group: group.into(),
        }
    }

    pub fn section(group: impl Into<String>, index: usize) -> Self {
        Self::Section {
            group: group.into(),
            index,
        }
    }

    /// Payload for a link inside a navigation menu.
    ///
    /// The group comes from the menu id (`tut-nav` -> `tut`), the index from
    /// the link's marker attribute. Returns `None` when the marker is absent
    /// or not a number; such links are left inert.
    pub fn from_menu_link(scheme: &IdScheme, menu_id: &str, marker: Option<&str>) -> Option<Self> {
        let group = scheme.group_of(menu_id)?;
        let index = marker?.trim().parse().ok()?;
        Some(Self::section(group, index))
    }
}

impl fmt::Display for NavTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Group { group } => write!(f, "group {group}"),
            Self::Section { group, index } => write!(f, "section {group}/{index}"),
        }
    }
}
