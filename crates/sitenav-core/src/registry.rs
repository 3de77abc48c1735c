//! Lookup table from (group, index) to resolved element handles.

use crate::{config::NavConfig, ids::IdScheme, view::SectionView};

#[derive(Debug, Clone)]
struct GroupEntry<H> {
    name: String,
    sections: Vec<Option<H>>,
    menu: Option<H>,
}

/// Element handles for every registered group, resolved once at startup.
#[derive(Debug, Clone)]
pub struct SectionRegistry<H> {
    groups: Vec<GroupEntry<H>>,
    scheme: IdScheme,
}

impl<H: Clone> SectionRegistry<H> {
    /// Resolve every content panel and menu named by `config` through `view`.
    ///
    /// Every index slot keeps its place even when the element is missing, so
    /// panels after a gap in the numbering stay reachable. Groups without a
    /// fixed section count are discovered over `0..max_sections` and trimmed
    /// after their last existing panel. The home group never gets a menu.
    pub fn build<V>(config: &NavConfig, view: &V) -> Self
    where
        V: SectionView<Handle = H>,
    {
        let scheme = config.ids.clone();
        let groups = config
            .groups
            .iter()
            .map(|group| {
                let discovered = group.sections.is_none();
                let count = group.sections.unwrap_or(config.max_sections);
                let mut sections: Vec<Option<H>> = (0..count)
                    .map(|index| view.resolve(&scheme.content_id(&group.name, index)))
                    .collect();
                if discovered {
                    while matches!(sections.last(), Some(None)) {
                        sections.pop();
                    }
                }

                let missing = sections.iter().filter(|s| s.is_none()).count();
                if missing > 0 {
                    tracing::warn!(group = %group.name, missing, "sections not found on page");
                }

                let menu = if config.is_home(&group.name) {
                    None
                } else {
                    view.resolve(&scheme.menu_id(&group.name))
                };

                tracing::debug!(
                    group = %group.name,
                    sections = sections.len(),
                    has_menu = menu.is_some(),
                    "registered section group"
                );

                GroupEntry {
                    name: group.name.clone(),
                    sections,
                    menu,
                }
            })
            .collect();

        Self { groups, scheme }
    }

    fn entry(&self, group: &str) -> Option<&GroupEntry<H>> {
        self.groups.iter().find(|g| g.name == group)
    }

    /// Handle of the content panel for `(group, index)`, if it exists.
    pub fn section(&self, group: &str, index: usize) -> Option<&H> {
        self.entry(group)?.sections.get(index)?.as_ref()
    }

    /// Handle of a group's navigation menu, if it has one.
    pub fn menu(&self, group: &str) -> Option<&H> {
        self.entry(group)?.menu.as_ref()
    }

    /// Number of index slots in `group`, zero for unknown groups.
    pub fn section_count(&self, group: &str) -> usize {
        self.entry(group).map_or(0, |g| g.sections.len())
    }

    /// Registered group names, in page order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.name.as_str())
    }

    /// Names of groups that have a navigation menu.
    pub fn menu_groups(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .filter(|g| g.menu.is_some())
            .map(|g| g.name.as_str())
    }

    /// Every resolved content panel.
    pub fn sections(&self) -> impl Iterator<Item = &H> {
        self.groups
            .iter()
            .flat_map(|g| g.sections.iter().flatten())
    }

    /// Every resolved navigation menu.
    pub fn menus(&self) -> impl Iterator<Item = &H> {
        self.groups.iter().filter_map(|g| g.menu.as_ref())
    }

    /// The id scheme handles were resolved with.
    pub fn scheme(&self) -> &IdScheme {
        &self.scheme
    }
}
