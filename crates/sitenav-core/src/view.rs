//! The seam between navigation state and whatever renders it.

/// Visibility operations over page elements.
///
/// Handles are resolved once when the registry is built and reused on every
/// click. Implementations must treat all operations as fire-and-forget: a
/// fade is started, never awaited.
pub trait SectionView {
    /// Opaque reference to one page element.
    type Handle: Clone;

    /// Look up an element by id.
    fn resolve(&self, id: &str) -> Option<Self::Handle>;

    /// Hide an element immediately.
    fn hide(&mut self, handle: &Self::Handle);

    /// Make an element visible with a fade.
    fn reveal(&mut self, handle: &Self::Handle);

    /// Hide every element carrying `class`.
    fn hide_class(&mut self, class: &str);
}
