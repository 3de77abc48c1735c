//! Browser document as a section view.

use sitenav_core::{NavError, Result, SectionView};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

/// Class added to an element each time it is revealed. Style it with a
/// short opacity animation to get the fade.
pub const FADE_CLASS: &str = "sitenav-fade-in";

/// Default stylesheet for [`FADE_CLASS`].
pub const FADE_CSS: &str = "\
@keyframes sitenav-fade-in { from { opacity: 0; } to { opacity: 1; } }
.sitenav-fade-in { animation: sitenav-fade-in 400ms ease-in; }";

/// [`SectionView`] over the live document.
///
/// Hiding sets an inline `display: none`. Revealing drops it again, falls
/// back to an explicit display value when the stylesheet still hides the
/// element, and restarts the fade class; the animation runs on its own.
#[derive(Debug, Clone)]
pub struct DomView {
    window: Window,
    document: Document,
    display: String,
}

impl DomView {
    pub fn new(window: Window) -> Result<Self> {
        let document = window
            .document()
            .ok_or_else(|| NavError::dom("window has no document"))?;
        Ok(Self {
            window,
            document,
            display: "block".to_string(),
        })
    }

    /// View over the current window's document.
    pub fn from_window() -> Result<Self> {
        let window = web_sys::window().ok_or_else(|| NavError::dom("no window"))?;
        Self::new(window)
    }

    /// Display value forced on revealed elements the stylesheet hides.
    pub fn with_display(mut self, display: impl Into<String>) -> Self {
        self.display = display.into();
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Whether the element renders, judged by its computed style.
    pub fn is_displayed(&self, element: &HtmlElement) -> bool {
        match self.window.get_computed_style(element) {
            Ok(Some(style)) => style.get_property_value("display").unwrap_or_default() != "none",
            _ => true,
        }
    }
}

impl SectionView for DomView {
    type Handle = HtmlElement;

    fn resolve(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)?
            .dyn_into::<HtmlElement>()
            .ok()
    }

    fn hide(&mut self, handle: &HtmlElement) {
        let _ = handle.style().set_property("display", "none");
    }

    fn reveal(&mut self, handle: &HtmlElement) {
        let style = handle.style();
        let _ = style.remove_property("display");
        if !self.is_displayed(handle) {
            let _ = style.set_property("display", &self.display);
        }

        let classes = handle.class_list();
        let _ = classes.remove_1(FADE_CLASS);
        // Force a reflow so the animation starts over.
        let _ = handle.offset_width();
        let _ = classes.add_1(FADE_CLASS);
    }

    fn hide_class(&mut self, class: &str) {
        let elements = self.document.get_elements_by_class_name(class);
        for i in 0..elements.length() {
            if let Some(element) = elements
                .item(i)
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                self.hide(&element);
            }
        }
    }
}
