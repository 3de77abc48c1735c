//! Click wiring between page triggers and a shared navigator.

use std::{cell::RefCell, rc::Rc};

use sitenav_core::{NavConfig, NavTrigger, Navigator, Result};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{Element, MouseEvent};

use crate::dom::DomView;

/// Navigator shared between the page component and its click handlers.
pub type SharedNavigator = Rc<RefCell<Navigator<DomView>>>;

/// Build a navigator over the current document, show the default section
/// and attach click handlers to every trigger on the page.
pub fn start(config: &NavConfig) -> Result<SharedNavigator> {
    let view = DomView::from_window()?.with_display(&config.reveal_display);
    let mut navigator = Navigator::new(config, view)?;
    navigator.initialize();

    let navigator = Rc::new(RefCell::new(navigator));
    let bound = bind_triggers(&navigator);
    tracing::info!(triggers = bound, "section navigation ready");
    Ok(navigator)
}

/// Attach click handlers for group triggers and menu links.
///
/// Each handler carries its payload, resolved here once. Links whose menu
/// or index marker cannot be read are skipped. Returns the number of
/// handlers attached. Handlers live as long as the page.
pub fn bind_triggers(navigator: &SharedNavigator) -> usize {
    let (document, scheme, groups, menu_groups) = {
        let nav = navigator.borrow();
        let registry = nav.registry();
        (
            nav.view().document().clone(),
            registry.scheme().clone(),
            registry.group_names().map(String::from).collect::<Vec<_>>(),
            registry.menu_groups().map(String::from).collect::<Vec<_>>(),
        )
    };

    let mut bound = 0;
    for group in &groups {
        match document.get_element_by_id(scheme.trigger_id(group)) {
            Some(element) => {
                listen(&element, navigator, NavTrigger::group(group.as_str()));
                bound += 1;
            }
            None => tracing::debug!(group = %group, "no trigger for group"),
        }
    }

    if menu_groups.is_empty() {
        return bound;
    }

    let menu_selector = scheme.menu_selector(&menu_groups);
    let links = match document.query_selector_all(&scheme.link_selector(&menu_groups)) {
        Ok(links) => links,
        Err(err) => {
            tracing::warn!(error = ?err, "invalid menu link selector");
            return bound;
        }
    };

    for i in 0..links.length() {
        let Some(link) = links.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let menu_id = link.closest(&menu_selector).ok().flatten().map(|menu| menu.id());
        let marker = link.get_attribute(&scheme.index_attr);

        let trigger =
            menu_id.and_then(|id| NavTrigger::from_menu_link(&scheme, &id, marker.as_deref()));
        match trigger {
            Some(trigger) => {
                listen(&link, navigator, trigger);
                bound += 1;
            }
            None => tracing::debug!(?marker, "menu link without usable index"),
        }
    }

    bound
}

fn listen(target: &Element, navigator: &SharedNavigator, trigger: NavTrigger) {
    let navigator = Rc::clone(navigator);
    let handler = Closure::<dyn Fn(MouseEvent)>::new(move |ev: MouseEvent| {
        ev.prevent_default();
        let active = navigator.borrow_mut().dispatch(&trigger).clone();
        tracing::debug!(%trigger, %active, "navigated");
    });

    if let Err(err) =
        target.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())
    {
        tracing::warn!(error = ?err, "failed to attach click handler");
    }

    // Leak the closure to keep it alive
    handler.forget();
}
