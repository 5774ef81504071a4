use crate::constants::{DATA_THEME, SEL_THEME_TOGGLE};
use crate::dom;
use crate::storage::LocalStore;
use site_core::{Ambient, ThemeController, ThemeState};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Apply the initial theme and wire the toggle control. A page without a
/// toggle keeps whatever theme its markup declares.
pub fn setup_theme_toggle(document: &web::Document, ambient: &Ambient) -> anyhow::Result<()> {
    let Some(button) = dom::query_one(document, SEL_THEME_TOGGLE) else {
        log::debug!("[theme] no toggle control");
        return Ok(());
    };
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no root element"))?;

    let mut state = ThemeState::new();
    let root_hook = root.clone();
    state.subscribe(move |theme| {
        _ = root_hook.dataset().set(DATA_THEME, theme.as_str());
    });

    let mut controller = ThemeController::new(LocalStore, state);
    let initial = controller.resolve_initial(ambient);
    controller.apply(initial);
    log::info!("[theme] initial={}", initial.as_str());

    let controller = Rc::new(RefCell::new(controller));
    dom::listen(&button, "click", move |_ev: web::MouseEvent| {
        let applied = root.dataset().get(DATA_THEME);
        let next = controller.borrow_mut().toggle(applied.as_deref());
        log::debug!("[theme] toggled to {}", next.as_str());
    });
    Ok(())
}
