use crate::constants::SEL_ANCHORS;
use crate::dom;
use crate::frame;
use site_core::{anchor_id, ScrollMode, ScrollNavigator, ScrollSettings, ScrollTick};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys as web;

type FrameLoop = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Intercept same-page anchor clicks and scroll to their target.
pub fn setup_smooth_scroll(document: &web::Document, settings: ScrollSettings) -> anyhow::Result<()> {
    let anchors = dom::query_all(document, SEL_ANCHORS);
    if anchors.is_empty() {
        log::debug!("[scroll] no in-page anchors");
        return Ok(());
    }

    if settings.mode == ScrollMode::Native {
        if let Some(root) = dom::root_element(document) {
            _ = root.style().set_property("scroll-behavior", "smooth");
        }
    }

    let navigator = Rc::new(RefCell::new(ScrollNavigator::new()));
    let tick = build_frame_loop(navigator.clone());

    for link in &anchors {
        let link_for_click = link.clone();
        let document = document.clone();
        let navigator = navigator.clone();
        let tick = tick.clone();
        dom::listen(link, "click", move |ev: web::MouseEvent| {
            let Some(href) = link_for_click.get_attribute("href") else {
                return;
            };
            let Some(id) = anchor_id(&href) else {
                return;
            };
            let Some(target) = document.get_element_by_id(id) else {
                return;
            };
            ev.prevent_default();

            match settings.mode {
                ScrollMode::Native => {
                    let opts = web::ScrollIntoViewOptions::new();
                    opts.set_behavior(web::ScrollBehavior::Smooth);
                    opts.set_block(web::ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&opts);
                    push_history(&href);
                }
                ScrollMode::Eased => {
                    let Some(window) = web::window() else {
                        return;
                    };
                    let start_y = window.scroll_y().unwrap_or(0.0);
                    let top = target.get_bounding_client_rect().top();
                    let needs_frame = navigator.borrow_mut().begin(
                        href.clone(),
                        start_y,
                        top,
                        settings.effective_offset(),
                        settings.duration_ms,
                    );
                    if needs_frame && !request(&tick) {
                        navigator.borrow_mut().halt();
                    }
                }
            }
        });
    }
    log::info!(
        "[scroll] anchors={} mode={:?}",
        anchors.len(),
        settings.mode
    );
    Ok(())
}

/// One frame callback shared by every anchor; it re-requests itself until
/// the navigator reports the animation finished.
fn build_frame_loop(navigator: Rc<RefCell<ScrollNavigator>>) -> FrameLoop {
    let tick: FrameLoop = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
        let step = navigator.borrow_mut().tick(now);
        match step {
            ScrollTick::Idle => {}
            ScrollTick::Continue { y } => {
                scroll_to(y);
                if !request(&tick_clone) {
                    navigator.borrow_mut().halt();
                }
            }
            ScrollTick::Finish { y, href } => {
                scroll_to(y);
                push_history(&href);
            }
        }
    }) as Box<dyn FnMut(f64)>));
    tick
}

fn request(tick: &FrameLoop) -> bool {
    tick.borrow()
        .as_ref()
        .and_then(frame::request_frame)
        .is_some()
}

#[inline]
fn scroll_to(y: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, y);
    }
}

fn push_history(href: &str) {
    let Some(history) = web::window().and_then(|w| w.history().ok()) else {
        return;
    };
    if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(href)) {
        log::warn!("[scroll] history update failed: {:?}", e);
    }
}
