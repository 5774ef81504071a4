use crate::constants::*;
use crate::dom;
use site_core::{constants::CLASS_REVEALED, parse_delay, stagger_delay, FxConfig, MotionMode, RevealEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Publish the motion mode and observe `[data-reveal]` targets until each
/// has been revealed once.
pub fn setup_reveal(document: &web::Document, reduced_motion: bool, cfg: &FxConfig) -> anyhow::Result<()> {
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no root element"))?;
    let mode = MotionMode::from_reduced(reduced_motion);
    _ = root.dataset().set(DATA_MOTION, mode.as_str());

    if mode == MotionMode::Reduced {
        log::info!("[reveal] reduced motion; targets left as-is");
        return Ok(());
    }

    let targets = dom::query_all(document, SEL_REVEAL);
    let engine = RevealEngine::new(
        mode,
        targets
            .iter()
            .map(|el| parse_delay(el.get_attribute(ATTR_REVEAL_DELAY).as_deref())),
    );
    if !engine.should_observe() {
        return Ok(());
    }
    let engine = Rc::new(RefCell::new(engine));
    let targets = Rc::new(targets);

    let engine_cb = engine.clone();
    let targets_cb = targets.clone();
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let Some(index) = targets_cb.iter().position(|t| *t == target) else {
                    continue;
                };
                let Some(delay) = engine_cb
                    .borrow_mut()
                    .on_entry(index, entry.is_intersecting())
                else {
                    continue;
                };
                observer.unobserve(&target);
                schedule_reveal(engine_cb.clone(), target, index, delay);
            }
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(&cfg.reveal_root_margin);
    opts.set_threshold(&JsValue::from_f64(cfg.reveal_threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    callback.forget();

    for el in targets.iter() {
        observer.observe(el);
    }
    log::info!("[reveal] observing {} targets", targets.len());
    Ok(())
}

fn finish_reveal(engine: &RefCell<RevealEngine>, target: &web::Element, index: usize) {
    if engine.borrow_mut().complete(index) {
        _ = target.class_list().add_1(CLASS_REVEALED);
    }
}

/// Reveal after `delay_ms`. The target is no longer observed, so a timer
/// that cannot be set reveals it right away.
fn schedule_reveal(engine: Rc<RefCell<RevealEngine>>, target: web::Element, index: usize, delay_ms: u32) {
    let engine_timer = engine.clone();
    let target_timer = target.clone();
    let reveal = Closure::once_into_js(move || {
        finish_reveal(&engine_timer, &target_timer, index);
    });
    let scheduled = web::window().map(|w| {
        w.set_timeout_with_callback_and_timeout_and_arguments_0(
            reveal.unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        )
    });
    if !matches!(scheduled, Some(Ok(_))) {
        log::warn!("[reveal] timer unavailable; revealing target {} now", index);
        finish_reveal(&engine, &target, index);
    }
}

/// Give each child of a card group a transition delay by its position.
pub fn setup_staggered_reveal(document: &web::Document, reduced_motion: bool, cfg: &FxConfig) -> anyhow::Result<()> {
    if reduced_motion {
        return Ok(());
    }
    let groups = dom::query_all(document, SEL_STAGGER_GROUPS);
    for group in &groups {
        let children = group.children();
        for i in 0..children.length() {
            let Some(child) = children
                .item(i)
                .and_then(|c| c.dyn_into::<web::HtmlElement>().ok())
            else {
                continue;
            };
            _ = child
                .style()
                .set_property("transition-delay", &stagger_delay(i as usize, cfg.stagger_step_ms));
        }
    }
    log::debug!("[reveal] staggered {} groups", groups.len());
    Ok(())
}
