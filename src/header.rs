use crate::constants::SEL_HEADER;
use crate::dom::{self, Styled};
use crate::frame;
use site_core::HeaderShadow;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shadow the header once the page scrolls past the threshold.
pub fn setup_header_scroll(document: &web::Document, threshold: f64) -> anyhow::Result<()> {
    let Some(header) = dom::query_one(document, SEL_HEADER)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        log::debug!("[header] no header");
        return Ok(());
    };
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let header = Styled(header);
    let shadow = Rc::new(RefCell::new(HeaderShadow::new(threshold)));

    // A restored scroll position should be reflected before the first scroll.
    shadow
        .borrow()
        .apply(&header, window.scroll_y().unwrap_or(0.0));

    let shadow_frame = shadow.clone();
    let update = Rc::new(Closure::wrap(Box::new(move |_ts: f64| {
        let y = web::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        shadow_frame.borrow_mut().on_frame(&header, y);
    }) as Box<dyn FnMut(f64)>));

    dom::listen_passive(&window, "scroll", move |_ev: web::Event| {
        if !shadow.borrow_mut().on_scroll() {
            return;
        }
        match frame::request_frame(&*update) {
            Some(h) => shadow.borrow_mut().arm(h),
            None => shadow.borrow_mut().abandon(),
        }
    });
    Ok(())
}
