use crate::constants::*;
use crate::dom::{self, Styled};
use crate::frame;
use glam::DVec2;
use site_core::{glow_leave, glow_move, Spotlight, Tilt};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::PointerEvent) -> DVec2 {
    DVec2::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Page-wide spotlight: latest pointer position on the root element, at
/// most once per frame.
pub fn wire_spotlight(document: &web::Document) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let root = dom::root_element(document).ok_or_else(|| anyhow::anyhow!("no root element"))?;
    let root = Styled(root);
    let spot = Rc::new(RefCell::new(Spotlight::new()));

    let spot_frame = spot.clone();
    let root_frame = root.clone();
    let commit = Rc::new(Closure::wrap(Box::new(move |_ts: f64| {
        spot_frame.borrow_mut().on_frame(&root_frame);
    }) as Box<dyn FnMut(f64)>));

    let spot_move = spot.clone();
    let root_leave = root.clone();
    dom::listen_passive(&window, "pointermove", move |ev: web::PointerEvent| {
        if !spot_move.borrow_mut().on_move(client_pos(&ev)) {
            return;
        }
        match frame::request_frame(&*commit) {
            Some(h) => spot_move.borrow_mut().arm(h),
            None => spot_move.borrow_mut().abandon(),
        }
    });

    dom::listen(&root.0, "pointerleave", move |_ev: web::PointerEvent| {
        let pending = spot.borrow_mut().on_leave(&root_leave);
        frame::cancel_frame(pending);
    });
    log::info!("[pointer] spotlight wired");
    Ok(())
}

/// Hover glow that follows the pointer across each card.
pub fn wire_card_hover(document: &web::Document) -> anyhow::Result<()> {
    let cards = dom::query_html_all(document, SEL_GLOW_CARDS);
    for card in &cards {
        let styled = Styled(card.clone());
        dom::listen(card, "pointermove", move |ev: web::PointerEvent| {
            glow_move(&styled, dom::bounds_of(&styled.0), client_pos(&ev));
        });
        let styled = Styled(card.clone());
        dom::listen(card, "pointerleave", move |_ev: web::PointerEvent| {
            glow_leave(&styled);
        });
    }
    log::info!("[pointer] hover glow on {} cards", cards.len());
    Ok(())
}

/// 3D tilt for cards and panels.
pub fn wire_tilt(document: &web::Document, max_deg: f64) -> anyhow::Result<()> {
    let elements = dom::query_html_all(document, SEL_TILT_TARGETS);
    if elements.is_empty() {
        return Ok(());
    }
    for el in &elements {
        _ = el.dataset().set(DATA_TILT, "true");
        wire_tilt_element(el, max_deg);
    }
    log::info!("[pointer] tilt on {} elements (max {}deg)", elements.len(), max_deg);
    Ok(())
}

fn wire_tilt_element(el: &web::HtmlElement, max_deg: f64) {
    let styled = Styled(el.clone());
    let tilt = Rc::new(RefCell::new(Tilt::new(max_deg)));

    let tilt_frame = tilt.clone();
    let styled_frame = styled.clone();
    let commit = Rc::new(Closure::wrap(Box::new(move |_ts: f64| {
        let bounds = dom::bounds_of(&styled_frame.0);
        tilt_frame.borrow_mut().on_frame(&styled_frame, bounds);
    }) as Box<dyn FnMut(f64)>));

    let tilt_enter = tilt.clone();
    let styled_enter = styled.clone();
    dom::listen(el, "pointerenter", move |_ev: web::PointerEvent| {
        tilt_enter.borrow_mut().on_enter(&styled_enter);
    });

    let tilt_leave = tilt.clone();
    let styled_leave = styled;
    dom::listen(el, "pointerleave", move |_ev: web::PointerEvent| {
        let pending = tilt_leave.borrow_mut().on_leave(&styled_leave);
        frame::cancel_frame(pending);
    });

    dom::listen_passive(el, "pointermove", move |ev: web::PointerEvent| {
        if !tilt.borrow_mut().on_move(client_pos(&ev)) {
            return;
        }
        match frame::request_frame(&*commit) {
            Some(h) => tilt.borrow_mut().arm(h),
            None => tilt.borrow_mut().abandon(),
        }
    });
}
