#![cfg(target_arch = "wasm32")]
use site_core::{Ambient, FxConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod header;
mod reveal;
mod scroll;
mod storage;
mod theme;
mod ui;

/// Configuration overrides from the root element's dataset.
fn read_config(document: Option<&web::Document>) -> (FxConfig, Vec<site_core::ConfigError>) {
    let dataset = document
        .and_then(dom::root_element)
        .map(|root| root.dataset());
    FxConfig::from_lookup(|key| dataset.as_ref().and_then(|d| d.get(key)))
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    let document = dom::window_document();
    let (cfg, config_errors) = read_config(document.as_ref());
    if let Some(level) = cfg.log_level.to_level() {
        console_log::init_with_level(level).ok();
    }
    log::info!("site-web starting");
    for e in &config_errors {
        log::warn!("[config] ignored {}", e);
    }

    let Some(document) = document else {
        log::error!("init error: no document");
        return Ok(());
    };
    if document.ready_state() == "loading" {
        dom::listen(&document, "DOMContentLoaded", move |_ev: web::Event| {
            run_init(cfg.clone());
        });
    } else {
        run_init(cfg);
    }
    Ok(())
}

fn run_init(cfg: FxConfig) {
    spawn_local(async move {
        if let Err(e) = init(&cfg).await {
            log::error!("init error: {:?}", e);
        }
    });
}

/// Wire every component. A component that fails is logged and skipped; the
/// rest still initialise.
async fn init(cfg: &FxConfig) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let ambient: Ambient = dom::ambient(&window);
    log::debug!("[init] ambient={:?}", ambient);

    let mut steps: Vec<(&str, anyhow::Result<()>)> = vec![
        ("theme", theme::setup_theme_toggle(&document, &ambient)),
        ("scroll", scroll::setup_smooth_scroll(&document, cfg.scroll)),
        ("year", ui::stamp_year(&document)),
        (
            "reveal",
            reveal::setup_reveal(&document, ambient.reduced_motion, cfg),
        ),
    ];

    if ambient.motion_enabled() {
        steps.push(("spotlight", events::wire_spotlight(&document)));
    }
    if ambient.element_effects_enabled() {
        steps.push(("card-hover", events::wire_card_hover(&document)));
        steps.push(("tilt", events::wire_tilt(&document, cfg.tilt_max_deg)));
    } else {
        log::debug!("[init] element pointer effects disabled");
    }
    steps.push((
        "stagger",
        reveal::setup_staggered_reveal(&document, ambient.reduced_motion, cfg),
    ));
    steps.push((
        "header",
        header::setup_header_scroll(&document, cfg.header_shadow_threshold),
    ));

    for (name, result) in steps {
        if let Err(e) = result {
            log::warn!("[init] {} skipped: {:?}", name, e);
        }
    }
    Ok(())
}
