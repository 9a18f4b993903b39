#![cfg(target_arch = "wasm32")]
//! WASM front-end for the density simulation widget.
//!
//! Reads widget configuration from `data-*` attributes on the container
//! element, feeds DOM input events into the core, binds the two sequencer
//! targets to their SVG elements, and drives playback from a
//! requestAnimationFrame loop. The SVG artwork itself lives in the host
//! page; this crate only touches ids and attributes.

pub mod dom;
pub mod targets;

use instant::Instant;
use sim_core::{DensitySim, WidgetConfig};
use std::cell::RefCell;
use std::rc::Rc;
use targets::SvgHandle;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

// Element ids the host page provides.
const CONTAINER_ID: &str = "density-sim";
const SPHERE_ID: &str = "sim-sphere";
const BEAKER_LIQUID_ID: &str = "sim-beaker-liquid";
const MAIN_LIQUID_ID: &str = "sim-liquid";
const SELECT_LIQUID_ID: &str = "select-liquid";
const SELECT_SOLID_ID: &str = "select-solid";
const CUSTOM_LIQUID_ID: &str = "custom-liquid-density";
const CUSTOM_SOLID_ID: &str = "custom-solid-density";
const VOLUME_ID: &str = "sphere-volume";
const SUBMIT_ID: &str = "submit-btn";
const RESET_ID: &str = "reset-btn";
const SUBMERGED_READOUT_ID: &str = "submerged-readout";
const DISPLACED_READOUT_ID: &str = "displaced-readout";

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("sim-web starting");

    if let Err(e) = init() {
        log::error!("init error: {e:?}");
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::require_element(&document, CONTAINER_ID)?;

    let config = widget_config_from(&container);
    let mut sim = DensitySim::new(config).map_err(|e| anyhow::anyhow!("bad option list: {e}"))?;

    sim.bind_sphere(Box::new(SvgHandle::new(dom::require_element(
        &document, SPHERE_ID,
    )?)));
    sim.bind_beaker_liquid(Box::new(SvgHandle::new(dom::require_element(
        &document,
        BEAKER_LIQUID_ID,
    )?)));

    let sim = Rc::new(RefCell::new(sim));
    sync_display(&document, &sim.borrow());
    wire_inputs(&document, &sim);
    run_frame_loop(sim);
    Ok(())
}

fn widget_config_from(container: &web::Element) -> WidgetConfig {
    let attr = |name: &str, default: &str| {
        container
            .get_attribute(name)
            .unwrap_or_else(|| default.to_owned())
    };
    WidgetConfig {
        liquid_options_json: attr("data-liquid-options", "[]"),
        solid_options_json: attr("data-solid-options", "[]"),
        default_liquid: attr("data-default-liquid", ""),
        default_solid: attr("data-default-solid", ""),
        custom_liquid_color: attr("data-custom-liquid-color", "Blue"),
        custom_solid_color: attr("data-custom-solid-color", "Red"),
    }
}

fn wire_inputs(document: &web::Document, sim: &Rc<RefCell<DensitySim>>) {
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_value_listener(document, SELECT_LIQUID_ID, move |value| {
            if let Err(e) = sim.borrow_mut().select_liquid(&value) {
                log::warn!("{e}");
                return;
            }
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_value_listener(document, SELECT_SOLID_ID, move |value| {
            if let Err(e) = sim.borrow_mut().select_solid(&value) {
                log::warn!("{e}");
                return;
            }
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_value_listener(document, CUSTOM_LIQUID_ID, move |value| {
            sim.borrow_mut().set_custom_liquid_density(&value);
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_value_listener(document, CUSTOM_SOLID_ID, move |value| {
            sim.borrow_mut().set_custom_solid_density(&value);
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_value_listener(document, VOLUME_ID, move |value| {
            sim.borrow_mut().set_sphere_volume(&value);
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_click_listener(document, SUBMIT_ID, move || {
            sim.borrow_mut().submit();
            sync_display(&doc, &sim.borrow());
        });
    }
    {
        let sim = sim.clone();
        let doc = document.clone();
        dom::add_click_listener(document, RESET_ID, move || {
            if let Err(e) = sim.borrow_mut().reset() {
                log::warn!("{e}");
                return;
            }
            sync_display(&doc, &sim.borrow());
        });
    }
}

/// Push the read model back to the page after a state change.
fn sync_display(document: &web::Document, sim: &DensitySim) {
    dom::set_text(document, SUBMERGED_READOUT_ID, &sim.submerged_volume_display());
    dom::set_text(document, DISPLACED_READOUT_ID, &sim.displaced_mass_display());
    dom::set_attr(document, SPHERE_ID, "fill", sim.solid_color());
    dom::set_attr(document, MAIN_LIQUID_ID, "fill", sim.liquid_color());
    dom::set_attr(document, BEAKER_LIQUID_ID, "fill", sim.liquid_color());
    dom::set_disabled(document, CUSTOM_LIQUID_ID, !sim.is_custom_liquid());
    dom::set_disabled(document, CUSTOM_SOLID_ID, !sim.is_custom_solid());
}

/// Drive the sequencer from requestAnimationFrame, feeding it wall-clock
/// frame deltas.
fn run_frame_loop(sim: Rc<RefCell<DensitySim>>) {
    let closure: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let closure_inner = closure.clone();
    let mut last = Instant::now();

    *closure.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let now = Instant::now();
        let dt = now.duration_since(last).as_secs_f64();
        last = now;
        sim.borrow_mut().advance_animation(dt);
        request_frame(&closure_inner);
    }) as Box<dyn FnMut()>));
    request_frame(&closure);
}

fn request_frame(closure: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(window), Some(cb)) = (web::window(), closure.borrow().as_ref()) {
        let _ = window.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
