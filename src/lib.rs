#![cfg(target_arch = "wasm32")]
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod camera;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod notify;
mod render;
mod scene;

use crate::audio::AudioDeck;
use crate::camera::OrbitCamera;
use crate::core::{Transport, Turntable};

// Keep the canvas backing store at CSS size * devicePixelRatio; the frame
// loop picks the new size up and reconfigures the surface and camera aspect.
fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let tracked = canvas.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&tracked);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    }
    on_resize.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("vinyl-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?
        .dyn_into()
        .map_err(|_| anyhow::anyhow!("#app-canvas is not a canvas"))?;

    wire_canvas_resize(&canvas);

    // Player state: constructed once, alive for the whole session
    let turntable = Rc::new(RefCell::new(Turntable::new()));
    let transport = Rc::new(RefCell::new(Transport::new()));
    let deck = Rc::new(RefCell::new(AudioDeck::new()));
    let aspect = canvas.width() as f32 / canvas.height().max(1) as f32;
    let orbit = Rc::new(RefCell::new(OrbitCamera::new(aspect)));

    events::wire_controls(events::ControlsWiring {
        document: document.clone(),
        transport,
        turntable: turntable.clone(),
        deck,
    });
    events::wire_orbit_controls(events::OrbitWiring {
        canvas: canvas.clone(),
        camera: orbit.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        turntable,
        camera: orbit,
        scene: scene::turntable_model(),
        canvas: canvas.clone(),
        gpu,
        last_instant: Instant::now(),
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
