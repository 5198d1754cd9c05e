use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera::OrbitCamera;
use crate::core::Turntable;
use crate::render::{self, GpuState};
use crate::scene::SceneModel;

pub struct FrameContext<'a> {
    pub turntable: Rc<RefCell<Turntable>>,
    pub camera: Rc<RefCell<OrbitCamera>>,
    pub scene: SceneModel,
    pub canvas: web::HtmlCanvasElement,
    pub gpu: Option<GpuState<'a>>,
    pub last_instant: Instant,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt = now - self.last_instant;
        self.last_instant = now;
        let dt_sec = dt.as_secs_f32();

        // Spin first, then draw at the new angle
        let angle = {
            let mut t = self.turntable.borrow_mut();
            t.advance(dt_sec);
            t.angle()
        };

        let w = self.canvas.width();
        let h = self.canvas.height();
        let view_proj = {
            let mut cam = self.camera.borrow_mut();
            cam.set_aspect(w as f32 / h.max(1) as f32);
            cam.update(dt_sec);
            cam.view_proj()
        };

        let instances: Vec<render::Instance> = self
            .scene
            .instances(angle)
            .into_iter()
            .map(|(model, color)| render::Instance {
                model: model.to_cols_array_2d(),
                color,
            })
            .collect();

        if let Some(g) = &mut self.gpu {
            g.resize_if_needed(w, h);
            if let Err(e) = g.render(view_proj, &instances) {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<GpuState<'static>> {
    // The surface borrows the canvas for 'static; a leaked clone satisfies
    // that for the lifetime of the page.
    let canvas: &'static web::HtmlCanvasElement = Box::leak(Box::new(canvas.clone()));
    match GpuState::new(canvas).await {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

// requestAnimationFrame loop: the closure reschedules itself through a
// shared slot so it can hand its own reference to the next frame.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let slot_for_tick = slot.clone();
    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&slot_for_tick);
    }) as Box<dyn FnMut()>));
    request_frame(&slot);
}

fn request_frame(slot: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let Some(w) = web::window() {
        if let Some(cb) = slot.borrow().as_ref() {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }
}
