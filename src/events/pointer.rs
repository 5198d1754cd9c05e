//! Pointer-driven orbit: drag to rotate around the turntable, wheel to zoom.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::camera::OrbitCamera;

#[derive(Default, Clone, Copy)]
struct DragState {
    active: bool,
    last_x: f32,
    last_y: f32,
}

#[derive(Clone)]
pub struct OrbitWiring {
    pub canvas: web::HtmlCanvasElement,
    pub camera: Rc<RefCell<OrbitCamera>>,
}

pub fn wire_orbit_controls(w: OrbitWiring) {
    let drag = Rc::new(RefCell::new(DragState::default()));
    wire_pointerdown(&w, &drag);
    wire_pointermove(&w, &drag);
    wire_pointerup(&drag);
    wire_wheel(&w);
}

fn wire_pointerdown(w: &OrbitWiring, drag: &Rc<RefCell<DragState>>) {
    let canvas = w.canvas.clone();
    let canvas_for_listener = w.canvas.clone();
    let drag = drag.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ds = drag.borrow_mut();
        ds.active = true;
        ds.last_x = ev.client_x() as f32;
        ds.last_y = ev.client_y() as f32;
        _ = canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas_for_listener
        .add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointermove(w: &OrbitWiring, drag: &Rc<RefCell<DragState>>) {
    let camera = w.camera.clone();
    let drag = drag.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut ds = drag.borrow_mut();
        if !ds.active {
            return;
        }
        let x = ev.client_x() as f32;
        let y = ev.client_y() as f32;
        camera.borrow_mut().rotate(x - ds.last_x, y - ds.last_y);
        ds.last_x = x;
        ds.last_y = y;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointerup(drag: &Rc<RefCell<DragState>>) {
    let drag = drag.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag.borrow_mut().active = false;
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(w: &OrbitWiring) {
    let camera = w.camera.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        // delta_y is in pixels for most browsers; scale to scroll steps
        camera.borrow_mut().zoom(ev.delta_y() as f32 * 0.01);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = w
        .canvas
        .add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    closure.forget();
}
