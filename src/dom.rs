use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn add_change_listener(
    document: &web::Document,
    element_id: &str,
    handler: impl FnMut(web::Event) + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(
            Box::new(handler) as Box<dyn FnMut(web::Event)>
        );
        _ = el.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// File picked in the input that fired this change event, if any.
pub fn selected_file(ev: &web::Event) -> Option<web::File> {
    let input = ev.target()?.dyn_into::<web::HtmlInputElement>().ok()?;
    input.files()?.get(0)
}

#[inline]
pub fn set_text(document: &web::Document, element_id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        el.set_text_content(Some(text));
    }
}

/// Match the canvas backing store to its CSS box times devicePixelRatio.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    let Some(window) = web::window() else {
        return;
    };
    let dpr = window.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let width = (rect.width() * dpr) as u32;
    let height = (rect.height() * dpr) as u32;
    canvas.set_width(width.max(1));
    canvas.set_height(height.max(1));
}
