use crate::surface::DrawingSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keep the canvas backing store in step with the viewport.
pub fn wire_resize(window: &web::Window, surface: Rc<RefCell<DrawingSurface>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        if let Err(e) = surface.borrow_mut().resize() {
            log::warn!("[surface] resize failed: {:?}", e);
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}
