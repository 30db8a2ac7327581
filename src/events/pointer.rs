use crate::core::PointerSignal;
use crate::dom;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Feed pointer movement and leave events into the shared signal. Handlers
/// only overwrite state; the frame loop picks it up on the next tick.
pub fn wire_pointer_signal(
    window: &web::Window,
    document: &web::Document,
    pointer: Rc<RefCell<PointerSignal>>,
) {
    wire_pointermove(window, pointer.clone());
    wire_pointerleave(document, pointer);
}

fn wire_pointermove(window: &web::Window, pointer: Rc<RefCell<PointerSignal>>) {
    let wnd = window.clone();
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let viewport = dom::viewport_size(&wnd);
        pointer.borrow_mut().on_move(pos, viewport);
    }) as Box<dyn FnMut(_)>);

    _ = window.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());

    closure.forget();
}

fn wire_pointerleave(document: &web::Document, pointer: Rc<RefCell<PointerSignal>>) {
    // Window never receives pointerleave; the root element does.
    let Some(root) = document.document_element() else {
        return;
    };
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        pointer.borrow_mut().on_leave();
    }) as Box<dyn FnMut(_)>);

    _ = root.add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());

    closure.forget();
}
