use crate::constants::{TOAST_ID, TOAST_SHOW_CLASS};
use crate::core::ToastState;
use instant::Instant;
use std::cell::RefCell;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Toast {
    el: web::Element,
    state: ToastState,
    timer: Option<i32>,
}

thread_local! {
    static TOAST: RefCell<Option<Toast>> = const { RefCell::new(None) };
}

/// Bind the `#toast` slot. Returns false when the page has none, in which
/// case `notify` is a no-op.
pub fn install(document: &web::Document) -> bool {
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        return false;
    };
    TOAST.with(|t| {
        *t.borrow_mut() = Some(Toast {
            el,
            state: ToastState::default(),
            timer: None,
        })
    });
    true
}

/// Show `message` for `duration` (default 1400 ms). A newer call replaces
/// the text and restarts the hide timer.
pub fn notify(message: &str, duration: Option<Duration>) {
    let Some(window) = web::window() else {
        return;
    };
    TOAST.with(|t| {
        let mut slot = t.borrow_mut();
        let Some(toast) = slot.as_mut() else {
            return;
        };
        let now = Instant::now();
        let generation = toast.state.notify(message, duration, now);
        toast.el.set_text_content(Some(toast.state.message()));
        _ = toast.el.class_list().add_1(TOAST_SHOW_CLASS);

        if let Some(handle) = toast.timer.take() {
            window.clear_timeout_with_handle(handle);
        }
        let delay_ms = toast.state.hide_delay(now).as_millis().min(i32::MAX as u128) as i32;
        let hide = Closure::once_into_js(move || expire(generation));
        toast.timer = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(hide.unchecked_ref(), delay_ms)
            .ok();
    });
}

fn expire(generation: u64) {
    TOAST.with(|t| {
        if let Some(toast) = t.borrow_mut().as_mut() {
            if toast.state.expire(generation) {
                toast.timer = None;
                _ = toast.el.class_list().remove_1(TOAST_SHOW_CLASS);
            }
        }
    });
}
