#![cfg(target_arch = "wasm32")]
use crate::core::PointerSignal;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod blob;
mod clock;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod starfield;
mod surface;
mod theme;
mod toast;

thread_local! {
    static FRAME_LOOP: RefCell<Option<frame::FrameLoop>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starfield starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Show a short message in the `#toast` slot.
#[wasm_bindgen]
pub fn show_toast(message: &str, duration_ms: Option<u32>) {
    toast::notify(message, duration_ms.map(|ms| Duration::from_millis(ms as u64)));
}

/// Stop the animation loop for good.
#[wasm_bindgen]
pub fn stop_animation() {
    FRAME_LOOP.with(|l| {
        if let Some(frame_loop) = l.borrow_mut().take() {
            frame_loop.stop();
        }
    });
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Widgets are independent: a missing slot disables only that widget.
    if !clock::start(&document, &window) {
        log::info!("[clock] no #{} element", constants::CLOCK_ID);
    }
    if !theme::attach(&document, &window) {
        log::info!("[theme] no #{} element", constants::THEME_TOGGLE_ID);
    }
    if !toast::install(&document) {
        log::info!("[toast] no #{} element", constants::TOAST_ID);
    }

    let pointer = Rc::new(RefCell::new(PointerSignal::default()));
    events::wire_pointer_signal(&window, &document, pointer.clone());

    let starfield = starfield::Starfield::attach(&document);
    if let Some(sf) = &starfield {
        events::wire_resize(&window, sf.surface.clone());
    }
    let blob = blob::Blob::attach(&document, &window);

    let frame_loop = frame::FrameLoop::start(frame::FrameContext {
        window,
        pointer,
        starfield,
        blob,
    });
    FRAME_LOOP.with(|l| *l.borrow_mut() = Some(frame_loop));
    Ok(())
}
