use crate::constants::{CLOCK_ID, CLOCK_PERIOD_MS};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Write the local time into `#time` now and every 30 seconds. Returns false
/// when there is no slot to write into.
pub fn start(document: &web::Document, window: &web::Window) -> bool {
    let Some(el) = document.get_element_by_id(CLOCK_ID) else {
        return false;
    };
    update(&el);
    let closure = Closure::wrap(Box::new(move || update(&el)) as Box<dyn FnMut()>);
    if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        CLOCK_PERIOD_MS,
    ) {
        log::warn!("[clock] setInterval failed: {:?}", e);
    }
    closure.forget();
    true
}

fn update(el: &web::Element) {
    match local_hh_mm() {
        Ok(text) => el.set_text_content(Some(&text)),
        Err(e) => log::warn!("[clock] {:?}", e),
    }
}

/// Hour and minute in the user's locale, two digits each.
fn local_hh_mm() -> anyhow::Result<String> {
    let opts = js_sys::Object::new();
    for key in ["hour", "minute"] {
        js_sys::Reflect::set(&opts, &JsValue::from_str(key), &JsValue::from_str("2-digit"))
            .map_err(|e| anyhow!("{:?}", e))?;
    }
    let now = js_sys::Date::new_0();
    Ok(now.to_locale_time_string_with_options("default", &opts).into())
}
