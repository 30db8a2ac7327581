use crate::constants::{ARIA_PRESSED, LIGHT_CLASS, PREFERS_LIGHT_QUERY, THEME_TOGGLE_ID};
use crate::core::ThemeState;
use crate::dom;
use std::cell::Cell;
use web_sys as web;

fn prefers_light(window: &web::Window) -> bool {
    window
        .match_media(PREFERS_LIGHT_QUERY)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply(root: &web::Element, toggle: &web::Element, state: ThemeState) {
    _ = root.class_list().toggle_with_force(LIGHT_CLASS, state.light);
    _ = toggle.set_attribute(ARIA_PRESSED, state.aria_pressed());
}

/// Seed the theme from the OS preference and flip it on each toggle click.
/// Returns false when the page has no toggle button.
pub fn attach(document: &web::Document, window: &web::Window) -> bool {
    let (Some(toggle), Some(root)) = (
        document.get_element_by_id(THEME_TOGGLE_ID),
        document.document_element(),
    ) else {
        return false;
    };
    let state = Cell::new(ThemeState::from_preference(prefers_light(window)));
    apply(&root, &toggle, state.get());

    let toggle_click = toggle.clone();
    dom::add_click_listener(&toggle, move || {
        let mut s = state.get();
        s.toggle();
        state.set(s);
        apply(&root, &toggle_click, s);
        log::info!("[theme] light={}", s.light);
    });
    true
}
