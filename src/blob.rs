use crate::constants::BLOB_ID;
use crate::core::blob::transform_css;
use crate::core::{BlobFollow, PointerSignal};
use crate::dom;
use web_sys as web;

/// Soft blob element that trails the pointer.
pub struct Blob {
    el: web::HtmlElement,
    follow: BlobFollow,
    shown: Option<bool>,
}

impl Blob {
    pub fn attach(document: &web::Document, window: &web::Window) -> Option<Self> {
        let el = dom::html_element(document, BLOB_ID)?;
        Some(Self {
            el,
            follow: BlobFollow::centered(dom::viewport_size(window)),
            shown: None,
        })
    }

    pub fn frame(&mut self, pointer: &PointerSignal, window: &web::Window) {
        self.follow.sync(pointer.inside, pointer.position);
        let pos = self.follow.step(dom::viewport_size(window));
        let style = self.el.style();
        _ = style.set_property("transform", &transform_css(pos));
        if self.shown != self.follow.visible {
            if let Some(opacity) = self.follow.opacity() {
                _ = style.set_property("opacity", opacity);
            }
            self.shown = self.follow.visible;
        }
    }
}
