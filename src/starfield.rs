use crate::constants::STARS_CANVAS_ID;
use crate::core::constants::STAR_COUNT;
use crate::core::{PointerSignal, StarField};
use crate::surface::DrawingSurface;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Starfield {
    pub surface: Rc<RefCell<DrawingSurface>>,
    pub field: StarField,
}

impl Starfield {
    /// Inert (`None`) without a usable `#stars` canvas.
    pub fn attach(document: &web::Document) -> Option<Self> {
        let surface = match DrawingSurface::attach(document, STARS_CANVAS_ID) {
            Ok(Some(s)) => s,
            Ok(None) => {
                log::info!("[starfield] no #{} element, skipping", STARS_CANVAS_ID);
                return None;
            }
            Err(e) => {
                log::warn!("[starfield] disabled: {:?}", e);
                return None;
            }
        };
        let viewport = surface.metrics().logical_size();
        let mut rng = StdRng::from_entropy();
        let field = StarField::new(STAR_COUNT, viewport, &mut rng);
        log::info!(
            "[starfield] {} stars over {:.0}x{:.0}",
            field.len(),
            viewport.x,
            viewport.y
        );
        Some(Self {
            surface: Rc::new(RefCell::new(surface)),
            field,
        })
    }

    pub fn frame(&mut self, pointer: &PointerSignal) {
        let mut surface = self.surface.borrow_mut();
        let viewport = surface.metrics().logical_size();
        self.field.tick(viewport, pointer.tilt, &mut *surface);
    }
}
