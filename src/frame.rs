use crate::blob::Blob;
use crate::core::PointerSignal;
use crate::starfield::Starfield;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything drawn once per display frame. Each part is optional and
/// independent of the others.
pub struct FrameContext {
    pub window: web::Window,
    pub pointer: Rc<RefCell<PointerSignal>>,
    pub starfield: Option<Starfield>,
    pub blob: Option<Blob>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let pointer = *self.pointer.borrow();
        if let Some(starfield) = &mut self.starfield {
            starfield.frame(&pointer);
        }
        if let Some(blob) = &mut self.blob {
            blob.frame(&pointer, &self.window);
        }
    }
}

type TickCell = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling `requestAnimationFrame` loop with an explicit stop.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickCell,
}

impl FrameLoop {
    pub fn start(mut frame_ctx: FrameContext) -> Self {
        let running = Rc::new(Cell::new(true));
        let pending = Rc::new(Cell::new(None));
        let tick: TickCell = Rc::new(RefCell::new(None));

        let running_tick = running.clone();
        let pending_tick = pending.clone();
        let tick_clone = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if !running_tick.get() {
                return;
            }
            frame_ctx.frame();
            pending_tick.set(request_frame(&tick_clone));
        }) as Box<dyn FnMut()>));

        pending.set(request_frame(&tick));
        Self {
            running,
            pending,
            tick,
        }
    }

    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::info!("[frame] loop stopped");
    }
}

fn request_frame(tick: &TickCell) -> Option<i32> {
    let w = web::window()?;
    let cb = tick.borrow();
    w.request_animation_frame(cb.as_ref()?.as_ref().unchecked_ref())
        .ok()
}
