//! Animation-frame loop with an explicit cancellation handle

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Calls `on_frame` once per display refresh until stopped or dropped.
///
/// `stop` must not be called from inside `on_frame`.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    callback: FrameCallback,
}

impl FrameLoop {
    pub fn start<F>(mut on_frame: F) -> Result<Self, JsValue>
    where
        F: FnMut(f64) + 'static,
    {
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let callback: FrameCallback = Rc::new(RefCell::new(None));

        let pending_inner = pending.clone();
        let callback_inner = callback.clone();
        *callback.borrow_mut() = Some(Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            // This request just fired
            pending_inner.set(None);
            on_frame(now);

            if let Some(cb) = callback_inner.borrow().as_ref() {
                if let Err(e) = request(&pending_inner, cb) {
                    log::error!("Failed to schedule next frame: {:?}", e);
                }
            }
        }));

        if let Some(cb) = callback.borrow().as_ref() {
            request(&pending, cb)?;
        }

        Ok(Self { pending, callback })
    }

    pub fn is_running(&self) -> bool {
        self.pending.get().is_some()
    }

    pub fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        // Dropping the closure breaks the Rc cycle it holds on itself
        self.callback.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Cancel any outstanding request, then ask for the next frame
fn request(pending: &Cell<Option<i32>>, cb: &Closure<dyn FnMut(f64)>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    if let Some(old) = pending.take() {
        window.cancel_animation_frame(old)?;
    }
    let id = window.request_animation_frame(cb.as_ref().unchecked_ref::<js_sys::Function>())?;
    pending.set(Some(id));
    Ok(())
}
