//! Canvas 2D client for the Game Hub Pong panel
//!
//! The page calls `PongHandle.attach("pongCanvas")` once and keeps the handle.
//! Every control the page exposes (restart, stage buttons, D-pad) goes
//! through that handle.

#![cfg(target_arch = "wasm32")]

mod canvas;
mod frame_loop;
mod input;
mod panel;

use std::cell::RefCell;
use std::rc::Rc;

use frame_loop::FrameLoop;
use game_core::{Config, Direction, GameRng, PongSession};
use input::KeyListeners;
use panel::Panel;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Handle to a running Pong panel
///
/// A handle attached to a page without the canvas is inert: every method is a
/// no-op, so the host page can wire its buttons unconditionally.
#[wasm_bindgen]
pub struct PongHandle {
    panel: Option<Rc<RefCell<Panel>>>,
    frames: Option<FrameLoop>,
    keys: Option<KeyListeners>,
}

#[wasm_bindgen]
impl PongHandle {
    /// Bind to the canvas with id `canvas_id` and start the frame loop
    pub fn attach(canvas_id: &str) -> Result<PongHandle, JsValue> {
        console_error_panic_hook::set_once();
        // Already installed when a second panel attaches
        let _ = console_log::init_with_level(log::Level::Info);

        let Some(window) = web_sys::window() else {
            return Ok(Self::inert());
        };
        let Some(document) = window.document() else {
            return Ok(Self::inert());
        };
        let Some(canvas) = document
            .get_element_by_id(canvas_id)
            .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok())
        else {
            log::debug!("No canvas #{canvas_id}, pong panel stays inactive");
            return Ok(Self::inert());
        };
        let Some(ctx) = canvas
            .get_context("2d")?
            .and_then(|obj| obj.dyn_into::<CanvasRenderingContext2d>().ok())
        else {
            log::debug!("Canvas #{canvas_id} has no 2d context, pong panel stays inactive");
            return Ok(Self::inert());
        };

        let config = Config::for_surface(canvas.width() as f32, canvas.height() as f32)
            .map_err(|e| JsValue::from_str(&format!("Failed to configure pong panel: {e}")))?;
        let session = PongSession::new(config, GameRng::from_entropy());
        let panel = Rc::new(RefCell::new(Panel::new(session, ctx, document)));

        let frame_panel = panel.clone();
        let frames = FrameLoop::start(move |now| match frame_panel.try_borrow_mut() {
            Ok(mut panel) => panel.frame(now),
            Err(_) => log::warn!("Pong panel busy, skipping frame"),
        })?;
        let keys = KeyListeners::install(&window, panel.clone())?;

        log::info!(
            "Pong panel attached to #{canvas_id} ({}x{})",
            canvas.width(),
            canvas.height()
        );

        Ok(Self {
            panel: Some(panel),
            frames: Some(frames),
            keys: Some(keys),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.frames.as_ref().is_some_and(FrameLoop::is_running)
    }

    /// Zero both scores and serve a fresh rally
    pub fn reset(&self) {
        self.with_panel(Panel::reset);
    }

    /// Select stage 1-3; other values are clamped
    pub fn set_stage(&self, level: i32) {
        self.with_panel(|panel| panel.set_stage(level));
    }

    /// D-pad press: "UP" or "DOWN"
    pub fn hold(&self, dir: &str) {
        let Some(dir) = Direction::from_name(dir) else {
            log::debug!("Ignoring unknown direction {dir:?}");
            return;
        };
        self.with_panel(|panel| panel.session.hold(dir));
    }

    pub fn release(&self) {
        self.with_panel(|panel| panel.session.release());
    }

    pub fn key_down(&self, key: &str) -> bool {
        self.with_panel(|panel| panel.session.key_down(key))
            .unwrap_or(false)
    }

    pub fn key_up(&self, key: &str) -> bool {
        self.with_panel(|panel| panel.session.key_up(key))
            .unwrap_or(false)
    }

    pub fn score_text(&self) -> Option<String> {
        self.with_panel(|panel| panel.session.score_text())
    }

    pub fn stage_text(&self) -> Option<String> {
        self.with_panel(|panel| panel.session.stage_text())
    }

    /// Stop the frame loop and detach key listeners
    pub fn stop(&mut self) {
        self.keys.take();
        if let Some(frames) = self.frames.take() {
            frames.stop();
        }
        log::info!("Pong panel stopped");
    }
}

impl PongHandle {
    fn inert() -> Self {
        Self {
            panel: None,
            frames: None,
            keys: None,
        }
    }

    fn with_panel<R>(&self, f: impl FnOnce(&mut Panel) -> R) -> Option<R> {
        let panel = self.panel.as_ref()?;
        match panel.try_borrow_mut() {
            Ok(mut panel) => Some(f(&mut panel)),
            Err(_) => {
                log::warn!("Pong panel busy, control ignored");
                None
            }
        }
    }
}
