//! Keyboard input handling

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, KeyboardEvent, Window};

use crate::panel::Panel;

type KeyCallback = Closure<dyn FnMut(KeyboardEvent)>;

/// Window-level arrow/WASD listeners, removed again on drop
pub struct KeyListeners {
    window: Window,
    key_down: KeyCallback,
    key_up: KeyCallback,
}

impl KeyListeners {
    pub fn install(window: &Window, panel: Rc<RefCell<Panel>>) -> Result<Self, JsValue> {
        let down_panel = panel.clone();
        let key_down = KeyCallback::new(move |event: KeyboardEvent| {
            if handle_key(&down_panel, &event, true) {
                event.prevent_default();
            }
        });

        let key_up = KeyCallback::new(move |event: KeyboardEvent| {
            if handle_key(&panel, &event, false) {
                event.prevent_default();
            }
        });

        window.add_event_listener_with_callback("keydown", key_down.as_ref().unchecked_ref())?;
        window.add_event_listener_with_callback("keyup", key_up.as_ref().unchecked_ref())?;

        Ok(Self {
            window: window.clone(),
            key_down,
            key_up,
        })
    }
}

impl Drop for KeyListeners {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("keydown", self.key_down.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("keyup", self.key_up.as_ref().unchecked_ref());
    }
}

/// Returns true if the key belongs to the panel
fn handle_key(panel: &Rc<RefCell<Panel>>, event: &KeyboardEvent, pressed: bool) -> bool {
    if is_typing(event) {
        return false;
    }
    let key = event.key();
    let Ok(mut panel) = panel.try_borrow_mut() else {
        return false;
    };
    if pressed {
        panel.session.key_down(&key)
    } else {
        panel.session.key_up(&key)
    }
}

/// Keys aimed at a text field on the same page
fn is_typing(event: &KeyboardEvent) -> bool {
    let Some(el) = event
        .target()
        .and_then(|target| target.dyn_into::<HtmlElement>().ok())
    else {
        return false;
    };
    let tag = el.tag_name().to_ascii_lowercase();
    tag == "input" || tag == "textarea" || el.is_content_editable()
}
