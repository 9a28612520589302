//! Host-side runtime helpers for executing reducer effects and querying browser environment state.
//!
//! Everything that touches `window`/`document` lives here so the reducer and registry stay pure.
//! Native builds (tests, tooling) get fixed fallbacks instead of browser reads.

#[cfg(target_arch = "wasm32")]
use desktop_app_contract::window_primary_input_dom_id;
use leptos::logging;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};

use crate::{
    clock::LocalDateTime,
    model::{Viewport, WindowId},
    reducer::RuntimeEffect,
};

/// Body class present while a window drag or resize is in progress.
pub const DRAGGING_BODY_CLASS: &str = "dragging";

#[derive(Debug, Clone, Copy, Default)]
/// Browser boundary for desktop runtime side effects.
pub struct DesktopHostContext;

impl DesktopHostContext {
    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::FocusWindowInput(window_id) => self.focus_window_input(window_id),
            RuntimeEffect::SetDragCursor(active) => self.set_drag_cursor(active),
        }
    }

    /// Moves keyboard focus into the window's primary input once it has rendered.
    ///
    /// Apps opt in by rendering [`desktop_app_contract::window_primary_input_dom_id`] on their
    /// primary text field.
    pub fn focus_window_input(&self, window_id: WindowId) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            let callback = Closure::once_into_js(move || {
                let element = web_sys::window()
                    .and_then(|window| window.document())
                    .and_then(|document| {
                        document.get_element_by_id(&window_primary_input_dom_id(window_id.0))
                    })
                    .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok());
                if let Some(element) = element {
                    let _ = element.focus();
                }
            });
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = window_id;
    }

    /// Adds or removes the body-level dragging class.
    pub fn set_drag_cursor(&self, active: bool) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(body) = web_sys::window()
                .and_then(|window| window.document())
                .and_then(|document| document.body())
            else {
                return;
            };
            let classes = body.class_list();
            let result = if active {
                classes.add_1(DRAGGING_BODY_CLASS)
            } else {
                classes.remove_1(DRAGGING_BODY_CLASS)
            };
            if let Err(err) = result {
                logging::warn!("toggle body drag class failed: {err:?}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = active;
    }

    /// Opens `url` in a new browser tab.
    pub fn open_external_url(&self, url: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(window) = web_sys::window() else {
                return;
            };
            if let Err(err) =
                window.open_with_url_and_target_and_features(url, "_blank", "noopener,noreferrer")
            {
                logging::warn!("open external url failed for `{url}`: {err:?}");
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        logging::warn!("open external url `{url}` ignored outside the browser");
    }

    /// Current browser viewport. Falls back to 1024x768 off-browser.
    pub fn viewport(&self) -> Viewport {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let read = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback| {
                    value
                        .ok()
                        .and_then(|value| value.as_f64())
                        .map(|value| value as i32)
                        .unwrap_or(fallback)
                };
                return Viewport::new(
                    read(window.inner_width(), 1024),
                    read(window.inner_height(), 768),
                );
            }
        }
        Viewport::default()
    }

    /// Local wall-clock time.
    pub fn now(&self) -> LocalDateTime {
        #[cfg(target_arch = "wasm32")]
        {
            let date = js_sys::Date::new_0();
            LocalDateTime {
                year: date.get_full_year(),
                month: date.get_month() + 1,
                day: date.get_date(),
                weekday: date.get_day(),
                hour: date.get_hours(),
                minute: date.get_minutes(),
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        LocalDateTime::default()
    }
}
