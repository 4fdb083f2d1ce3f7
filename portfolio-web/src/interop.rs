use dioxus::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, ScrollBehavior, ScrollIntoViewOptions};

/// Viewports narrower than this get the quicker mode transition.
pub const NARROW_VIEWPORT_PX: u32 = 768;

/// Milliseconds since the epoch, as the trail engine's clock.
pub fn now_ms() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Get the browser viewport dimensions, or `(0, 0)` outside a browser.
pub fn get_viewport_size() -> (u32, u32) {
    current_viewport_size().unwrap_or((0, 0))
}

pub fn current_viewport_size() -> Option<(u32, u32)> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;

    if width > 0.0 && height > 0.0 {
        return Some((width.round() as u32, height.round() as u32));
    }

    let document = window.document()?;
    let root = document.document_element()?;
    let width = root.client_width().max(0) as u32;
    let height = root.client_height().max(0) as u32;
    Some((width, height))
}

pub fn current_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|window| window.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Smooth-scroll the element with `id` into view. Missing elements are ignored.
pub fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        dioxus_logger::tracing::debug!("scroll target #{} not found", id);
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Seconds for background/text color transitions at this viewport width.
pub fn mode_transition_secs(viewport_width: u32) -> f64 {
    if viewport_width < NARROW_VIEWPORT_PX {
        0.4
    } else {
        0.8
    }
}

pub async fn track_viewport(mut viewport: Signal<(u32, u32)>) {
    if let Some((w, h)) = current_viewport_size() {
        viewport.set((w, h));
    }

    let listener = WindowListener::new("resize", false, move |_event| {
        if let Some((w, h)) = current_viewport_size() {
            viewport.set((w, h));
        }
    });

    // Keep listener alive for app lifetime.
    std::mem::forget(listener);
}

/// A `window` event listener that is removed again when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowListener {
    pub fn new<F>(event: &'static str, passive: bool, handler: F) -> Option<Self>
    where
        F: FnMut(Event) + 'static,
    {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

        let options = AddEventListenerOptions::new();
        options.set_passive(passive);
        if let Err(e) = window.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &options,
        ) {
            dioxus_logger::tracing::warn!("failed to add {} listener: {:?}", event, e);
            return None;
        }

        Some(Self { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(
                self.event,
                self.closure.as_ref().unchecked_ref(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn narrow_viewports_transition_faster() {
        assert_eq!(mode_transition_secs(375), 0.4);
        assert_eq!(mode_transition_secs(767), 0.4);
        assert_eq!(mode_transition_secs(768), 0.8);
        assert_eq!(mode_transition_secs(1920), 0.8);
    }
}
