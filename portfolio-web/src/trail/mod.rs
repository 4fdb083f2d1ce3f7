//! Browser host for the trail engine
//!
//! [`TrailHandle`] owns the engine, forwards window events into it and keeps
//! one wake-up armed for the engine's earliest pending timer. The handle is
//! created by the page and passed both to [`MouseTrail`] and to whatever
//! wants to clear the trail.

pub mod canvas;

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use dioxus::prelude::*;
use dioxus_logger::tracing::{trace, warn};
use gloo_timers::future::TimeoutFuture;
use shared_types::ColorMode;
use trail_engine::{TrailConfig, TrailEngine, Viewport};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlCanvasElement, MouseEvent};

use crate::interop::{current_scroll_y, current_viewport_size, now_ms, WindowListener};

pub use canvas::{CanvasError, CanvasSurface};

pub const TRAIL_CANVAS_ID: &str = "mouse-trail-canvas";

type BrowserEngine = TrailEngine<CanvasSurface, fn() -> f64>;

fn browser_random() -> f64 {
    js_sys::Math::random()
}

struct TrailShared {
    engine: RefCell<BrowserEngine>,
    canvas: RefCell<Option<HtmlCanvasElement>>,
    /// Deadline of the wake-up currently armed, if any.
    armed: Cell<Option<u64>>,
    /// Bumped whenever the armed wake-up is superseded.
    generation: Cell<u64>,
}

/// Cloneable handle to the running trail effect.
#[derive(Clone)]
pub struct TrailHandle {
    inner: Rc<TrailShared>,
}

impl PartialEq for TrailHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl TrailHandle {
    pub fn new(mode: ColorMode, active_region: Option<f64>) -> Self {
        let engine = TrailEngine::new(
            TrailConfig::default(),
            mode,
            active_region,
            browser_random as fn() -> f64,
        );
        Self {
            inner: Rc::new(TrailShared {
                engine: RefCell::new(engine),
                canvas: RefCell::new(None),
                armed: Cell::new(None),
                generation: Cell::new(0),
            }),
        }
    }

    /// Fade out whatever is on screen. Does nothing when the trail is empty.
    pub fn clear(&self) {
        self.with_engine(|engine, now| {
            engine.request_clear(now);
        });
    }

    /// Bind the engine to the canvas with `canvas_id` and start its timers.
    pub fn mount(&self, canvas_id: &str) -> Result<(), CanvasError> {
        let surface = CanvasSurface::from_element_id(canvas_id)?;
        *self.inner.canvas.borrow_mut() = Some(surface.canvas().clone());

        let viewport = viewport_now();
        let scroll_y = current_scroll_y();
        self.with_engine(|engine, now| engine.attach(surface, viewport, scroll_y, now));
        Ok(())
    }

    pub fn unmount(&self) {
        self.disarm();
        if let Ok(mut engine) = self.inner.engine.try_borrow_mut() {
            engine.detach();
        }
        self.inner.canvas.borrow_mut().take();
    }

    /// Window listeners feeding pointer, scroll and resize into the engine.
    pub fn listen(&self) -> Vec<WindowListener> {
        let mut listeners = Vec::new();

        let handle = self.clone();
        listeners.extend(WindowListener::new("mousemove", false, move |event: Event| {
            if let Ok(event) = event.dyn_into::<MouseEvent>() {
                handle.pointer_moved(event.client_x() as f64, event.client_y() as f64);
            }
        }));

        let handle = self.clone();
        listeners.extend(WindowListener::new("scroll", true, move |_event| {
            let scroll_y = current_scroll_y();
            handle.with_engine(|engine, now| engine.scrolled(scroll_y, now));
        }));

        let handle = self.clone();
        listeners.extend(WindowListener::new("resize", false, move |_event| {
            let viewport = viewport_now();
            handle.with_engine(|engine, now| engine.resized(viewport, now));
        }));

        listeners
    }

    pub fn set_color_mode(&self, mode: ColorMode) {
        self.with_engine(|engine, now| engine.set_color_mode(mode, now));
    }

    pub fn set_active_region(&self, bound: Option<f64>) {
        self.with_engine(|engine, _| engine.set_active_region(bound));
    }

    fn pointer_moved(&self, client_x: f64, client_y: f64) {
        let (left, top) = self
            .inner
            .canvas
            .borrow()
            .as_ref()
            .map(|canvas| {
                let rect = canvas.get_bounding_client_rect();
                (rect.left(), rect.top())
            })
            .unwrap_or((0.0, 0.0));
        self.with_engine(|engine, now| engine.pointer_moved(client_x - left, client_y - top, now));
    }

    fn with_engine<T>(&self, f: impl FnOnce(&mut BrowserEngine, u64) -> T) -> Option<T> {
        let now = now_ms();
        let out = {
            let Ok(mut engine) = self.inner.engine.try_borrow_mut() else {
                trace!("trail engine busy, dropping event");
                return None;
            };
            f(&mut engine, now)
        };
        self.rearm(now);
        Some(out)
    }

    /// Make sure a wake-up is pending no later than the engine's next
    /// deadline. An earlier wake-up is left alone; it re-arms when it fires.
    fn rearm(&self, now: u64) {
        let next = self.inner.engine.borrow().next_deadline();
        let Some(deadline) = next else {
            self.disarm();
            return;
        };
        if matches!(self.inner.armed.get(), Some(armed) if armed <= deadline) {
            return;
        }

        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
        self.inner.armed.set(Some(deadline));

        let delay = deadline.saturating_sub(now).min(u32::MAX as u64) as u32;
        let weak = Rc::downgrade(&self.inner);
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(delay).await;
            wake(weak, generation);
        });
    }

    fn disarm(&self) {
        self.inner.armed.set(None);
        let generation = self.inner.generation.get().wrapping_add(1);
        self.inner.generation.set(generation);
    }
}

fn wake(weak: Weak<TrailShared>, generation: u64) {
    let Some(inner) = weak.upgrade() else {
        return;
    };
    if inner.generation.get() != generation {
        return;
    }
    inner.armed.set(None);
    TrailHandle { inner }.with_engine(|engine, now| engine.advance(now));
}

fn viewport_now() -> Viewport {
    current_viewport_size()
        .map(|(w, h)| Viewport::new(w, h))
        .unwrap_or_default()
}

/// Full-viewport, click-through canvas the trail is drawn on.
///
/// The trail only reacts inside the hero: the active region is the viewport
/// height.
#[component]
pub fn MouseTrail(
    handle: TrailHandle,
    mode: Signal<ColorMode>,
    viewport: Signal<(u32, u32)>,
) -> Element {
    let listeners = use_hook(|| Rc::new(RefCell::new(Vec::<WindowListener>::new())));
    let mut mounted = use_signal(|| false);

    {
        let handle = handle.clone();
        let listeners = listeners.clone();
        use_effect(move || {
            if mounted() {
                return;
            }
            mounted.set(true);

            match handle.mount(TRAIL_CANVAS_ID) {
                Ok(()) => listeners.borrow_mut().extend(handle.listen()),
                Err(e) => warn!("Mouse trail disabled: {}", e),
            }
        });
    }

    {
        let handle = handle.clone();
        use_effect(move || {
            handle.set_color_mode(mode());
        });
    }

    {
        let handle = handle.clone();
        use_effect(move || {
            let (_, height) = viewport();
            handle.set_active_region(Some(height as f64));
        });
    }

    {
        let handle = handle.clone();
        use_drop(move || {
            listeners.borrow_mut().clear();
            handle.unmount();
        });
    }

    rsx! {
        canvas {
            id: TRAIL_CANVAS_ID,
            class: "mouse-trail",
            "aria-hidden": "true",
        }
    }
}

/// Create the page's trail handle once, seeded with the current mode and
/// hero height.
pub fn use_trail(mode: Signal<ColorMode>, viewport: Signal<(u32, u32)>) -> TrailHandle {
    use_hook(|| {
        let (_, height) = *viewport.peek();
        TrailHandle::new(*mode.peek(), Some(height as f64))
    })
}
