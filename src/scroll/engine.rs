//! Document-bound smooth-scroll engine.
//!
//! One engine instance owns the window's scroll surface: it relays native
//! scroll events to subscribers and drives eased programmatic scrolls
//! through a `requestAnimationFrame` loop. While a tween is in flight the
//! tween's output is the authoritative position and native scroll events
//! (which echo the engine's own writes) are suppressed, so subscribers see
//! exactly one position source at a time.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element};

use crate::config;
use crate::scroll::easing::Easing;
use crate::scroll::tween::Tween;

#[derive(Debug, Clone, Copy)]
pub struct EngineOptions {
    /// Duration used by `scroll_to` when the caller does not pass one.
    pub duration_s: f64,
    /// Easing used by `scroll_to` when the caller does not pass one.
    pub easing: Easing,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            duration_s: config::SMOOTH_SCROLL_DURATION_S,
            easing: Easing::default(),
        }
    }
}

pub enum ScrollTarget {
    Offset(f64),
    Element(Element),
}

#[derive(Default)]
pub struct ScrollToOpts {
    /// Seconds; falls back to the engine default when `None`.
    pub duration_s: Option<f64>,
    pub easing: Option<Easing>,
    /// Added to the resolved target offset (negative scrolls short).
    pub offset: f64,
    /// Jump without interpolation, ignoring duration and easing.
    pub immediate: bool,
}

impl ScrollToOpts {
    pub fn immediate() -> Self {
        Self {
            immediate: true,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListenerId(u32);

struct Inner {
    options: EngineOptions,
    listeners: RefCell<Vec<(u32, Rc<dyn Fn(f64)>)>>,
    next_listener: Cell<u32>,
    tween: RefCell<Option<Tween>>,
    limit: Cell<f64>,
    raf_id: Cell<Option<i32>>,
    destroyed: Cell<bool>,
    scroll_cb: RefCell<Option<Closure<dyn FnMut()>>>,
    raf_cb: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

pub struct ScrollEngine {
    inner: Rc<Inner>,
}

impl ScrollEngine {
    /// Bind an engine to the document. Fails when there is no window or
    /// document to bind to, or when the scroll listener cannot be installed;
    /// callers are expected to fall back to native scrolling in that case.
    pub fn attach(options: EngineOptions) -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        window
            .document()
            .ok_or_else(|| JsValue::from_str("document unavailable"))?;

        let inner = Rc::new(Inner {
            options,
            listeners: RefCell::new(Vec::new()),
            next_listener: Cell::new(0),
            tween: RefCell::new(None),
            limit: Cell::new(0.0),
            raf_id: Cell::new(None),
            destroyed: Cell::new(false),
            scroll_cb: RefCell::new(None),
            raf_cb: RefCell::new(None),
        });
        inner.measure();

        let scroll_cb = Closure::wrap(Box::new({
            let weak = Rc::downgrade(&inner);
            move || {
                let Some(inner) = weak.upgrade() else { return };
                // Echoes of the engine's own writes arrive here too; the
                // tween is authoritative while it runs.
                if inner.tween.borrow().is_some() {
                    return;
                }
                if let Some(y) = native_scroll_y() {
                    inner.emit(y);
                }
            }
        }) as Box<dyn FnMut()>);

        let opts = AddEventListenerOptions::new();
        opts.set_passive(true);
        window.add_event_listener_with_callback_and_add_event_listener_options(
            "scroll",
            scroll_cb.as_ref().unchecked_ref(),
            &opts,
        )?;
        *inner.scroll_cb.borrow_mut() = Some(scroll_cb);

        let raf_cb = Closure::wrap(Box::new({
            let weak = Rc::downgrade(&inner);
            move |now_ms: f64| {
                let Some(inner) = weak.upgrade() else { return };
                inner.raf_id.set(None);
                let sample = inner.tween.borrow().as_ref().map(|t| t.sample(now_ms));
                let Some((position, done)) = sample else { return };
                // Settle the tween before emitting: a listener may start a
                // new scroll from inside its tick.
                if done {
                    inner.tween.borrow_mut().take();
                } else {
                    inner.request_frame();
                }
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, position);
                }
                inner.emit(position);
            }
        }) as Box<dyn FnMut(f64)>);
        *inner.raf_cb.borrow_mut() = Some(raf_cb);

        Ok(Self { inner })
    }

    /// Subscribe to position ticks. Each tick carries the current vertical
    /// offset, whether it came from native scrolling or a tween frame.
    pub fn on_scroll<F: Fn(f64) + 'static>(&self, f: F) -> ListenerId {
        let id = self.inner.next_listener.get();
        self.inner.next_listener.set(id.wrapping_add(1));
        self.inner.listeners.borrow_mut().push((id, Rc::new(f)));
        ListenerId(id)
    }

    pub fn off(&self, id: ListenerId) {
        self.inner.listeners.borrow_mut().retain(|(i, _)| *i != id.0);
    }

    /// Animate (or jump) to a target offset or element.
    pub fn scroll_to(&self, target: ScrollTarget, opts: ScrollToOpts) {
        let inner = &self.inner;
        if inner.destroyed.get() {
            return;
        }
        let Some(window) = web_sys::window() else { return };
        // Fresh measurement so the clamp below reflects the current layout.
        inner.measure();

        let current = native_scroll_y().unwrap_or(0.0);
        let raw = match target {
            ScrollTarget::Offset(px) => px,
            ScrollTarget::Element(el) => current + el.get_bounding_client_rect().top(),
        };
        let to = (raw + opts.offset).clamp(0.0, inner.limit.get().max(0.0));

        let duration_s = opts.duration_s.unwrap_or(inner.options.duration_s);
        if opts.immediate || duration_s <= 0.0 {
            inner.tween.borrow_mut().take();
            window.scroll_to_with_x_and_y(0.0, to);
            inner.emit(to);
            return;
        }

        let easing = opts.easing.unwrap_or(inner.options.easing);
        *inner.tween.borrow_mut() = Some(Tween::new(
            current,
            to,
            now_ms(),
            duration_s * 1000.0,
            easing,
        ));
        if inner.raf_id.get().is_none() {
            inner.request_frame();
        }
    }

    /// Re-measure the document's scrollable extent. Called by the provider
    /// after route changes settle.
    pub fn update(&self) {
        self.inner.measure();
    }

    /// Tear the engine down: cancel any animation frame, detach the native
    /// listener and drop all subscriptions. Idempotent.
    pub fn destroy(&self) {
        let inner = &self.inner;
        if inner.destroyed.replace(true) {
            return;
        }
        if let Some(id) = inner.raf_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        inner.tween.borrow_mut().take();
        if let Some(cb) = inner.scroll_cb.borrow_mut().take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("scroll", cb.as_ref().unchecked_ref());
            }
        }
        inner.raf_cb.borrow_mut().take();
        inner.listeners.borrow_mut().clear();
    }
}

impl Inner {
    fn emit(&self, y: f64) {
        // Clone out so a listener that (un)subscribes re-entrantly does not
        // trip the borrow.
        let listeners: Vec<Rc<dyn Fn(f64)>> =
            self.listeners.borrow().iter().map(|(_, f)| f.clone()).collect();
        for listener in listeners {
            listener(y);
        }
    }

    fn measure(&self) {
        let Some(window) = web_sys::window() else { return };
        let Some(root) = window.document().and_then(|d| d.document_element()) else {
            return;
        };
        let viewport = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        self.limit.set((root.scroll_height() as f64 - viewport).max(0.0));
    }

    fn request_frame(&self) {
        let Some(window) = web_sys::window() else { return };
        if let Some(cb) = self.raf_cb.borrow().as_ref() {
            if let Ok(id) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                self.raf_id.set(Some(id));
            }
        }
    }
}

fn native_scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}
