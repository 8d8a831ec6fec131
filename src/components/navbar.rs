//! Fixed navbar driven by scroll position.
//!
//! Mode changes happen synchronously on each scroll tick; active-section and
//! contrast recomputation are deferred to the next animation frame and
//! coalesced, so they run at most once per paint no matter how fast ticks
//! arrive. Nav clicks arm time-boxed locks that hold the navbar expanded and
//! the clicked section active while the eased scroll plays out.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    AddEventListenerOptions, Document, Element, MouseEvent, ScrollBehavior,
    ScrollIntoViewOptions,
};
use yew::prelude::*;

use crate::components::navbar_state::{self, DisplayMode, SectionLock};
use crate::config;
use crate::scroll::easing::Easing;
use crate::scroll::engine::{ScrollTarget, ScrollToOpts};
use crate::scroll::provider::ScrollContext;

/// Latest-input slot for the coalesced frame callback: at most one frame is
/// ever scheduled, and it always consumes the newest position.
#[derive(Default)]
struct FrameSlot {
    pending: bool,
    y: f64,
}

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let scroll_ctx = use_context::<ScrollContext>().unwrap_or(ScrollContext {
        engine: None,
        ready: false,
    });

    let mode = use_state_eq(DisplayMode::default);
    let active = use_state_eq(|| config::NAV_SECTIONS[0].id);
    let on_light = use_state_eq(|| false);
    let menu_open = use_state_eq(|| false);

    let nav_ref = use_node_ref();
    let last_y = use_mut_ref(|| 0.0f64);
    let mode_lock = use_mut_ref(|| 0.0f64);
    let section_lock = use_mut_ref(SectionLock::default);
    let section_cache = use_mut_ref(Vec::<(&'static str, Element)>::new);

    {
        let mode = mode.clone();
        let active = active.clone();
        let on_light = on_light.clone();
        let menu_open = menu_open.clone();
        let nav_ref = nav_ref.clone();
        let last_y = last_y.clone();
        let mode_lock = mode_lock.clone();
        let section_lock = section_lock.clone();
        let section_cache = section_cache.clone();
        use_effect_with_deps(
            move |ctx: &ScrollContext| {
                if let Some(y) = current_scroll_y() {
                    *last_y.borrow_mut() = y;
                }

                // Deferred per-frame work: section selection and contrast.
                let deferred: Rc<dyn Fn(f64)> = Rc::new({
                    let active = active.clone();
                    let on_light = on_light.clone();
                    let nav_ref = nav_ref.clone();
                    let section_lock = section_lock.clone();
                    let section_cache = section_cache.clone();
                    move |y: f64| {
                        let Some(document) = web_sys::window().and_then(|w| w.document())
                        else {
                            return;
                        };
                        {
                            // Empty cache means we have not scanned yet (or a
                            // refresh was requested by clearing it).
                            let mut cache = section_cache.borrow_mut();
                            if cache.is_empty() {
                                for section in config::NAV_SECTIONS {
                                    if let Some(el) = document.get_element_by_id(section.id)
                                    {
                                        cache.push((section.id, el));
                                    }
                                }
                            }
                        }
                        let nav_height = nav_height(&nav_ref).unwrap_or(0.0);
                        let tops: Vec<(&'static str, f64)> = section_cache
                            .borrow()
                            .iter()
                            .map(|(id, el)| (*id, y + el.get_bounding_client_rect().top()))
                            .collect();
                        if let Some(id) = navbar_state::resolve_active_section(
                            &section_lock.borrow(),
                            now_ms(),
                            &tops,
                            y,
                            nav_height,
                        ) {
                            active.set(id);
                        }
                        if let Some(light) = sample_contrast(&nav_ref, &document) {
                            on_light.set(light);
                        }
                    }
                });

                let frame = Rc::new(RefCell::new(FrameSlot::default()));
                let raf_handle = Rc::new(Cell::new(None::<i32>));
                let raf_cb: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> =
                    Rc::new(RefCell::new(None));
                *raf_cb.borrow_mut() = Some(Closure::wrap(Box::new({
                    let deferred = deferred.clone();
                    let frame = frame.clone();
                    let raf_handle = raf_handle.clone();
                    move |_timestamp: f64| {
                        raf_handle.set(None);
                        let y = {
                            let mut slot = frame.borrow_mut();
                            slot.pending = false;
                            slot.y
                        };
                        deferred(y);
                    }
                })
                    as Box<dyn FnMut(f64)>));

                let tick: Rc<dyn Fn(f64)> = Rc::new({
                    let mode = mode.clone();
                    let menu_open = menu_open.clone();
                    let last_y = last_y.clone();
                    let mode_lock = mode_lock.clone();
                    let frame = frame.clone();
                    let raf_cb = raf_cb.clone();
                    let raf_handle = raf_handle.clone();
                    move |y: f64| {
                        let previous = last_y.replace(y);
                        let resolved = navbar_state::next_mode(navbar_state::ModeInput {
                            y,
                            delta: y - previous,
                            now_ms: now_ms(),
                            lock_until_ms: *mode_lock.borrow(),
                        });
                        if let Some(next) = resolved {
                            if next == DisplayMode::Hidden {
                                menu_open.set(false);
                            }
                            mode.set(next);
                        }

                        let should_request = {
                            let mut slot = frame.borrow_mut();
                            slot.y = y;
                            if slot.pending {
                                false
                            } else {
                                slot.pending = true;
                                true
                            }
                        };
                        if should_request {
                            let requested = web_sys::window().and_then(|window| {
                                let raf_cb = raf_cb.borrow();
                                let cb = raf_cb.as_ref()?;
                                window
                                    .request_animation_frame(cb.as_ref().unchecked_ref())
                                    .ok()
                            });
                            match requested {
                                Some(id) => raf_handle.set(Some(id)),
                                None => frame.borrow_mut().pending = false,
                            }
                        }
                    }
                });

                // One tick source at a time: the engine's stream when it
                // exists, the native scroll event otherwise.
                let detach_source: Box<dyn FnOnce()> = match ctx.engine.clone() {
                    Some(engine) => {
                        let id = engine.on_scroll({
                            let tick = tick.clone();
                            move |y| tick(y)
                        });
                        Box::new(move || engine.off(id))
                    }
                    None => {
                        let listener = Closure::wrap(Box::new({
                            let tick = tick.clone();
                            move || {
                                if let Some(y) = current_scroll_y() {
                                    tick(y);
                                }
                            }
                        })
                            as Box<dyn FnMut()>);
                        let mut attached = false;
                        if let Some(window) = web_sys::window() {
                            let opts = AddEventListenerOptions::new();
                            opts.set_passive(true);
                            attached = window
                                .add_event_listener_with_callback_and_add_event_listener_options(
                                    "scroll",
                                    listener.as_ref().unchecked_ref(),
                                    &opts,
                                )
                                .is_ok();
                        }
                        Box::new(move || {
                            if attached {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.remove_event_listener_with_callback(
                                        "scroll",
                                        listener.as_ref().unchecked_ref(),
                                    );
                                }
                            }
                        })
                    }
                };

                move || {
                    detach_source();
                    if let Some(id) = raf_handle.take() {
                        if let Some(window) = web_sys::window() {
                            let _ = window.cancel_animation_frame(id);
                        }
                    }
                    raf_cb.borrow_mut().take();
                }
            },
            scroll_ctx.clone(),
        );
    }

    let on_nav_select = {
        let active = active.clone();
        let mode = mode.clone();
        let menu_open = menu_open.clone();
        let mode_lock = mode_lock.clone();
        let section_lock = section_lock.clone();
        let nav_ref = nav_ref.clone();
        let scroll_ctx = scroll_ctx.clone();
        Callback::from(move |(event, id): (MouseEvent, &'static str)| {
            event.prevent_default();
            let Some(window) = web_sys::window() else { return };

            if let Some(target) = window.document().and_then(|d| d.get_element_by_id(id)) {
                let now = now_ms();
                active.set(id);
                *section_lock.borrow_mut() = SectionLock::arm(id, now);
                *mode_lock.borrow_mut() = now + config::MODE_LOCK_MS;
                mode.set(DisplayMode::Expanded);

                // Land with the section's content clear of the fixed navbar.
                let offset =
                    -(nav_height(&nav_ref).unwrap_or(0.0) + config::SECTION_LOOKAHEAD_PX);
                match scroll_ctx.engine.as_ref() {
                    Some(engine) => engine.scroll_to(
                        ScrollTarget::Element(target),
                        ScrollToOpts {
                            duration_s: Some(config::NAV_SCROLL_DURATION_S),
                            easing: Some(Easing::OutExpo),
                            offset,
                            immediate: false,
                        },
                    ),
                    None => {
                        let opts = ScrollIntoViewOptions::new();
                        opts.set_behavior(ScrollBehavior::Smooth);
                        target.scroll_into_view_with_scroll_into_view_options(&opts);
                    }
                }
            }

            menu_open.set(false);
            if let Ok(history) = window.history() {
                let _ =
                    history.push_state_with_url(&JsValue::NULL, "", Some(&format!("#{}", id)));
            }
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let nav_link = |section: &config::NavSection, class: &'static str| -> Html {
        let onclick = {
            let on_nav_select = on_nav_select.clone();
            let id = section.id;
            Callback::from(move |e: MouseEvent| on_nav_select.emit((e, id)))
        };
        html! {
            <a
                href={format!("#{}", section.id)}
                {onclick}
                class={classes!(class, (*active == section.id).then(|| "active"))}
            >
                { section.label }
            </a>
        }
    };

    html! {
        <nav
            ref={nav_ref.clone()}
            class={classes!("navbar", (*mode).class(), (*on_light).then(|| "on-light"))}
        >
            <div class="navbar-side">
                <a class="navbar-logo" href="/">{ "Proshar" }</a>
            </div>

            <div class="navbar-pill">
                { for config::NAV_SECTIONS.iter().map(|s| nav_link(s, "navbar-link")) }
            </div>

            <div class="navbar-side navbar-actions">
                <button class="navbar-cta">{ "Get Started" }</button>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if *menu_open {
                    html! {
                        <div class="mobile-menu">
                            { for config::NAV_SECTIONS.iter().map(|s| nav_link(s, "mobile-link")) }
                            <button class="navbar-cta mobile-cta">{ "Get Started" }</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </nav>
    }
}

fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

fn current_scroll_y() -> Option<f64> {
    web_sys::window()?.scroll_y().ok()
}

fn nav_height(nav_ref: &NodeRef) -> Option<f64> {
    Some(nav_ref.cast::<Element>()?.get_bounding_client_rect().height())
}

/// Brightness of whatever is rendered under the navbar's center point.
/// `None` short-circuits the frame with no state change.
fn sample_contrast(nav_ref: &NodeRef, document: &Document) -> Option<bool> {
    let nav = nav_ref.cast::<Element>()?;
    let rect = nav.get_bounding_client_rect();
    let center_x = rect.left() + rect.width() / 2.0;
    let center_y = rect.top() + rect.height() / 2.0;

    let window = web_sys::window()?;
    let body = document.body()?;
    let body_el: &Element = body.as_ref();

    let mut current = document.element_from_point(center_x as f32, center_y as f32);
    // The hit test usually lands on the navbar itself; climb out of it
    // before reading backgrounds.
    while let Some(el) = current.clone() {
        if !nav.contains(Some(el.as_ref())) {
            break;
        }
        current = el.parent_element();
    }

    while let Some(el) = current {
        if &el == body_el {
            break;
        }
        if let Some(light) = window
            .get_computed_style(&el)
            .ok()
            .flatten()
            .and_then(|style| style.get_property_value("background-color").ok())
            .and_then(|bg| navbar_state::light_background(&bg))
        {
            return Some(light);
        }
        current = el.parent_element();
    }

    // No opaque ancestor found: assume the page's dark background.
    Some(false)
}
