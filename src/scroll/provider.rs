//! Smooth-scroll context provider.
//!
//! Wraps the page in a single [`ScrollEngine`] instance and exposes it to
//! descendants through Yew context. Construction happens asynchronously
//! after mount; until it settles (and forever, if it fails) the context
//! carries no engine and consumers use native scrolling instead.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::Url;
use yew::prelude::*;

use crate::config;
use crate::scroll::engine::{EngineOptions, ScrollEngine, ScrollTarget, ScrollToOpts};
use crate::scroll::history::HistoryHook;

#[derive(Clone)]
pub struct ScrollContext {
    pub engine: Option<Rc<ScrollEngine>>,
    /// True once the engine constructed successfully.
    pub ready: bool,
}

impl PartialEq for ScrollContext {
    fn eq(&self, other: &Self) -> bool {
        self.ready == other.ready
            && match (&self.engine, &other.engine) {
                (Some(a), Some(b)) => Rc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

#[derive(Properties, PartialEq)]
pub struct SmoothScrollProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SmoothScrollProvider)]
pub fn smooth_scroll_provider(props: &SmoothScrollProviderProps) -> Html {
    let context = use_state(|| ScrollContext {
        engine: None,
        ready: false,
    });

    // Construct the engine once per mount, destroy it on unmount. Only one
    // instance exists per mounted provider; the cleanup runs before any
    // remount can construct the next one.
    {
        let context = context.clone();
        use_effect_with_deps(
            move |_| {
                let slot: Rc<RefCell<Option<Rc<ScrollEngine>>>> = Rc::new(RefCell::new(None));
                {
                    let slot = slot.clone();
                    spawn_local(async move {
                        match ScrollEngine::attach(EngineOptions::default()) {
                            Ok(engine) => {
                                let engine = Rc::new(engine);
                                *slot.borrow_mut() = Some(engine.clone());
                                info!("smooth scrolling ready");
                                context.set(ScrollContext {
                                    engine: Some(engine),
                                    ready: true,
                                });
                            }
                            Err(err) => {
                                // Descendants keep working on native scroll.
                                error!("failed to initialize smooth scrolling: {:?}", err);
                            }
                        }
                    });
                }
                move || {
                    if let Some(engine) = slot.borrow_mut().take() {
                        engine.destroy();
                    }
                }
            },
            (),
        );
    }

    // Once the engine exists, watch navigation: after a short settle delay
    // re-measure the document, and jump to the top when the base path (href
    // minus fragment) changed.
    {
        let deps = (*context).clone();
        use_effect_with_deps(
            move |ctx: &ScrollContext| {
                let cleanup: Box<dyn FnOnce()> = match ctx.engine.clone() {
                    Some(engine) => {
                        let last_href = Rc::new(RefCell::new(current_href()));
                        let on_navigate = Rc::new(move |url: Option<String>| {
                            let prev = last_href.borrow().clone();
                            let next = resolve_href(url);
                            *last_href.borrow_mut() = next.clone();

                            let base_changed = match (&prev, &next) {
                                (Some(prev), Some(next)) => {
                                    strip_fragment(prev) != strip_fragment(next)
                                }
                                _ => false,
                            };
                            let engine = engine.clone();
                            Timeout::new(config::ROUTE_SETTLE_DELAY_MS, move || {
                                engine.update();
                                if base_changed {
                                    engine.scroll_to(
                                        ScrollTarget::Offset(0.0),
                                        ScrollToOpts::immediate(),
                                    );
                                }
                            })
                            .forget();
                        });
                        match HistoryHook::install(on_navigate) {
                            Ok(hook) => Box::new(move || drop(hook)),
                            Err(err) => {
                                error!("failed to hook navigation: {:?}", err);
                                Box::new(|| ())
                            }
                        }
                    }
                    None => Box::new(|| ()),
                };
                move || cleanup()
            },
            deps,
        );
    }

    html! {
        <ContextProvider<ScrollContext> context={(*context).clone()}>
            { props.children.clone() }
        </ContextProvider<ScrollContext>>
    }
}

fn current_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

fn resolve_href(url: Option<String>) -> Option<String> {
    let base = current_href();
    match (url, base) {
        (Some(url), Some(base)) => match Url::new_with_base(&url, &base) {
            Ok(resolved) => Some(resolved.href()),
            Err(_) => Some(base),
        },
        (_, base) => base,
    }
}

fn strip_fragment(href: &str) -> &str {
    match href.find('#') {
        Some(i) => &href[..i],
        None => href,
    }
}

#[cfg(test)]
mod tests {
    use super::strip_fragment;

    #[test]
    fn fragment_is_ignored_when_comparing_paths() {
        assert_eq!(
            strip_fragment("https://proshar.app/#features"),
            "https://proshar.app/"
        );
        assert_eq!(
            strip_fragment("https://proshar.app/privacy"),
            "https://proshar.app/privacy"
        );
        assert_eq!(strip_fragment("#benefits"), "");
    }
}
