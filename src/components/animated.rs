//! Reveal-on-scroll plumbing shared by the landing sections.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::js_sys::Array;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};
use yew::prelude::*;

use crate::config;

/// True once the referenced element has intersected the viewport. Fires
/// once; the observer disconnects after the first hit.
#[hook]
pub fn use_in_view(node: NodeRef, root_margin: &'static str) -> bool {
    let visible = use_state_eq(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let mut slot: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node.cast::<Element>() {
                    let callback = Closure::wrap(Box::new({
                        let visible = visible.clone();
                        move |entries: Array, observer: IntersectionObserver| {
                            for entry in entries.iter() {
                                if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>()
                                {
                                    if entry.is_intersecting() {
                                        visible.set(true);
                                        observer.disconnect();
                                    }
                                }
                            }
                        }
                    })
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let init = IntersectionObserverInit::new();
                    init.set_root_margin(root_margin);
                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &init,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            slot = Some((observer, callback));
                        }
                        Err(err) => {
                            // Without an observer the content just shows.
                            warn!("intersection observer unavailable: {:?}", err);
                            visible.set(true);
                        }
                    }
                }

                move || {
                    if let Some((observer, _callback)) = slot {
                        observer.disconnect();
                    }
                }
            },
            node,
        );
    }
    *visible
}

pub fn prefers_reduced_motion() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok().flatten())
        .map(|query| query.matches())
        .unwrap_or(false)
}

#[derive(Properties, PartialEq)]
pub struct AnimatedSectionProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Fades its content up into view the first time it is scrolled to. Users
/// who prefer reduced motion get the content immediately.
#[function_component(AnimatedSection)]
pub fn animated_section(props: &AnimatedSectionProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), config::REVEAL_MARGIN);
    let reduced = use_state(prefers_reduced_motion);
    let visible = in_view || *reduced;

    html! {
        <div
            ref={node}
            class={classes!("fade-in-section", visible.then(|| "visible"), props.class.clone())}
        >
            { props.children.clone() }
        </div>
    }
}
