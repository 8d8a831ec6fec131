//! In-app navigation interception.
//!
//! The scroll provider needs to see every navigation, including ones made by
//! code it does not own, so `history.pushState` and `history.replaceState`
//! are wrapped and `popstate` is observed. The originals are captured at
//! install time and written back by [`HistoryHook::restore`]; `Drop` also
//! restores, so a mounted hook cannot leak patched globals past its own
//! lifetime. After restore the history object's functions are
//! reference-equal to their pre-install values.

use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Function, Reflect};
use web_sys::History;

/// Invoked for every intercepted navigation. The argument is the navigation
/// target url when one was passed (push/replace); `None` for popstate.
pub type OnNavigate = Rc<dyn Fn(Option<String>)>;

pub struct HistoryHook {
    history: History,
    original_push: Function,
    original_replace: Function,
    push_patch: Option<Closure<dyn FnMut(JsValue, JsValue, JsValue)>>,
    replace_patch: Option<Closure<dyn FnMut(JsValue, JsValue, JsValue)>>,
    popstate: Option<Closure<dyn FnMut()>>,
    restored: bool,
}

impl HistoryHook {
    pub fn install(on_navigate: OnNavigate) -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
        let history = window.history()?;
        let history_js = JsValue::from(history.clone());

        let original_push = Reflect::get(&history_js, &JsValue::from_str("pushState"))?
            .dyn_into::<Function>()?;
        let original_replace = Reflect::get(&history_js, &JsValue::from_str("replaceState"))?
            .dyn_into::<Function>()?;

        let push_patch = Self::wrapper(&history_js, original_push.clone(), on_navigate.clone());
        let replace_patch =
            Self::wrapper(&history_js, original_replace.clone(), on_navigate.clone());
        let popstate = Closure::wrap(Box::new(move || {
            on_navigate(None);
        }) as Box<dyn FnMut()>);

        // Construct first so any failure below restores what was applied.
        let mut hook = Self {
            history,
            original_push,
            original_replace,
            push_patch: Some(push_patch),
            replace_patch: Some(replace_patch),
            popstate: Some(popstate),
            restored: false,
        };

        let applied = (|| -> Result<(), JsValue> {
            if let Some(patch) = hook.push_patch.as_ref() {
                Reflect::set(&history_js, &JsValue::from_str("pushState"), patch.as_ref())?;
            }
            if let Some(patch) = hook.replace_patch.as_ref() {
                Reflect::set(&history_js, &JsValue::from_str("replaceState"), patch.as_ref())?;
            }
            if let Some(popstate) = hook.popstate.as_ref() {
                window.add_event_listener_with_callback(
                    "popstate",
                    popstate.as_ref().unchecked_ref(),
                )?;
            }
            Ok(())
        })();

        match applied {
            Ok(()) => Ok(hook),
            Err(err) => {
                hook.restore();
                Err(err)
            }
        }
    }

    fn wrapper(
        history_js: &JsValue,
        original: Function,
        on_navigate: OnNavigate,
    ) -> Closure<dyn FnMut(JsValue, JsValue, JsValue)> {
        Closure::wrap(Box::new({
            let this = history_js.clone();
            move |state: JsValue, title: JsValue, url: JsValue| {
                let _ = original.call3(&this, &state, &title, &url);
                on_navigate(url.as_string());
            }
        }) as Box<dyn FnMut(JsValue, JsValue, JsValue)>)
    }

    /// Write the captured originals back and stop listening for popstate.
    /// Safe to call more than once; only the first call does anything.
    pub fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        let history_js = JsValue::from(self.history.clone());
        let _ = Reflect::set(
            &history_js,
            &JsValue::from_str("pushState"),
            self.original_push.as_ref(),
        );
        let _ = Reflect::set(
            &history_js,
            &JsValue::from_str("replaceState"),
            self.original_replace.as_ref(),
        );
        self.push_patch = None;
        self.replace_patch = None;

        if let Some(popstate) = self.popstate.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.remove_event_listener_with_callback(
                    "popstate",
                    popstate.as_ref().unchecked_ref(),
                );
            }
        }
    }
}

impl Drop for HistoryHook {
    fn drop(&mut self) {
        self.restore();
    }
}
