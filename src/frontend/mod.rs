//! Yew frontend: theme wiring, router shell, and the page chrome.

mod anim;
mod components;
mod pages;
mod router;

use std::rc::Rc;

use gloo_timers::callback::Timeout;
use js_sys::{Function, Reflect};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::store::{BrowserStore, ThemeMode, ThemeStore};
use anim::cursor::MouseFollower;
use components::footer::Footer;
use components::loader::Loader;
use components::navbar::Navbar;
use router::Route;

const LOADER_MS: u32 = 2_000;

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub(crate) fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

fn apply_theme(mode: ThemeMode) {
    if let Some(document) = window().and_then(|w| w.document()) {
        if let Some(root) = document.document_element() {
            let _ = root.set_attribute("data-theme", mode.as_str());
        }
    }
}

/// Swap the palette inside a view transition when the platform offers one,
/// falling back to an instant swap otherwise (and always when the user asks
/// for reduced motion).
fn apply_theme_with_transition(mode: ThemeMode) {
    if prefers_reduced_motion() {
        apply_theme(mode);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(mode);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(mode);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(mode);
        return;
    };

    let callback = Closure::<dyn FnMut()>::new(move || {
        apply_theme(mode);
    });

    if start_view_transition
        .call1(&document_js, callback.as_ref().unchecked_ref())
        .is_err()
    {
        apply_theme(mode);
    }
}

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(win) = window() else {
        return (1280.0, 720.0);
    };

    let width = win
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(1280.0);
    let height = win
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(720.0);

    (width, height)
}

#[function_component(App)]
fn app() -> Html {
    let store = use_mut_ref(|| ThemeStore::load(Rc::new(BrowserStore), system_prefers_dark()));
    let theme = use_state(|| store.borrow().get());
    let loading = use_state(|| !prefers_reduced_motion());

    {
        let initial = *theme;
        let store = store.clone();
        use_effect_with((), move |_| {
            apply_theme(initial);
            store.borrow().subscribe(apply_theme_with_transition);
            || ()
        });
    }

    {
        let loading = loading.clone();
        use_effect_with((), move |_| {
            let handle = (*loading).then(|| {
                let loading = loading.clone();
                Timeout::new(LOADER_MS, move || loading.set(false))
            });
            move || drop(handle)
        });
    }

    let on_toggle = {
        let store = store.clone();
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = store.borrow().toggle();
            theme.set(next);
        })
    };

    if *loading {
        return html! { <Loader /> };
    }

    html! {
        <ContextProvider<ThemeMode> context={*theme}>
            <BrowserRouter>
                <MouseFollower />
                <a class="skip-link" href="#content">{"Skip to main content"}</a>
                <Navbar theme={*theme} on_toggle={on_toggle} />
                <main id="content">
                    <Switch<Route> render={router::switch} />
                </main>
                <Footer />
            </BrowserRouter>
        </ContextProvider<ThemeMode>>
    }
}

pub fn run() {
    let _ = console_log::init_with_level(log::Level::Info);
    console_error_panic_hook::set_once();

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
