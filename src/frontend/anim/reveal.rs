//! Viewport-intersection-gated entrance animation wrapper.
//!
//! Purely declarative per instance: direction, travel distance, timing, a
//! `once` flag, and composable style flags. The wrapped content starts in its
//! offset state and transitions in when it scrolls into view (slightly before
//! being fully visible, via a negative observer margin).

use js_sys::Array;
use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::sim::reveal::{hidden_opacity, hidden_transform};
pub use crate::sim::reveal::{RevealDirection, RevealStyle};

const OBSERVER_MARGIN: &str = "-100px 0px";

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub children: Children,
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    #[prop_or(50.0)]
    pub distance: f64,
    #[prop_or(0)]
    pub delay_ms: u32,
    #[prop_or(500)]
    pub duration_ms: u32,
    #[prop_or(true)]
    pub once: bool,
    #[prop_or_default]
    pub style: RevealStyle,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let node_ref = node_ref.clone();
        let visible = visible.clone();
        use_effect_with(props.once, move |once| {
            let once = *once;
            let guards = (|| {
                let element: Element = node_ref.cast()?;

                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        let Ok(entry) = entries.get(0).dyn_into::<IntersectionObserverEntry>()
                        else {
                            return;
                        };
                        // Same rule as `next_visibility`: the keep-previous
                        // branch simply never calls the setter.
                        if entry.is_intersecting() {
                            visible.set(true);
                        } else if !once {
                            visible.set(false);
                        }
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(OBSERVER_MARGIN);
                let observer = IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                )
                .ok()?;
                observer.observe(&element);

                Some((observer, callback))
            })();

            move || {
                if let Some((observer, _callback)) = guards {
                    observer.disconnect();
                }
            }
        });
    }

    let style = if *visible {
        format!(
            "transition: transform {d}ms ease {delay}ms, opacity {d}ms ease {delay}ms; \
             transform: none; opacity: 1;",
            d = props.duration_ms,
            delay = props.delay_ms,
        )
    } else {
        format!(
            "transition: transform {d}ms ease {delay}ms, opacity {d}ms ease {delay}ms; \
             transform: {transform}; opacity: {opacity};",
            d = props.duration_ms,
            delay = props.delay_ms,
            transform = hidden_transform(props.direction, props.distance, props.style),
            opacity = hidden_opacity(props.style),
        )
    };

    html! {
        <div
            ref={node_ref}
            class={classes!("reveal", props.class.clone(), (*visible).then_some("is-visible"))}
            style={style}
        >
            { props.children.clone() }
        </div>
    }
}
