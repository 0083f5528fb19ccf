//! Custom cursor overlay: a dot and a trailing ring that react to pointer
//! state. Observes global pointer events only; it never owns page
//! interactivity.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlElement, MouseEvent};
use yew::prelude::*;

use super::{EventHook, FrameLoop};
use crate::sim::pointer::{CursorMode, CursorVisual, Spring2, DOT_SPRING, RING_SPRING};

/// Elements the ring swells over.
const INTERACTIVE_SELECTOR: &str = "a, button, [role='button'], input[type='button'], \
     input[type='submit'], input[type='checkbox'], input[type='radio'], select";

const MAX_DT: f64 = 0.05;

/// Hides the native cursor (via the stylesheet) while the overlay is mounted.
struct BodyClassGuard {
    body: Element,
}

impl BodyClassGuard {
    fn add() -> Option<Self> {
        let body: Element = window()?.document()?.body()?.into();
        let _ = body.class_list().add_1("custom-cursor");
        Some(Self { body })
    }
}

impl Drop for BodyClassGuard {
    fn drop(&mut self) {
        let _ = self.body.class_list().remove_1("custom-cursor");
    }
}

fn style_layer(element: &HtmlElement, base_class: &str, mode: CursorMode, visual: CursorVisual, x: f64, y: f64) {
    element.set_class_name(&format!("{base_class} {}", mode.class_suffix()));
    let style = element.style();
    let _ = style.set_property("width", &format!("{:.1}px", visual.size));
    let _ = style.set_property("height", &format!("{:.1}px", visual.size));
    let _ = style.set_property("opacity", &format!("{:.2}", visual.opacity));
    let _ = style.set_property(
        "transform",
        &format!(
            "translate3d({:.1}px, {:.1}px, 0)",
            x - visual.size / 2.0,
            y - visual.size / 2.0
        ),
    );
}

#[function_component(MouseFollower)]
pub fn mouse_follower() -> Html {
    let dot_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let dot_ref = dot_ref.clone();
        let ring_ref = ring_ref.clone();
        use_effect_with((), move |_| {
            let guards = (|| {
                let document = window()?.document()?;
                let dot: HtmlElement = dot_ref.cast()?;
                let ring: HtmlElement = ring_ref.cast()?;

                let body_class = BodyClassGuard::add()?;

                let target: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
                let pressed = Rc::new(Cell::new(false));
                let hovering = Rc::new(Cell::new(false));
                let hidden = Rc::new(Cell::new(false));

                let move_hook = {
                    let target = target.clone();
                    let hovering = hovering.clone();
                    EventHook::listen(document.as_ref(), "mousemove", move |event| {
                        let event: &MouseEvent = event.unchecked_ref();
                        target.set(Some((event.client_x() as f64, event.client_y() as f64)));
                        let over_interactive = event
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .and_then(|el| el.closest(INTERACTIVE_SELECTOR).ok().flatten())
                            .is_some();
                        hovering.set(over_interactive);
                    })
                };
                let down_hook = {
                    let pressed = pressed.clone();
                    EventHook::listen(document.as_ref(), "mousedown", move |_| pressed.set(true))
                };
                let up_hook = {
                    let pressed = pressed.clone();
                    EventHook::listen(document.as_ref(), "mouseup", move |_| pressed.set(false))
                };
                let enter_hook = {
                    let hidden = hidden.clone();
                    EventHook::listen(document.as_ref(), "mouseenter", move |_| hidden.set(false))
                };
                let leave_hook = {
                    let hidden = hidden.clone();
                    EventHook::listen(document.as_ref(), "mouseleave", move |_| hidden.set(true))
                };

                let mut dot_spring = Spring2::new(DOT_SPRING);
                let mut ring_spring = Spring2::new(RING_SPRING);
                let mut last_frame = f64::NAN;
                let frames = FrameLoop::start(move |timestamp| {
                    let dt = if last_frame.is_nan() {
                        0.0
                    } else {
                        ((timestamp - last_frame) / 1000.0).clamp(0.0, MAX_DT)
                    };
                    last_frame = timestamp;

                    let Some(raw) = target.get() else {
                        return;
                    };
                    dot_spring.step(raw, dt);
                    ring_spring.step(raw, dt);

                    let mode =
                        CursorMode::from_flags(hidden.get(), pressed.get(), hovering.get());
                    style_layer(
                        &dot,
                        "cursor-dot",
                        mode,
                        CursorVisual::dot(mode),
                        dot_spring.x,
                        dot_spring.y,
                    );
                    style_layer(
                        &ring,
                        "cursor-ring",
                        mode,
                        CursorVisual::ring(mode),
                        ring_spring.x,
                        ring_spring.y,
                    );
                });

                Some((
                    frames, body_class, move_hook, down_hook, up_hook, enter_hook, leave_hook,
                ))
            })();

            move || drop(guards)
        });
    }

    html! {
        <>
            <div ref={ring_ref} class="cursor-ring is-default" aria-hidden="true"></div>
            <div ref={dot_ref} class="cursor-dot is-default" aria-hidden="true"></div>
        </>
    }
}
