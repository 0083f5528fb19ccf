//! Landing section: headline, typing line, parallax columns, the background
//! particle canvas, and the bubble mini-game.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{window, MouseEvent};
use yew::prelude::*;

use super::bubble_game::CodeBubbleGame;
use crate::frontend::anim::particles::ParticleCanvas;
use crate::frontend::anim::EventHook;
use crate::frontend::viewport_size;

const TYPE_INTERVAL_MS: u32 = 50;
/// Pointer offset from the viewport centre, scaled to this many pixels of
/// column drift.
const PARALLAX_RANGE: f64 = 20.0;

#[derive(Properties, PartialEq)]
pub struct TypingTextProps {
    pub text: AttrValue,
}

/// Character-by-character reveal with a caret that blinks until the line is
/// complete.
#[function_component(TypingText)]
pub fn typing_text(props: &TypingTextProps) -> Html {
    let index = use_state_eq(|| 0usize);
    let total = props.text.chars().count();

    {
        let index = index.clone();
        use_effect_with((*index, props.text.clone()), move |(current, text)| {
            let current = *current;
            let total = text.chars().count();
            let handle = (current < total).then(|| {
                let index = index.clone();
                Timeout::new(TYPE_INTERVAL_MS, move || index.set(current + 1))
            });
            move || drop(handle)
        });
    }

    let shown: String = props.text.chars().take(*index).collect();
    html! {
        <>
            {shown}
            if *index < total {
                <span class="typing-caret">{"|"}</span>
            }
        </>
    }
}

#[function_component(Hero)]
pub fn hero() -> Html {
    let parallax = use_state_eq(|| (0.0f64, 0.0f64));

    {
        let parallax = parallax.clone();
        use_effect_with((), move |_| {
            let hook = window().map(|w| {
                EventHook::listen(w.as_ref(), "mousemove", move |event| {
                    let event: &MouseEvent = event.unchecked_ref();
                    let (width, height) = viewport_size();
                    parallax.set((
                        (event.client_x() as f64 / width - 0.5) * PARALLAX_RANGE,
                        (event.client_y() as f64 / height - 0.5) * PARALLAX_RANGE,
                    ));
                })
            });
            move || drop(hook)
        });
    }

    let (px, py) = *parallax;
    let text_style = format!("transform: translate({:.2}px, {:.2}px);", px * -0.5, py * -0.5);
    let game_style = format!("transform: translate({:.2}px, {:.2}px);", px * 0.5, py * 0.5);

    html! {
        <section id="hero" class="hero">
            <ParticleCanvas />
            <div class="hero-card">
                <div class="hero-content">
                    <div class="hero-text" style={text_style}>
                        <h1 class="hero-title">
                            {"Hi, I'm "}
                            <span class="hero-highlight">{"Harsh"}<br />{"Shandilya"}</span>
                        </h1>
                        <h2 class="hero-role">{"Full Stack and PHP Developer"}</h2>
                        <p class="hero-description">
                            <TypingText text="I create engaging digital experiences with a focus on performance and user satisfaction." />
                        </p>
                        <div class="hero-buttons">
                            <a class="btn btn-primary" href="#projects">{"View My Work"}</a>
                            <a class="btn btn-secondary" href="#contact">{"Get In Touch"}</a>
                        </div>
                    </div>

                    <div class="hero-visual" style={game_style}>
                        <CodeBubbleGame />
                        <div class="hero-circle" style="top: 20%; left: 20%; --size: 100px; --delay: 0.1s;"></div>
                        <div class="hero-circle" style="top: 70%; left: 10%; --size: 50px; --delay: 0.3s;"></div>
                        <div class="hero-circle" style="top: 20%; right: 15%; --size: 70px; --delay: 0.2s;"></div>
                        <div class="hero-circle" style="top: 80%; right: 20%; --size: 120px; --delay: 0.4s;"></div>
                    </div>
                </div>
            </div>
            <div class="scroll-indicator" aria-hidden="true">
                <div class="scroll-mouse">
                    <div class="scroll-dot"></div>
                </div>
                <div class="scroll-arrows">
                    <span class="scroll-arrow"></span>
                    <span class="scroll-arrow" style="animation-delay: 0.2s;"></span>
                </div>
            </div>
        </section>
    }
}
