//! The "Code Bubble Pop" interaction embedded in the hero section.
//!
//! All game rules live in `sim::bubble`; this component drives them with a
//! frame loop and a self-rescheduling spawn timer, and renders the current
//! snapshot. Both the loop and the timer die with the component (and the
//! timer is also cancelled and restarted by a reset), so nothing keeps
//! spawning into cleared state.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::callback::Timeout;
use rand::thread_rng;
use yew::prelude::*;

use crate::frontend::anim::FrameLoop;
use crate::sim::bubble::{BubbleGame, Flavor, GamePhase, LABEL_TICKS};
use crate::sim::spawn::SpawnScheduler;

/// The circular play surface is a fixed square.
const SURFACE: f64 = 240.0;

type SpawnSlot = Rc<RefCell<Option<Timeout>>>;

fn schedule_spawn(slot: &SpawnSlot, game: &Rc<RefCell<BubbleGame>>, delay: Duration) {
    let slot_next = slot.clone();
    let game = game.clone();
    let timeout = Timeout::new(delay.as_millis() as u32, move || {
        let next_delay = {
            let mut rng = thread_rng();
            game.borrow_mut().try_spawn(&mut rng);
            SpawnScheduler::default().next_delay(&mut rng)
        };
        schedule_spawn(&slot_next, &game, next_delay);
    });
    *slot.borrow_mut() = Some(timeout);
}

/// Cancels the pending spawn when the effect tears down.
struct SpawnGuard(SpawnSlot);

impl Drop for SpawnGuard {
    fn drop(&mut self) {
        *self.0.borrow_mut() = None;
    }
}

#[function_component(CodeBubbleGame)]
pub fn code_bubble_game() -> Html {
    let game = use_mut_ref(|| BubbleGame::new(SURFACE, SURFACE, BubbleGame::load_best()));
    let phase = use_state_eq(|| GamePhase::Intro);
    // Bumped by a reset so the driver effect tears down (cancelling the
    // pending spawn) and starts a fresh cadence.
    let run_epoch = use_state_eq(|| 0u32);
    let update = use_force_update();

    {
        let game = game.clone();
        let update = update.clone();
        use_effect_with((*phase, *run_epoch), move |(phase, _epoch)| {
            let guards = (*phase == GamePhase::Active).then(|| {
                let spawn_slot: SpawnSlot = Rc::new(RefCell::new(None));
                schedule_spawn(&spawn_slot, &game, SpawnScheduler::default().initial_delay());
                let spawn_guard = SpawnGuard(spawn_slot);

                let frames = FrameLoop::start(move |_timestamp| {
                    game.borrow_mut().tick();
                    update.force_update();
                });

                (frames, spawn_guard)
            });
            move || drop(guards)
        });
    }

    let on_intro_click = {
        let game = game.clone();
        let phase = phase.clone();
        Callback::from(move |_: MouseEvent| {
            game.borrow_mut().dismiss_intro(&mut thread_rng());
            phase.set(GamePhase::Active);
        })
    };

    let on_reset = {
        let game = game.clone();
        let run_epoch = run_epoch.clone();
        let next_epoch = *run_epoch + 1;
        let update = update.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            game.borrow_mut().reset(&mut thread_rng());
            run_epoch.set(next_epoch);
            update.force_update();
        })
    };

    let state = game.borrow();
    let intro = state.phase == GamePhase::Intro;

    html! {
        <div class="game-wrapper">
            <div class="score-display">
                <div class="score-current">{state.score}</div>
                if state.best > 0 {
                    <div class="score-best">{format!("Best: {}", state.best)}</div>
                }
            </div>

            <div class="game-surface" style={format!("width: {SURFACE}px; height: {SURFACE}px;")}>
                if intro {
                    <button class="game-intro" type="button" onclick={on_intro_click}>
                        <h3 class="game-intro-title">{"Code Bubble Pop!"}</h3>
                        <p class="game-intro-text">
                            {"Click tech bubbles to earn points. Avoid bugs and errors!"}
                        </p>
                        <ul class="game-rules-list">
                            <li>{"Tech bubbles: +1 to +3 points"}</li>
                            <li>{"Error bubbles: -1 point"}</li>
                        </ul>
                        <span class="game-start">{"Start"}</span>
                    </button>
                } else {
                    <button
                        class="game-reset"
                        type="button"
                        aria-label="Reset game"
                        onclick={on_reset}
                    >
                        <span aria-hidden="true">{"↻"}</span>
                    </button>
                }

                { for state.bubbles().iter().map(|bubble| {
                    let id = bubble.id;
                    let onclick = {
                        let game = game.clone();
                        let update = update.clone();
                        Callback::from(move |event: MouseEvent| {
                            event.stop_propagation();
                            let mut state = game.borrow_mut();
                            let best_before = state.best;
                            if state.click(id, &mut thread_rng()).is_some()
                                && state.best > best_before
                            {
                                BubbleGame::save_best(state.best);
                            }
                            drop(state);
                            update.force_update();
                        })
                    };
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
                         background-color: {}; transform: scale({:.2}); opacity: {:.2};",
                        bubble.x, bubble.y, bubble.size, bubble.size,
                        bubble.kind.color, bubble.scale, bubble.opacity,
                    );
                    html! {
                        <button
                            key={id.to_string()}
                            class={classes!(
                                "bubble",
                                (bubble.kind.flavor == Flavor::Trap).then_some("is-trap")
                            )}
                            type="button"
                            style={style}
                            onclick={onclick}
                        >
                            <span class="bubble-label">{bubble.kind.label}</span>
                        </button>
                    }
                }) }

                { for state.pops().iter().enumerate().map(|(i, pop)| {
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; width: {:.1}px; height: {:.1}px; \
                         background-color: hsl({:.0}, 80%, 60%); opacity: {:.2};",
                        pop.x, pop.y, pop.size, pop.size, pop.hue, pop.opacity(),
                    );
                    html! { <div key={i} class="pop-particle" style={style}></div> }
                }) }

                { for state.labels().iter().enumerate().map(|(i, label)| {
                    let progress = label.age as f64 / LABEL_TICKS as f64;
                    let style = format!(
                        "left: {:.1}px; top: {:.1}px; opacity: {:.2}; \
                         transform: translateY({:.1}px) scale({:.2});",
                        label.x, label.y,
                        1.0 - progress,
                        -30.0 * progress,
                        1.0 + 0.5 * progress,
                    );
                    html! {
                        <div
                            key={i}
                            class={classes!("score-popup", label.trap.then_some("is-trap"))}
                            style={style}
                        >
                            {label.text.clone()}
                        </div>
                    }
                }) }
            </div>

            <div class="game-rules">
                <p>{"Click tech: +points | Click bugs: -points"}</p>
            </div>
        </div>
    }
}
