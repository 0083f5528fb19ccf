//! Full-viewport background particle canvas.
//!
//! The simulation lives in `sim::field`; this component owns the drawing
//! surface, the pointer smoothing, and a ~30 Hz tick decoupled from the
//! display refresh rate. A surface without a 2d context renders nothing and
//! the page carries on.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::thread_rng;
use wasm_bindgen::JsCast;
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};
use yew::prelude::*;

use super::{EventHook, FrameLoop};
use crate::frontend::viewport_size;
use crate::sim::field::{FieldProfile, ParticleField};
use crate::sim::pointer::{Spring2, FIELD_SPRING};
use crate::store::ThemeMode;

/// Simulation cadence: ~30 updates per second.
const TICK_MS: f64 = 1000.0 / 30.0;
const MAX_DT: f64 = 0.05;

fn fit_canvas(canvas: &HtmlCanvasElement, ctx: &CanvasRenderingContext2d) -> (f64, f64) {
    let (width, height) = viewport_size();
    let pixel_ratio = window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

    canvas.set_width((width * pixel_ratio) as u32);
    canvas.set_height((height * pixel_ratio) as u32);
    let style = canvas.style();
    let _ = style.set_property("width", &format!("{width}px"));
    let _ = style.set_property("height", &format!("{height}px"));
    // Resizing the backing store resets the context transform.
    let _ = ctx.scale(pixel_ratio, pixel_ratio);

    (width, height)
}

fn accent_rgb(mode: ThemeMode) -> (u8, u8, u8) {
    match mode {
        ThemeMode::Dark => (100, 223, 223),
        ThemeMode::Light => (94, 96, 206),
    }
}

fn draw_field(ctx: &CanvasRenderingContext2d, field: &ParticleField, mode: ThemeMode) {
    ctx.clear_rect(0.0, 0.0, field.width, field.height);

    let (hue, saturation, lightness) = match mode {
        ThemeMode::Dark => (180.0, 65.0, 63.0),
        ThemeMode::Light => (240.0, 53.0, 59.0),
    };
    let (r, g, b) = accent_rgb(mode);
    let glow = format!("rgb({r}, {g}, {b})");
    let glow_scale = match mode {
        ThemeMode::Dark => 1.2,
        ThemeMode::Light => 0.8,
    };

    for particle in field.particles() {
        let alpha =
            ((particle.radius / particle.base_radius) * field.profile.opacity).clamp(0.0, 1.0);
        ctx.save();
        let _ = ctx.translate(particle.x, particle.y);
        let _ = ctx.rotate(particle.angle);
        ctx.set_shadow_color(&glow);
        ctx.set_shadow_blur(particle.radius * glow_scale);
        ctx.set_fill_style_str(&format!(
            "hsla({:.1}, {saturation}%, {lightness}%, {alpha:.3})",
            hue + particle.hue_shift,
        ));
        ctx.begin_path();
        let _ = ctx.arc(0.0, 0.0, particle.radius.max(0.1), 0.0, TAU);
        ctx.fill();
        ctx.restore();
    }

    ctx.set_line_width(1.0);
    let connection_dim = match mode {
        ThemeMode::Dark => 1.0,
        ThemeMode::Light => 0.8,
    };
    let particles = field.particles();
    for (a, b_index, alpha) in field.connections() {
        ctx.set_stroke_style_str(&format!(
            "rgba({r}, {g}, {b}, {:.4})",
            alpha * connection_dim
        ));
        ctx.begin_path();
        ctx.move_to(particles[a].x, particles[a].y);
        ctx.line_to(particles[b_index].x, particles[b_index].y);
        ctx.stroke();
    }
}

#[function_component(ParticleCanvas)]
pub fn particle_canvas() -> Html {
    let mode = use_context::<ThemeMode>().unwrap_or(ThemeMode::Dark);
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with(mode, move |mode| {
            let mode = *mode;
            // Everything the effect owns; dropped wholesale on cleanup.
            let guards: Option<(FrameLoop, EventHook, EventHook)> = (|| {
                let canvas: HtmlCanvasElement = canvas_ref.cast()?;
                let ctx = canvas
                    .get_context("2d")
                    .ok()
                    .flatten()?
                    .dyn_into::<CanvasRenderingContext2d>()
                    .ok()?;

                let (width, height) = fit_canvas(&canvas, &ctx);
                let field = Rc::new(RefCell::new(ParticleField::new(
                    FieldProfile::for_mode(mode),
                    width,
                    height,
                    &mut thread_rng(),
                )));
                let raw_pointer: Rc<Cell<Option<(f64, f64)>>> = Rc::new(Cell::new(None));
                let spring = Rc::new(RefCell::new(Spring2::new(FIELD_SPRING)));

                let resize_hook = {
                    let canvas = canvas.clone();
                    let ctx = ctx.clone();
                    let field = field.clone();
                    EventHook::listen(window()?.as_ref(), "resize", move |_| {
                        let (width, height) = fit_canvas(&canvas, &ctx);
                        field.borrow_mut().resize(width, height, &mut thread_rng());
                    })
                };

                let move_hook = {
                    let raw_pointer = raw_pointer.clone();
                    EventHook::listen(window()?.as_ref(), "mousemove", move |event| {
                        let event: &MouseEvent = event.unchecked_ref();
                        raw_pointer.set(Some((event.client_x() as f64, event.client_y() as f64)));
                    })
                };

                let mut last_frame = f64::NAN;
                let mut last_tick = f64::NEG_INFINITY;
                let frames = FrameLoop::start(move |timestamp| {
                    let dt = if last_frame.is_nan() {
                        0.0
                    } else {
                        ((timestamp - last_frame) / 1000.0).clamp(0.0, MAX_DT)
                    };
                    last_frame = timestamp;

                    let raw = raw_pointer.get();
                    if let Some(target) = raw {
                        spring.borrow_mut().step(target, dt);
                    }

                    if timestamp - last_tick < TICK_MS {
                        return;
                    }
                    last_tick = timestamp;

                    let pointer = raw.map(|_| spring.borrow().position());
                    let mut field = field.borrow_mut();
                    field.step(timestamp, pointer);
                    draw_field(&ctx, &field, mode);
                });

                Some((frames, resize_hook, move_hook))
            })();

            move || drop(guards)
        });
    }

    html! {
        <canvas ref={canvas_ref} class="particle-canvas" aria-hidden="true"></canvas>
    }
}
