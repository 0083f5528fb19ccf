//! Frame and listener plumbing shared by the animated components.
//!
//! Both helpers are lifecycle guards: dropping the returned handle cancels
//! the callback and detaches the listener, so components release everything
//! by holding the guard in their effect teardown.

pub mod cursor;
pub mod particles;
pub mod reveal;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, EventTarget};

/// A continuously re-scheduled `requestAnimationFrame` loop. The callback
/// receives the rAF timestamp in milliseconds.
pub struct FrameLoop {
    alive: Rc<Cell<bool>>,
    handle: Rc<Cell<i32>>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameLoop {
    pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Self {
        let alive = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(0));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));

        let tick_clone = tick.clone();
        let alive_clone = alive.clone();
        let handle_clone = handle.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !alive_clone.get() {
                return;
            }
            on_frame(timestamp);
            if let Some(w) = window() {
                if let Ok(id) = w.request_animation_frame(
                    tick_clone
                        .borrow()
                        .as_ref()
                        .expect("frame closure is set before scheduling")
                        .as_ref()
                        .unchecked_ref(),
                ) {
                    handle_clone.set(id);
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(w) = window() {
            if let Ok(id) = w.request_animation_frame(
                tick.borrow()
                    .as_ref()
                    .expect("frame closure is set before scheduling")
                    .as_ref()
                    .unchecked_ref(),
            ) {
                handle.set(id);
            }
        }

        Self {
            alive,
            handle,
            _tick: tick,
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.alive.set(false);
        if let Some(w) = window() {
            let _ = w.cancel_animation_frame(self.handle.get());
        }
    }
}

/// An event listener that detaches itself when dropped.
pub struct EventHook {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl EventHook {
    pub fn listen(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Self {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
        let _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            kind,
            closure,
        }
    }
}

impl Drop for EventHook {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}
