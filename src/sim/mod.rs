//! Pure simulation state for the decorative layers.
//!
//! Everything in here is platform-free: steps take explicit time/pointer
//! inputs and an injectable RNG, and rendering is left to whatever consumes
//! the resulting snapshots. That keeps the only non-trivial logic in the
//! site unit-testable on the host.

pub mod bubble;
pub mod field;
pub mod pointer;
pub mod reveal;
pub mod spawn;
