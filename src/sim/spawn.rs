//! Spawn cadence for the bubble mini-game.
//!
//! The spawner is deliberately jittery: each firing schedules the next one at
//! a fresh random delay rather than running on a fixed interval. Modelling the
//! cadence as its own value keeps the jitter bounds testable with a seeded RNG.

use rand::Rng;
use std::time::Duration;

#[derive(Clone, Copy, Debug)]
pub struct SpawnScheduler {
    pub initial_ms: u64,
    pub min_ms: u64,
    pub max_ms: u64,
}

impl Default for SpawnScheduler {
    fn default() -> Self {
        Self {
            initial_ms: 800,
            min_ms: 600,
            max_ms: 1600,
        }
    }
}

impl SpawnScheduler {
    /// Delay before the very first spawn after the game goes active.
    pub fn initial_delay(&self) -> Duration {
        Duration::from_millis(self.initial_ms)
    }

    /// Delay until the next spawn, uniform in `[min_ms, max_ms)`.
    pub fn next_delay(&self, rng: &mut impl Rng) -> Duration {
        Duration::from_millis(rng.gen_range(self.min_ms..self.max_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn delays_stay_inside_the_jitter_window() {
        let scheduler = SpawnScheduler::default();
        let mut rng = SmallRng::seed_from_u64(11);

        assert_eq!(scheduler.initial_delay(), Duration::from_millis(800));
        for _ in 0..1_000 {
            let delay = scheduler.next_delay(&mut rng).as_millis() as u64;
            assert!((600..1600).contains(&delay), "delay {delay} out of window");
        }
    }

    #[test]
    fn cadence_actually_jitters() {
        let scheduler = SpawnScheduler::default();
        let mut rng = SmallRng::seed_from_u64(29);
        let first = scheduler.next_delay(&mut rng);
        let distinct = (0..32).any(|_| scheduler.next_delay(&mut rng) != first);
        assert!(distinct);
    }
}
