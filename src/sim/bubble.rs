//! State for the bubble-pop mini-game embedded in the hero section.
//!
//! The whole game is a reducer: `tick` advances motion and effect decay,
//! `click` settles a hit, and the component driving it only schedules frames
//! and timers. Everything observable — score floor, best-score monotonicity,
//! the live-bubble cap — is enforced here.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// Most bubbles alive at once.
pub const BUBBLE_CAP: usize = 8;
/// Bubbles seeded by a reset.
pub const INITIAL_BATCH: usize = 5;
/// Chance that a spawn is a trap instead of a tech bubble.
pub const TRAP_CHANCE: f64 = 0.25;
/// Pop-particle velocity retained per tick.
const POP_DAMPING: f64 = 0.95;
/// Floating "+N" labels live this many ~60 Hz ticks (≈800 ms).
pub const LABEL_TICKS: u32 = 48;
const ENTRANCE_STEP: f64 = 0.05;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Flavor {
    Tech,
    Trap,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct BubbleKind {
    pub label: &'static str,
    pub color: &'static str,
    pub points: i32,
    pub flavor: Flavor,
}

pub const TECH_KINDS: [BubbleKind; 10] = [
    BubbleKind { label: "HTML", color: "#e34c26", points: 1, flavor: Flavor::Tech },
    BubbleKind { label: "CSS", color: "#264de4", points: 1, flavor: Flavor::Tech },
    BubbleKind { label: "JS", color: "#f0db4f", points: 1, flavor: Flavor::Tech },
    BubbleKind { label: "React", color: "#61dafb", points: 2, flavor: Flavor::Tech },
    BubbleKind { label: "Node", color: "#3c873a", points: 2, flavor: Flavor::Tech },
    BubbleKind { label: "PHP", color: "#8993be", points: 2, flavor: Flavor::Tech },
    BubbleKind { label: "SQL", color: "#f29111", points: 2, flavor: Flavor::Tech },
    BubbleKind { label: "API", color: "#00adef", points: 3, flavor: Flavor::Tech },
    BubbleKind { label: "Git", color: "#f34f29", points: 3, flavor: Flavor::Tech },
    BubbleKind { label: "Vue", color: "#42b883", points: 3, flavor: Flavor::Tech },
];

pub const TRAP_KINDS: [BubbleKind; 4] = [
    BubbleKind { label: "BUG", color: "#ff4757", points: -1, flavor: Flavor::Trap },
    BubbleKind { label: "ERROR", color: "#ff6b81", points: -1, flavor: Flavor::Trap },
    BubbleKind { label: "CRASH", color: "#ff6348", points: -1, flavor: Flavor::Trap },
    BubbleKind { label: "404", color: "#ff7f50", points: -1, flavor: Flavor::Trap },
];

#[derive(Clone, Debug)]
pub struct Bubble {
    pub id: u64,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
    pub heading: f64,
    pub kind: BubbleKind,
    pub scale: f64,
    pub opacity: f64,
}

#[derive(Clone, Debug)]
pub struct PopParticle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub size: f64,
    pub hue: f64,
    pub lifetime: i32,
}

impl PopParticle {
    /// Fades out over the remaining lifetime.
    pub fn opacity(&self) -> f64 {
        (self.lifetime as f64 / 40.0).clamp(0.0, 1.0)
    }
}

#[derive(Clone, Debug)]
pub struct FloatingLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub trap: bool,
    pub age: u32,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GamePhase {
    Intro,
    Active,
}

/// What a click resolved to; the component uses it for feedback only, the
/// score is already settled.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ClickOutcome {
    pub points: i32,
    pub x: f64,
    pub y: f64,
    pub flavor: Flavor,
}

/// LocalStorage shape for the persisted best score (used only on wasm32).
#[allow(dead_code)]
#[derive(Clone, Serialize, Deserialize, Default)]
struct StoredBest {
    best: i32,
}

#[derive(Clone, Debug)]
pub struct BubbleGame {
    pub phase: GamePhase,
    pub width: f64,
    pub height: f64,
    pub score: i32,
    pub best: i32,
    bubbles: Vec<Bubble>,
    pops: Vec<PopParticle>,
    labels: Vec<FloatingLabel>,
    next_id: u64,
}

impl BubbleGame {
    #[allow(dead_code)]
    const BEST_KEY: &'static str = "bubble-best";

    pub fn new(width: f64, height: f64, best: i32) -> Self {
        Self {
            phase: GamePhase::Intro,
            width: width.max(1.0),
            height: height.max(1.0),
            score: 0,
            best: best.max(0),
            bubbles: Vec::new(),
            pops: Vec::new(),
            labels: Vec::new(),
            next_id: 1,
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    pub fn pops(&self) -> &[PopParticle] {
        &self.pops
    }

    pub fn labels(&self) -> &[FloatingLabel] {
        &self.labels
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Intro overlay dismissed; the spawner may run.
    pub fn dismiss_intro(&mut self, rng: &mut impl Rng) {
        if self.phase == GamePhase::Intro {
            self.phase = GamePhase::Active;
            self.seed_initial(rng);
        }
    }

    /// Manual reset: clear everything transient, zero the score (the best
    /// score survives), reseed, stay active.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.bubbles.clear();
        self.pops.clear();
        self.labels.clear();
        self.score = 0;
        self.phase = GamePhase::Active;
        self.seed_initial(rng);
    }

    fn seed_initial(&mut self, rng: &mut impl Rng) {
        for _ in 0..INITIAL_BATCH {
            self.try_spawn(rng);
        }
    }

    /// Spawn one bubble if the game is active and under the cap. Returns
    /// whether a bubble was created.
    pub fn try_spawn(&mut self, rng: &mut impl Rng) -> bool {
        if self.phase != GamePhase::Active || self.bubbles.len() >= BUBBLE_CAP {
            return false;
        }

        let size = 30.0 + rng.gen::<f64>() * 30.0;
        let kind = if rng.gen::<f64>() < TRAP_CHANCE {
            TRAP_KINDS[rng.gen_range(0..TRAP_KINDS.len())]
        } else {
            TECH_KINDS[rng.gen_range(0..TECH_KINDS.len())]
        };

        // Margin of one bubble size keeps spawns clear of the rim.
        let max_x = (self.width - 2.0 * size).max(size);
        let max_y = (self.height - 2.0 * size).max(size);

        self.bubbles.push(Bubble {
            id: self.next_id,
            x: rng.gen_range(size..=max_x),
            y: rng.gen_range(size..=max_y),
            size,
            speed: 0.5 + rng.gen::<f64>(),
            heading: rng.gen_range(0.0..TAU),
            kind,
            scale: 0.0,
            opacity: 0.0,
        });
        self.next_id += 1;
        true
    }

    /// One animation tick: move bubbles with boundary reflection, finish
    /// entrance ramps, decay pop particles and floating labels. Effect decay
    /// is skipped entirely while nothing is live.
    pub fn tick(&mut self) {
        let (w, h) = (self.width, self.height);
        for bubble in &mut self.bubbles {
            bubble.scale = (bubble.scale + ENTRANCE_STEP).min(1.0);
            bubble.opacity = (bubble.opacity + ENTRANCE_STEP).min(1.0);

            let nx = bubble.x + bubble.heading.cos() * bubble.speed;
            let ny = bubble.y + bubble.heading.sin() * bubble.speed;

            let max_x = (w - bubble.size).max(0.0);
            let max_y = (h - bubble.size).max(0.0);
            if nx <= 0.0 || nx >= max_x {
                bubble.heading = PI - bubble.heading;
            }
            if ny <= 0.0 || ny >= max_y {
                bubble.heading = -bubble.heading;
            }
            bubble.x = nx.clamp(0.0, max_x);
            bubble.y = ny.clamp(0.0, max_y);
        }

        if !self.pops.is_empty() {
            for pop in &mut self.pops {
                pop.x += pop.vx;
                pop.y += pop.vy;
                pop.vx *= POP_DAMPING;
                pop.vy *= POP_DAMPING;
                pop.lifetime -= 1;
            }
            self.pops.retain(|p| p.lifetime > 0);
        }

        if !self.labels.is_empty() {
            for label in &mut self.labels {
                label.age += 1;
            }
            self.labels.retain(|l| l.age < LABEL_TICKS);
        }
    }

    /// Resolve a click on a live bubble: remove it, settle the score
    /// (floor-clamped at zero, best updated from the clamped value), and
    /// spawn the pop feedback at the bubble's centre.
    pub fn click(&mut self, id: u64, rng: &mut impl Rng) -> Option<ClickOutcome> {
        let index = self.bubbles.iter().position(|b| b.id == id)?;
        let bubble = self.bubbles.swap_remove(index);
        let points = bubble.kind.points;
        let flavor = bubble.kind.flavor;
        let cx = bubble.x + bubble.size / 2.0;
        let cy = bubble.y + bubble.size / 2.0;

        self.score = (self.score + points).max(0);
        if self.score > self.best {
            self.best = self.score;
        }

        self.labels.push(FloatingLabel {
            x: cx,
            y: cy,
            text: if points > 0 {
                format!("+{points}")
            } else {
                points.to_string()
            },
            trap: flavor == Flavor::Trap,
            age: 0,
        });

        for i in 0..8 {
            let angle = i as f64 / 8.0 * TAU;
            let speed = 1.0 + rng.gen::<f64>();
            let hue = match flavor {
                Flavor::Trap => i as f64 * 5.0,
                Flavor::Tech => 180.0 + i as f64 * 30.0,
            };
            self.pops.push(PopParticle {
                x: cx,
                y: cy,
                vx: angle.cos() * speed,
                vy: angle.sin() * speed,
                size: 3.0 + rng.gen::<f64>() * 4.0,
                hue,
                lifetime: 20 + rng.gen_range(0..20),
            });
        }

        Some(ClickOutcome {
            points,
            x: cx,
            y: cy,
            flavor,
        })
    }

    /// Best score persisted across sessions (LocalStorage, wasm only).
    #[cfg(target_arch = "wasm32")]
    pub fn load_best() -> i32 {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::BEST_KEY) {
                if let Ok(stored) = serde_json::from_str::<StoredBest>(&json) {
                    return stored.best.max(0);
                }
            }
        }
        0
    }

    #[cfg(target_arch = "wasm32")]
    pub fn save_best(best: i32) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(&StoredBest { best }) {
                let _ = storage.set_item(Self::BEST_KEY, &json);
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_best() -> i32 {
        0
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_best(_best: i32) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn active_game(seed: u64) -> (BubbleGame, SmallRng) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut game = BubbleGame::new(240.0, 240.0, 0);
        game.dismiss_intro(&mut rng);
        (game, rng)
    }

    #[test]
    fn intro_blocks_spawning() {
        let mut rng = SmallRng::seed_from_u64(1);
        let mut game = BubbleGame::new(240.0, 240.0, 0);
        assert!(!game.try_spawn(&mut rng));
        assert!(game.bubbles().is_empty());

        game.dismiss_intro(&mut rng);
        assert_eq!(game.phase, GamePhase::Active);
        assert_eq!(game.bubbles().len(), INITIAL_BATCH);
    }

    #[test]
    fn spawner_never_exceeds_the_cap() {
        let (mut game, mut rng) = active_game(2);
        for _ in 0..100 {
            game.try_spawn(&mut rng);
            assert!(game.bubbles().len() <= BUBBLE_CAP);
        }
        assert_eq!(game.bubbles().len(), BUBBLE_CAP);
    }

    #[test]
    fn bubbles_stay_inside_the_surface() {
        let (mut game, mut rng) = active_game(3);
        while game.try_spawn(&mut rng) {}
        for _ in 0..2_000 {
            game.tick();
            for bubble in game.bubbles() {
                assert!(bubble.x >= 0.0 && bubble.x <= game.width - bubble.size);
                assert!(bubble.y >= 0.0 && bubble.y <= game.height - bubble.size);
            }
        }
    }

    #[test]
    fn entrance_ramp_completes() {
        let (mut game, _) = active_game(4);
        for _ in 0..20 {
            game.tick();
        }
        for bubble in game.bubbles() {
            assert_eq!(bubble.scale, 1.0);
            assert_eq!(bubble.opacity, 1.0);
        }
    }

    #[test]
    fn click_removes_scores_and_spawns_feedback() {
        let (mut game, mut rng) = active_game(5);
        let id = game.bubbles()[0].id;
        let points = game.bubbles()[0].kind.points;
        let before = game.bubbles().len();

        let outcome = game.click(id, &mut rng).expect("bubble is live");
        assert_eq!(outcome.points, points);
        assert_eq!(game.bubbles().len(), before - 1);
        assert_eq!(game.score, points.max(0));
        assert_eq!(game.pops().len(), 8);
        assert_eq!(game.labels().len(), 1);

        // Clicking the same bubble again resolves to nothing.
        assert!(game.click(id, &mut rng).is_none());
    }

    #[test]
    fn trap_clicks_never_drive_score_negative() {
        let (mut game, mut rng) = active_game(6);
        game.bubbles.clear();
        game.bubbles.push(Bubble {
            id: 99,
            x: 10.0,
            y: 10.0,
            size: 30.0,
            speed: 1.0,
            heading: 0.0,
            kind: TRAP_KINDS[0],
            scale: 1.0,
            opacity: 1.0,
        });

        let outcome = game.click(99, &mut rng).unwrap();
        assert_eq!(outcome.points, -1);
        assert_eq!(game.score, 0);
        assert_eq!(game.best, 0);
    }

    #[test]
    fn best_score_tracks_clamped_score() {
        let (mut game, _) = active_game(7);
        game.bubbles.clear();
        let mut rng = SmallRng::seed_from_u64(77);

        let mut push = |game: &mut BubbleGame, id: u64, kind: BubbleKind| {
            game.bubbles.push(Bubble {
                id,
                x: 0.0,
                y: 0.0,
                size: 30.0,
                speed: 1.0,
                heading: 0.0,
                kind,
                scale: 1.0,
                opacity: 1.0,
            });
        };

        push(&mut game, 1, TECH_KINDS[7]); // +3
        game.click(1, &mut rng);
        assert_eq!((game.score, game.best), (3, 3));

        push(&mut game, 2, TRAP_KINDS[0]); // -1
        game.click(2, &mut rng);
        assert_eq!((game.score, game.best), (2, 3));

        push(&mut game, 3, TECH_KINDS[0]); // +1
        game.click(3, &mut rng);
        assert_eq!((game.score, game.best), (3, 3));
    }

    #[test]
    fn pop_particles_decay_to_nothing() {
        let (mut game, mut rng) = active_game(8);
        let id = game.bubbles()[0].id;
        game.click(id, &mut rng);
        assert!(!game.pops().is_empty());

        let (vx0, lifetime0) = {
            let p = &game.pops()[0];
            (p.vx, p.lifetime)
        };
        game.tick();
        let p = &game.pops()[0];
        assert!((p.vx.abs() - (vx0 * POP_DAMPING).abs()).abs() < 1e-12);
        assert_eq!(p.lifetime, lifetime0 - 1);

        for _ in 0..64 {
            game.tick();
        }
        assert!(game.pops().is_empty());
        assert!(game.labels().is_empty());
    }

    #[test]
    fn reset_clears_state_but_keeps_best() {
        let (mut game, mut rng) = active_game(9);
        game.bubbles.clear();
        game.bubbles.push(Bubble {
            id: 1,
            x: 0.0,
            y: 0.0,
            size: 30.0,
            speed: 1.0,
            heading: 0.0,
            kind: TECH_KINDS[9], // +3
            scale: 1.0,
            opacity: 1.0,
        });
        game.click(1, &mut rng);
        assert_eq!(game.best, 3);

        game.reset(&mut rng);
        assert_eq!(game.score, 0);
        assert_eq!(game.best, 3);
        assert_eq!(game.phase, GamePhase::Active);
        assert_eq!(game.bubbles().len(), INITIAL_BATCH);
        assert!(game.pops().is_empty());
        assert!(game.labels().is_empty());
    }

    proptest! {
        #[test]
        fn score_floor_holds_for_any_click_sequence(seed in 0u64..500, clicks in 1usize..60) {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut game = BubbleGame::new(240.0, 240.0, 0);
            game.dismiss_intro(&mut rng);

            let mut last_best = game.best;
            for _ in 0..clicks {
                game.try_spawn(&mut rng);
                game.tick();
                if let Some(first) = game.bubbles().first() {
                    let id = first.id;
                    game.click(id, &mut rng);
                }
                prop_assert!(game.score >= 0);
                prop_assert!(game.best >= last_best);
                prop_assert!(game.bubbles().len() <= BUBBLE_CAP);
                last_best = game.best;
            }
        }
    }
}
