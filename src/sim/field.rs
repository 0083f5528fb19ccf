//! Ambient background particle field.
//!
//! A batch of slow drifting dots that bounce off the viewport edges, breathe,
//! lean toward the pointer, and get linked by distance-faded lines. The step
//! function mutates the field from explicit inputs only; the canvas renderer
//! consumes the resulting snapshot.

use rand::Rng;

use crate::store::ThemeMode;

/// Pixel distance within which particles respond to the pointer.
pub const POINTER_RADIUS: f64 = 180.0;
/// Pointer offset from the viewport centre moves every third particle.
const PARALLAX_STRENGTH: f64 = 0.03 * 0.002;
const BREATHE_RATE: f64 = 0.003;
const BREATHE_AMPLITUDE: f64 = 0.2;
const INFLATE_FACTOR: f64 = 0.25;

/// Per-mode tuning. Dark mode runs the dense/bright profile, light mode the
/// sparse/subtle one.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct FieldProfile {
    pub count: usize,
    pub min_radius: f64,
    pub max_radius: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    pub opacity: f64,
    pub connection_distance: f64,
    pub connection_opacity: f64,
    pub attract_force: f64,
}

impl FieldProfile {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self {
                count: 70,
                min_radius: 1.0,
                max_radius: 3.0,
                min_speed: 0.04,
                max_speed: 0.15,
                opacity: 0.6,
                connection_distance: 100.0,
                connection_opacity: 0.15,
                attract_force: 0.08,
            },
            ThemeMode::Light => Self {
                count: 50,
                min_radius: 1.2,
                max_radius: 2.5,
                min_speed: 0.04,
                max_speed: 0.15,
                opacity: 0.25,
                connection_distance: 90.0,
                connection_opacity: 0.05,
                attract_force: 0.06,
            },
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub dx: f64,
    pub dy: f64,
    pub radius: f64,
    pub base_radius: f64,
    pub angle: f64,
    pub angular_vel: f64,
    pub hue_shift: f64,
}

#[derive(Clone, Debug)]
pub struct ParticleField {
    pub profile: FieldProfile,
    pub width: f64,
    pub height: f64,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(profile: FieldProfile, width: f64, height: f64, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            profile,
            width: width.max(1.0),
            height: height.max(1.0),
            particles: Vec::new(),
        };
        field.populate(rng);
        field
    }

    /// Throw away the whole set and respawn it for the current dimensions.
    /// Runs on viewport resize and on visual-mode change, since counts and
    /// sizes are profile-dependent.
    pub fn resize(&mut self, width: f64, height: f64, rng: &mut impl Rng) {
        self.width = width.max(1.0);
        self.height = height.max(1.0);
        self.populate(rng);
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        let p = self.profile;
        self.particles = (0..p.count)
            .map(|_| {
                let radius = rng.gen_range(p.min_radius..=p.max_radius);
                let speed = rng.gen_range(p.min_speed..=p.max_speed);
                Particle {
                    x: rng.gen_range(0.0..self.width),
                    y: rng.gen_range(0.0..self.height),
                    dx: (rng.gen::<f64>() - 0.5) * speed,
                    dy: (rng.gen::<f64>() - 0.5) * speed,
                    radius,
                    base_radius: radius,
                    angle: rng.gen_range(0.0..std::f64::consts::TAU),
                    angular_vel: (rng.gen::<f64>() - 0.5) * 0.008,
                    hue_shift: rng.gen_range(-7.5..7.5),
                }
            })
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Advance one simulation tick.
    ///
    /// `time_ms` drives the breathing wave; `pointer` is the smoothed cursor
    /// position, if the user has moved it at all. Velocity integration
    /// reflects at the edges; the pointer and parallax nudges clamp instead,
    /// so a velocity component flips sign exactly when the integrated
    /// coordinate would leave the surface.
    pub fn step(&mut self, time_ms: f64, pointer: Option<(f64, f64)>) {
        let (w, h) = (self.width, self.height);
        let profile = self.profile;

        for particle in &mut self.particles {
            let nx = particle.x + particle.dx;
            let ny = particle.y + particle.dy;

            if !(0.0..=w).contains(&nx) {
                particle.dx = -particle.dx;
            }
            if !(0.0..=h).contains(&ny) {
                particle.dy = -particle.dy;
            }
            particle.x = nx.clamp(0.0, w);
            particle.y = ny.clamp(0.0, h);

            particle.angle += particle.angular_vel;

            match pointer {
                Some((px, py)) if particle.distance_to(px, py) < POINTER_RADIUS => {
                    let distance = particle.distance_to(px, py);
                    let force = (POINTER_RADIUS - distance) / POINTER_RADIUS;
                    let heading = (particle.y - py).atan2(particle.x - px);
                    particle.x =
                        (particle.x + heading.cos() * force * profile.attract_force).clamp(0.0, w);
                    particle.y =
                        (particle.y + heading.sin() * force * profile.attract_force).clamp(0.0, h);
                    particle.radius = particle.base_radius * (1.0 + force * INFLATE_FACTOR);
                }
                _ => {
                    particle.radius = particle.base_radius
                        + (time_ms * BREATHE_RATE + particle.base_radius).sin() * BREATHE_AMPLITUDE;
                }
            }
        }

        if let Some((px, py)) = pointer {
            let offset_x = (px - w / 2.0) * PARALLAX_STRENGTH;
            let offset_y = (py - h / 2.0) * PARALLAX_STRENGTH;
            for particle in self.particles.iter_mut().step_by(3) {
                particle.x = (particle.x + offset_x).clamp(0.0, w);
                particle.y = (particle.y + offset_y).clamp(0.0, h);
            }
        }
    }

    /// Pairs close enough to link, with the line alpha already resolved:
    /// a super-linear falloff over distance, scaled by the profile's
    /// connection opacity.
    pub fn connections(&self) -> Vec<(usize, usize, f64)> {
        let max = self.profile.connection_distance;
        let mut lines = Vec::new();
        for a in 0..self.particles.len() {
            for b in (a + 1)..self.particles.len() {
                let pa = &self.particles[a];
                let pb = &self.particles[b];
                let distance = pa.distance_to(pb.x, pb.y);
                if distance < max {
                    let alpha = (1.0 - distance / max).powf(1.5) * self.profile.connection_opacity;
                    lines.push((a, b, alpha));
                }
            }
        }
        lines
    }
}

impl Particle {
    fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn test_field(seed: u64, w: f64, h: f64) -> ParticleField {
        let mut rng = SmallRng::seed_from_u64(seed);
        ParticleField::new(FieldProfile::for_mode(ThemeMode::Dark), w, h, &mut rng)
    }

    #[test]
    fn profiles_differ_per_mode() {
        let dark = FieldProfile::for_mode(ThemeMode::Dark);
        let light = FieldProfile::for_mode(ThemeMode::Light);
        assert!(dark.count > light.count);
        assert!(dark.opacity > light.opacity);
        assert!(dark.connection_opacity > light.connection_opacity);
    }

    #[test]
    fn spawn_places_every_particle_in_bounds() {
        let field = test_field(7, 640.0, 480.0);
        assert_eq!(field.particles().len(), 70);
        for p in field.particles() {
            assert!((0.0..=640.0).contains(&p.x));
            assert!((0.0..=480.0).contains(&p.y));
            assert!(p.base_radius >= 1.0 && p.base_radius <= 3.0);
        }
    }

    #[test]
    fn resize_regenerates_the_full_set() {
        let mut rng = SmallRng::seed_from_u64(3);
        let mut field = test_field(3, 800.0, 600.0);
        field.resize(320.0, 240.0, &mut rng);
        assert_eq!(field.particles().len(), field.profile.count);
        for p in field.particles() {
            assert!((0.0..=320.0).contains(&p.x));
            assert!((0.0..=240.0).contains(&p.y));
        }
    }

    #[test]
    fn velocity_flips_exactly_on_boundary_exit() {
        let mut field = test_field(1, 100.0, 100.0);
        // Force a particle straight at the right edge.
        {
            let p = &mut field.particles[0];
            p.x = 99.9;
            p.y = 50.0;
            p.dx = 0.5;
            p.dy = 0.0;
        }
        field.step(0.0, None);
        let p = &field.particles()[0];
        assert_eq!(p.x, 100.0);
        assert!(p.dx < 0.0, "x velocity must reflect on the right edge");

        // An interior particle keeps its velocity sign.
        let mut field = test_field(1, 100.0, 100.0);
        {
            let p = &mut field.particles[0];
            p.x = 50.0;
            p.y = 50.0;
            p.dx = 0.5;
            p.dy = -0.25;
        }
        field.step(0.0, None);
        let p = &field.particles()[0];
        assert!(p.dx > 0.0 && p.dy < 0.0);
    }

    #[test]
    fn pointer_proximity_inflates_and_attracts() {
        let mut field = test_field(5, 400.0, 400.0);
        {
            let p = &mut field.particles[0];
            p.x = 210.0;
            p.y = 200.0;
            p.dx = 0.0;
            p.dy = 0.0;
        }
        field.step(0.0, Some((200.0, 200.0)));
        let p = &field.particles()[0];
        assert!(p.radius > p.base_radius);
        // Nudged along the pointer-to-particle vector, away from the pointer.
        assert!(p.x > 210.0);
    }

    #[test]
    fn distant_particles_breathe_instead() {
        let mut field = test_field(5, 400.0, 400.0);
        {
            let p = &mut field.particles[0];
            p.x = 10.0;
            p.y = 10.0;
        }
        field.step(523.0, Some((390.0, 390.0)));
        let p = &field.particles()[0];
        let expected = p.base_radius + (523.0 * BREATHE_RATE + p.base_radius).sin() * 0.2;
        assert!((p.radius - expected).abs() < 1e-9);
    }

    #[test]
    fn connection_alpha_fades_superlinearly() {
        let mut field = test_field(2, 500.0, 500.0);
        field.particles.truncate(2);
        field.particles[0].x = 100.0;
        field.particles[0].y = 100.0;
        field.particles[1].x = 150.0;
        field.particles[1].y = 100.0;

        let lines = field.connections();
        assert_eq!(lines.len(), 1);
        let (a, b, alpha) = lines[0];
        assert_eq!((a, b), (0, 1));
        let expected = (1.0 - 50.0 / 100.0_f64).powf(1.5) * field.profile.connection_opacity;
        assert!((alpha - expected).abs() < 1e-12);

        // Out of range: no line.
        field.particles[1].x = 250.0;
        assert!(field.connections().is_empty());
    }

    proptest! {
        #[test]
        fn particles_stay_in_bounds_over_many_ticks(
            seed in 0u64..1_000,
            ticks in 1usize..400,
            pointer_x in 0.0f64..640.0,
            pointer_y in 0.0f64..480.0,
        ) {
            let mut field = test_field(seed, 640.0, 480.0);
            for tick in 0..ticks {
                let pointer = if tick % 2 == 0 {
                    Some((pointer_x, pointer_y))
                } else {
                    None
                };
                field.step(tick as f64 * 33.0, pointer);
                for p in field.particles() {
                    prop_assert!((0.0..=640.0).contains(&p.x));
                    prop_assert!((0.0..=480.0).contains(&p.y));
                }
            }
        }
    }
}
