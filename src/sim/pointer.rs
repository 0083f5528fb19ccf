//! Pointer smoothing and the custom-cursor state machine.

/// Damped spring integrator chasing a 2-d target.
///
/// Semi-implicit Euler; the first observed target snaps the spring instead of
/// launching it across the viewport.
#[derive(Clone, Copy, Debug)]
pub struct Spring2 {
    pub x: f64,
    pub y: f64,
    vx: f64,
    vy: f64,
    stiffness: f64,
    damping: f64,
    mass: f64,
    initialized: bool,
}

/// Smoothing used for the particle field's pointer input.
pub const FIELD_SPRING: (f64, f64, f64) = (100.0, 25.0, 1.0);
/// Cursor dot: snappy.
pub const DOT_SPRING: (f64, f64, f64) = (400.0, 30.0, 0.5);
/// Cursor ring: trails the dot.
pub const RING_SPRING: (f64, f64, f64) = (300.0, 40.0, 0.8);

impl Spring2 {
    pub fn new((stiffness, damping, mass): (f64, f64, f64)) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: 0.0,
            vy: 0.0,
            stiffness,
            damping,
            mass,
            initialized: false,
        }
    }

    pub fn step(&mut self, target: (f64, f64), dt: f64) {
        if !self.initialized {
            self.x = target.0;
            self.y = target.1;
            self.vx = 0.0;
            self.vy = 0.0;
            self.initialized = true;
            return;
        }

        let ax = (self.stiffness * (target.0 - self.x) - self.damping * self.vx) / self.mass;
        let ay = (self.stiffness * (target.1 - self.y) - self.damping * self.vy) / self.mass;
        self.vx += ax * dt;
        self.vy += ay * dt;
        self.x += self.vx * dt;
        self.y += self.vy * dt;
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }
}

/// Mutually exclusive cursor states, in descending priority.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CursorMode {
    Hidden,
    Pressed,
    HoverInteractive,
    Default,
}

impl CursorMode {
    pub fn from_flags(hidden: bool, pressed: bool, hovering: bool) -> Self {
        if hidden {
            Self::Hidden
        } else if pressed {
            Self::Pressed
        } else if hovering {
            Self::HoverInteractive
        } else {
            Self::Default
        }
    }

    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Hidden => "is-hidden",
            Self::Pressed => "is-pressed",
            Self::HoverInteractive => "is-hovering",
            Self::Default => "is-default",
        }
    }
}

/// Rendered size/opacity for one layer of the cursor overlay.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct CursorVisual {
    pub size: f64,
    pub opacity: f64,
    pub outline_only: bool,
}

impl CursorVisual {
    pub fn dot(mode: CursorMode) -> Self {
        match mode {
            CursorMode::Default => Self {
                size: 16.0,
                opacity: 1.0,
                outline_only: false,
            },
            CursorMode::Pressed => Self {
                size: 14.0,
                opacity: 0.8,
                outline_only: false,
            },
            CursorMode::HoverInteractive => Self {
                size: 30.0,
                opacity: 0.8,
                outline_only: true,
            },
            CursorMode::Hidden => Self {
                size: 16.0,
                opacity: 0.0,
                outline_only: false,
            },
        }
    }

    pub fn ring(mode: CursorMode) -> Self {
        match mode {
            CursorMode::Default => Self {
                size: 32.0,
                opacity: 0.3,
                outline_only: true,
            },
            CursorMode::Pressed => Self {
                size: 36.0,
                opacity: 0.4,
                outline_only: true,
            },
            CursorMode::HoverInteractive => Self {
                size: 60.0,
                opacity: 0.5,
                outline_only: true,
            },
            CursorMode::Hidden => Self {
                size: 32.0,
                opacity: 0.0,
                outline_only: true,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f64 = 1.0 / 60.0;

    #[test]
    fn first_target_snaps_without_velocity() {
        let mut spring = Spring2::new(FIELD_SPRING);
        spring.step((320.0, 240.0), DT);
        assert_eq!(spring.position(), (320.0, 240.0));

        spring.step((320.0, 240.0), DT);
        assert_eq!(spring.position(), (320.0, 240.0));
    }

    #[test]
    fn converges_onto_a_stationary_target() {
        let mut spring = Spring2::new(FIELD_SPRING);
        spring.step((0.0, 0.0), DT);
        for _ in 0..600 {
            spring.step((100.0, -40.0), DT);
        }
        assert!((spring.x - 100.0).abs() < 0.1);
        assert!((spring.y + 40.0).abs() < 0.1);
    }

    #[test]
    fn field_smoothing_does_not_overshoot() {
        let mut spring = Spring2::new(FIELD_SPRING);
        spring.step((0.0, 0.0), DT);
        for _ in 0..600 {
            spring.step((100.0, 0.0), DT);
            assert!(spring.x <= 100.0 + 1e-6, "overshot to {}", spring.x);
        }
    }

    #[test]
    fn mode_priority_is_hidden_pressed_hover_default() {
        assert_eq!(
            CursorMode::from_flags(true, true, true),
            CursorMode::Hidden
        );
        assert_eq!(
            CursorMode::from_flags(false, true, true),
            CursorMode::Pressed
        );
        assert_eq!(
            CursorMode::from_flags(false, false, true),
            CursorMode::HoverInteractive
        );
        assert_eq!(
            CursorMode::from_flags(false, false, false),
            CursorMode::Default
        );
    }

    #[test]
    fn hidden_mode_only_drops_opacity() {
        assert_eq!(CursorVisual::dot(CursorMode::Hidden).opacity, 0.0);
        assert_eq!(CursorVisual::ring(CursorMode::Hidden).opacity, 0.0);
        assert!(CursorVisual::dot(CursorMode::HoverInteractive).outline_only);
        assert!(
            CursorVisual::ring(CursorMode::HoverInteractive).size
                > CursorVisual::ring(CursorMode::Default).size
        );
    }
}
