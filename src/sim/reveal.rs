//! Visibility logic for the scroll-reveal wrapper.
//!
//! The wasm component feeds intersection events through `next_visibility` and
//! styles its hidden state from `hidden_transform`/`hidden_opacity`; keeping
//! those rules here makes the once/repeat semantics host-testable.

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum RevealDirection {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub struct RevealStyle {
    pub fade: bool,
    pub scale: bool,
    pub rotate: bool,
}

impl Default for RevealStyle {
    fn default() -> Self {
        Self {
            fade: true,
            scale: false,
            rotate: false,
        }
    }
}

impl RevealStyle {
    pub fn with_scale(mut self) -> Self {
        self.scale = true;
        self
    }

    pub fn with_rotate(mut self) -> Self {
        self.rotate = true;
        self
    }
}

/// Visibility transition: entering the viewport always reveals; leaving it
/// hides again only when the reveal is repeatable.
pub fn next_visibility(previous: bool, intersecting: bool, once: bool) -> bool {
    if intersecting {
        true
    } else if !once {
        false
    } else {
        previous
    }
}

/// CSS transform for the hidden state.
pub fn hidden_transform(direction: RevealDirection, distance: f64, style: RevealStyle) -> String {
    let mut transform = match direction {
        RevealDirection::Up => format!("translateY({distance}px)"),
        RevealDirection::Down => format!("translateY(-{distance}px)"),
        RevealDirection::Left => format!("translateX({distance}px)"),
        RevealDirection::Right => format!("translateX(-{distance}px)"),
    };
    if style.scale {
        transform.push_str(" scale(0.8)");
    }
    if style.rotate {
        transform.push_str(" rotate(-10deg)");
    }
    transform
}

pub fn hidden_opacity(style: RevealStyle) -> f64 {
    if style.fade {
        0.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_reveal_is_idempotent() {
        // enter, leave, re-enter: stays visible the whole way through.
        let mut visible = false;
        visible = next_visibility(visible, true, true);
        assert!(visible);
        visible = next_visibility(visible, false, true);
        assert!(visible);
        visible = next_visibility(visible, true, true);
        assert!(visible);
    }

    #[test]
    fn repeatable_reveal_cycles_indefinitely() {
        let mut visible = false;
        for _ in 0..25 {
            visible = next_visibility(visible, true, false);
            assert!(visible);
            visible = next_visibility(visible, false, false);
            assert!(!visible);
        }
    }

    #[test]
    fn hidden_transform_composes_styles() {
        let plain = hidden_transform(RevealDirection::Up, 50.0, RevealStyle::default());
        assert_eq!(plain, "translateY(50px)");

        let left = hidden_transform(RevealDirection::Left, 30.0, RevealStyle::default());
        assert_eq!(left, "translateX(30px)");

        let fancy = hidden_transform(
            RevealDirection::Down,
            40.0,
            RevealStyle::default().with_scale().with_rotate(),
        );
        assert_eq!(fancy, "translateY(-40px) scale(0.8) rotate(-10deg)");
    }

    #[test]
    fn fade_flag_controls_hidden_opacity() {
        assert_eq!(hidden_opacity(RevealStyle::default()), 0.0);
        let no_fade = RevealStyle {
            fade: false,
            ..RevealStyle::default()
        };
        assert_eq!(hidden_opacity(no_fade), 1.0);
    }
}
