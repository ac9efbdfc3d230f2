//! Pointer-driven decoration: project card tilt, skill card glow and the
//! trailing cursor glow.

pub const TILT_DIVISOR: f64 = 20.0;
pub const FOLLOW_EASING: f64 = 0.15;
pub const NEUTRAL_TILT_TRANSFORM: &str =
    "perspective(1000px) rotateX(0) rotateY(0) translateY(0)";

/// Client-space rectangle of an element, as reported by
/// `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Pointer position inside the card, in px.
    pub local_x: f64,
    pub local_y: f64,
}

impl Tilt {
    pub fn from_pointer(bounds: Bounds, client_x: f64, client_y: f64) -> Self {
        let local_x = client_x - bounds.left;
        let local_y = client_y - bounds.top;

        Self {
            rotate_x: (local_y - bounds.height / 2.0) / TILT_DIVISOR,
            rotate_y: (bounds.width / 2.0 - local_x) / TILT_DIVISOR,
            local_x,
            local_y,
        }
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) translateY(-10px)",
            self.rotate_x, self.rotate_y
        )
    }

    pub fn style(&self) -> String {
        format!(
            "--mouse-x: {}px; --mouse-y: {}px; transform: {};",
            self.local_x,
            self.local_y,
            self.transform()
        )
    }
}

pub fn neutral_tilt_style() -> String {
    format!("transform: {NEUTRAL_TILT_TRANSFORM};")
}

/// Inline tilt state of a project card. Until the pointer first touches the
/// card it writes no transform, leaving the stylesheet's reveal slide alone.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum CardTilt {
    #[default]
    Untouched,
    Tilted(Tilt),
    Released,
}

impl CardTilt {
    pub fn style(&self) -> String {
        match self {
            Self::Untouched => String::new(),
            Self::Tilted(tilt) => tilt.style(),
            Self::Released => neutral_tilt_style(),
        }
    }
}

/// Pointer position as a percentage of the card, or `None` for a card with
/// no area.
pub fn glow_position(bounds: Bounds, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }

    Some((
        (client_x - bounds.left) / bounds.width * 100.0,
        (client_y - bounds.top) / bounds.height * 100.0,
    ))
}

pub fn glow_style(x_percent: f64, y_percent: f64) -> String {
    format!("--mouse-x: {x_percent}%; --mouse-y: {y_percent}%;")
}

/// Exponentially smoothed follower: every frame closes 15% of the gap to
/// the live pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
    pointer: (f64, f64),
    position: (f64, f64),
}

impl CursorFollower {
    pub fn point_at(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    pub fn advance(&mut self) -> (f64, f64) {
        self.position.0 += (self.pointer.0 - self.position.0) * FOLLOW_EASING;
        self.position.1 += (self.pointer.1 - self.position.1) * FOLLOW_EASING;
        self.position
    }

    pub fn style(&self) -> String {
        format!("left: {}px; top: {}px;", self.position.0, self.position.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Bounds = Bounds {
        left: 100.0,
        top: 50.0,
        width: 400.0,
        height: 200.0,
    };

    #[test]
    fn centred_pointer_leaves_the_card_flat() {
        let tilt = Tilt::from_pointer(CARD, 300.0, 150.0);

        assert_eq!(tilt.rotate_x, 0.0);
        assert_eq!(tilt.rotate_y, 0.0);
    }

    #[test]
    fn corner_pointer_tilts_towards_the_pointer() {
        let tilt = Tilt::from_pointer(CARD, 100.0, 50.0);

        assert_eq!(tilt.rotate_x, -5.0);
        assert_eq!(tilt.rotate_y, 10.0);
        assert_eq!(
            tilt.transform(),
            "perspective(1000px) rotateX(-5deg) rotateY(10deg) translateY(-10px)"
        );
        assert!(tilt.style().starts_with("--mouse-x: 0px; --mouse-y: 0px;"));
    }

    #[test]
    fn untouched_card_carries_no_inline_transform() {
        assert_eq!(CardTilt::default().style(), "");

        let bounds = Bounds { left: 0.0, top: 0.0, width: 200.0, height: 100.0 };
        let tilted = CardTilt::Tilted(Tilt::from_pointer(bounds, 0.0, 0.0)).style();
        assert!(tilted.contains("translateY(-10px)"));

        assert_eq!(CardTilt::Released.style(), neutral_tilt_style());
    }

    #[test]
    fn glow_reports_percentages_and_skips_empty_cards() {
        assert_eq!(glow_position(CARD, 200.0, 100.0), Some((25.0, 25.0)));
        assert_eq!(glow_style(25.0, 25.0), "--mouse-x: 25%; --mouse-y: 25%;");

        let collapsed = Bounds { width: 0.0, ..CARD };
        assert_eq!(glow_position(collapsed, 200.0, 100.0), None);
    }

    #[test]
    fn follower_closes_fifteen_percent_per_frame() {
        let mut follower = CursorFollower::default();
        follower.point_at(100.0, 200.0);

        let (x, y) = follower.advance();
        assert!((x - 15.0).abs() < 1e-9);
        assert!((y - 30.0).abs() < 1e-9);

        let (x, _) = follower.advance();
        assert!((x - 27.75).abs() < 1e-9);
    }

    #[test]
    fn follower_converges_without_overshooting() {
        let mut follower = CursorFollower::default();
        follower.point_at(50.0, 50.0);

        let mut previous = 0.0;
        for _ in 0..200 {
            let (x, _) = follower.advance();
            assert!(x >= previous && x <= 50.0);
            previous = x;
        }
        assert!((50.0 - previous).abs() < 1e-6);
    }
}
