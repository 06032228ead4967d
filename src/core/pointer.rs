use super::constants::{POINTER_NEUTRAL_SIGNED, POINTER_NEUTRAL_UNIT};
use glam::Vec2;

/// Reference rectangle in client (CSS pixel) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn viewport(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Map a client coordinate into `[0,1]^2`, or `None` outside (or for a degenerate rect).
    pub fn normalize(&self, x: f32, y: f32) -> Option<Vec2> {
        if !(self.width > 0.0 && self.height > 0.0) || !x.is_finite() || !y.is_finite() {
            return None;
        }
        let lx = x - self.left;
        let ly = y - self.top;
        if lx < 0.0 || ly < 0.0 || lx > self.width || ly > self.height {
            return None;
        }
        Some(Vec2::new(lx / self.width, ly / self.height))
    }
}

/// Last pointer sample in both normalizations.
///
/// `unit` is `[0,1]` with the origin at the top-left; `signed` is `[-1,1]`
/// centred on the container with +y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub unit: Vec2,
    pub signed: Vec2,
    pub inside: bool,
}

impl PointerState {
    pub const NEUTRAL: PointerState = PointerState {
        unit: Vec2::splat(POINTER_NEUTRAL_UNIT),
        signed: Vec2::splat(POINTER_NEUTRAL_SIGNED),
        inside: false,
    };

    #[inline]
    pub fn from_unit(unit: Vec2) -> Self {
        Self {
            unit,
            signed: Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0),
            inside: true,
        }
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Single writer of a [`PointerState`] relative to one reference container.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    bounds: Bounds,
    state: PointerState,
}

impl PointerTracker {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            state: PointerState::NEUTRAL,
        }
    }

    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Samples outside the container reset to neutral instead of keeping the last value.
    pub fn sample(&mut self, client_x: f32, client_y: f32) -> PointerState {
        self.state = match self.bounds.normalize(client_x, client_y) {
            Some(unit) => PointerState::from_unit(unit),
            None => PointerState::NEUTRAL,
        };
        self.state
    }

    pub fn leave(&mut self) {
        self.state = PointerState::NEUTRAL;
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }
}
