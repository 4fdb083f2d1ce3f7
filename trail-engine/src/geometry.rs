use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// One stroke of the trail. Endpoints never change after creation; only the
/// opacity decays while a fade runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: Point,
    to: Point,
    opacity: f64,
}

impl Segment {
    pub fn between(from: Point, to: Point) -> Self {
        Self {
            from,
            to,
            opacity: 1.0,
        }
    }

    pub fn from(&self) -> Point {
        self.from
    }

    pub fn to(&self) -> Point {
        self.to
    }

    pub fn opacity(&self) -> f64 {
        self.opacity
    }

    /// Lower opacity by `amount`, flooring at zero. Returns the new opacity.
    pub(crate) fn fade_by(&mut self, amount: f64) -> f64 {
        self.opacity = (self.opacity - amount).max(0.0);
        self.opacity
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Drawing surface size in CSS pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as f64, (self.height / 2) as f64)
    }

    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(0.0, self.width as f64),
            point.y.clamp(0.0, self.height as f64),
        )
    }
}
