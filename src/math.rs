use glam::Vec2;
use serde::{Deserialize, Serialize};

pub fn vec2(x: f32, y: f32) -> Vec2 {
    Vec2::new(x, y)
}

pub fn vec2_from_angle(angle: f32) -> Vec2 {
    vec2(angle.cos(), angle.sin())
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn square(pos: Vec2, size: f32) -> Self {
        Self::new(pos.x, pos.y, size, size)
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn center(&self) -> Vec2 {
        vec2(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Strict containment: points on the border are outside.
    pub fn contains_strict(&self, pos: Vec2) -> bool {
        pos.x > self.x && pos.x < self.right() && pos.y > self.y && pos.y < self.bottom()
    }
}

/// Anything with an axis-aligned bounding box.
pub trait Bounds {
    fn bounds(&self) -> Rect;
}

impl Bounds for Rect {
    fn bounds(&self) -> Rect {
        *self
    }
}

/// True when the interiors of the two boxes intersect. Shared edges do not count.
pub fn overlaps(a: &impl Bounds, b: &impl Bounds) -> bool {
    let a = a.bounds();
    let b = b.bounds();
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

pub fn clamp_to_area(pos: Vec2, size: f32, width: f32, height: f32) -> Vec2 {
    vec2(
        pos.x.clamp(0.0, (width - size).max(0.0)),
        pos.y.clamp(0.0, (height - size).max(0.0)),
    )
}
