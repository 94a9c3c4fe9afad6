//! Planar geometry in world pixels.
//!
//! The simulation plane is a fixed-size rectangle measured in pixels, matching
//! the scenario configuration format.  `f32` gives sub-pixel precision, which
//! is more than the force model needs, while keeping agent state compact.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Guard below which a vector is treated as zero-length (normalization,
/// separation distances).
pub const EPSILON: f32 = 1e-6;

// ── Vec2 ──────────────────────────────────────────────────────────────────────

/// An immutable 2D vector, copied by value.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn length(self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Unit vector in the same direction, or `ZERO` for degenerate inputs.
    pub fn normalize(self) -> Vec2 {
        let len = self.length();
        if len < EPSILON {
            Vec2::ZERO
        } else {
            Vec2::new(self.x / len, self.y / len)
        }
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        (self - other).length()
    }

    /// Rescale so the magnitude does not exceed `max`.  Direction is
    /// preserved; vectors already within the bound are returned unchanged.
    pub fn clamp_length(self, max: f32) -> Vec2 {
        let len = self.length();
        if len > max && len >= EPSILON {
            self * (max / len)
        } else {
            self
        }
    }

    /// Unit vector at `angle` radians (measured from the +x axis).
    #[inline]
    pub fn from_angle(angle: f32) -> Vec2 {
        Vec2::new(angle.cos(), angle.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ──────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle, used for obstacles, spawn/goal regions, and the
/// world bounds.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(self) -> f32 {
        self.y + self.h
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    /// Edge-inclusive point containment.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.left() && p.x <= self.right() && p.y >= self.top() && p.y <= self.bottom()
    }

    /// Edge-touching rectangles count as intersecting.
    pub fn intersects(self, other: Rect) -> bool {
        self.left() <= other.right()
            && other.left() <= self.right()
            && self.top() <= other.bottom()
            && other.top() <= self.bottom()
    }

    /// The point of this rectangle (boundary or interior) closest to `p`.
    pub fn nearest_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            p.x.clamp(self.left(), self.right()),
            p.y.clamp(self.top(), self.bottom()),
        )
    }

    /// `true` if a circle at `center` with `radius` touches this rectangle.
    pub fn intersects_circle(self, center: Vec2, radius: f32) -> bool {
        self.nearest_point(center).distance(center) <= radius
    }

    /// Grow (or shrink, with negative amounts) symmetrically around the center.
    pub fn inflate(self, dx: f32, dy: f32) -> Rect {
        Rect::new(self.x - dx * 0.5, self.y - dy * 0.5, self.w + dx, self.h + dy)
    }

    /// Clamp this rectangle into `bounds`, enforcing a minimum side length.
    ///
    /// Oversized rects are shrunk to fit; out-of-bounds rects are translated
    /// inward.  Used when scenario randomization jitters obstacles.
    pub fn clamped_to(self, bounds: Rect, min_size: f32) -> Rect {
        let w = self.w.clamp(min_size, bounds.w - min_size);
        let h = self.h.clamp(min_size, bounds.h - min_size);
        let x = self.x.clamp(bounds.left(), bounds.right() - w);
        let y = self.y.clamp(bounds.top(), bounds.bottom() - h);
        Rect::new(x, y, w, h)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.0},{:.0} {:.0}x{:.0}]", self.x, self.y, self.w, self.h)
    }
}
