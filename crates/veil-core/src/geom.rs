//! 2D geometry primitives: [`Vec2`] positions and [`Bounds`] rectangles.

use std::ops::{Add, AddAssign, Sub};

/// A 2D position or displacement in world units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vec2 {
    /// The origin.
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Create a vector from components.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Squared Euclidean distance to `other`.
    ///
    /// Preferred for threshold comparisons; avoids the square root.
    pub fn distance_squared(self, other: Vec2) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vec2) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Linear interpolation from `self` to `other` at parameter `t`.
    pub fn lerp(self, other: Vec2, t: f32) -> Vec2 {
        Vec2 {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// An axis-aligned rectangle in world units.
///
/// Used for entity bounds when generating precise reveal masks. `min` is
/// the lower-left corner, `max` the upper-right; a well-formed bounds has
/// `min.x <= max.x` and `min.y <= max.y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Lower-left corner.
    pub min: Vec2,
    /// Upper-right corner.
    pub max: Vec2,
}

impl Bounds {
    /// Construct from corner positions.
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Construct from a center point and full extents.
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = Vec2::new(size.x * 0.5, size.y * 0.5);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// A unit box centered on `position`.
    ///
    /// The fallback used for entities that register without visual or
    /// collision bounds.
    pub fn unit_at(position: Vec2) -> Self {
        Self::from_center_size(position, Vec2::new(1.0, 1.0))
    }

    /// Center point of the rectangle.
    pub fn center(self) -> Vec2 {
        Vec2::new(
            (self.min.x + self.max.x) * 0.5,
            (self.min.y + self.max.y) * 0.5,
        )
    }

    /// Full width and height.
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Whether either extent is below `min_extent`.
    ///
    /// Degenerate bounds short-circuit mask generation to the all-hidden
    /// fallback rather than dividing by a near-zero extent.
    pub fn is_degenerate(self, min_extent: f32) -> bool {
        let size = self.size();
        size.x < min_extent || size.y < min_extent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_matches_pythagoras() {
        let a = Vec2::new(5.0, 1.0);
        let b = Vec2::new(8.0, 4.0);
        assert!((a.distance(b) - 18.0f32.sqrt()).abs() < 1e-6);
        assert!((a.distance_squared(b) - 18.0).abs() < 1e-6);
    }

    #[test]
    fn lerp_endpoints() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, -4.0);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }

    #[test]
    fn from_center_size_round_trips() {
        let b = Bounds::from_center_size(Vec2::new(2.0, 3.0), Vec2::new(4.0, 6.0));
        assert_eq!(b.center(), Vec2::new(2.0, 3.0));
        assert_eq!(b.size(), Vec2::new(4.0, 6.0));
    }

    #[test]
    fn unit_box_has_unit_extents() {
        let b = Bounds::unit_at(Vec2::new(10.0, -2.0));
        assert_eq!(b.size(), Vec2::new(1.0, 1.0));
        assert_eq!(b.center(), Vec2::new(10.0, -2.0));
    }

    #[test]
    fn degenerate_detection() {
        let thin = Bounds::from_center_size(Vec2::ZERO, Vec2::new(4.0, 0.0001));
        assert!(thin.is_degenerate(0.001));
        let ok = Bounds::from_center_size(Vec2::ZERO, Vec2::new(1.0, 1.0));
        assert!(!ok.is_degenerate(0.001));
    }
}
