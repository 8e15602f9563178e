//! Board geometry: axis-aligned boxes, reflection, random placement
//!
//! Everything on the board collides as either a box or a circle, so this is
//! all the geometry the entities need.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in board space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + w, y + h),
        }
    }

    /// Box of `size` centred on `center`
    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.max.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Overlap test. Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Strict containment: a point on the border is outside
    pub fn contains_strict(&self, p: Vec2) -> bool {
        p.x > self.min.x && p.x < self.max.x && p.y > self.min.y && p.y < self.max.y
    }

    /// Pack as `[x, y, w, h]`
    pub fn to_xywh(&self) -> [f32; 4] {
        let size = self.size();
        [self.min.x, self.min.y, size.x, size.y]
    }

    pub fn from_xywh(r: [f32; 4]) -> Self {
        Self::new(r[0], r[1], r[2], r[3])
    }

    /// Copy shrunk by `margin` on every side
    pub fn inset(&self, margin: f32) -> Self {
        Self {
            min: self.min + Vec2::splat(margin),
            max: self.max - Vec2::splat(margin),
        }
    }

    /// Uniform random point with integer coordinates, `max` exclusive
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec2 {
        let x = rng.random_range(self.min.x as i32..(self.max.x as i32).max(self.min.x as i32 + 1));
        let y = rng.random_range(self.min.y as i32..(self.max.y as i32).max(self.min.y as i32 + 1));
        Vec2::new(x as f32, y as f32)
    }
}

/// Reflect a direction off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect(direction: Vec2, normal: Vec2) -> Vec2 {
    direction - 2.0 * direction.dot(normal) * normal
}

/// Unit-or-zero check used by the direction invariant
#[inline]
pub fn is_unit_or_zero(v: Vec2) -> bool {
    v == Vec2::ZERO || (v.length_squared() - 1.0).abs() < 1e-3
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_intersects_overlap_and_touch() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
        // Sharing the x = 10 edge is not an overlap
        assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.intersects(&Rect::new(0.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn test_contains_strict_excludes_border() {
        let r = Rect::from_center_size(Vec2::new(8.0, 240.0), Vec2::splat(16.0));
        assert!(r.contains_strict(Vec2::new(8.0, 240.0)));
        assert!(!r.contains_strict(Vec2::new(0.0, 240.0)));
        assert!(!r.contains_strict(Vec2::new(8.0, 248.0)));
    }

    #[test]
    fn test_reflect_across_unit_x() {
        let reflected = reflect(Vec2::new(0.6, 0.8), Vec2::X);
        assert!((reflected.x + 0.6).abs() < 1e-6);
        assert!((reflected.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn test_reflect_keeps_length() {
        let dir = Vec2::new(0.8, -0.6);
        let normal = Vec2::new(1.0, 1.0).normalize();
        assert!(is_unit_or_zero(reflect(dir, normal)));
    }

    #[test]
    fn test_random_point_stays_inside() {
        let area = Rect::new(150.0, 150.0, 500.0, 180.0);
        let mut rng = Pcg32::seed_from_u64(7);
        for _ in 0..500 {
            let p = area.random_point(&mut rng);
            assert!(p.x >= area.left() && p.x < area.right());
            assert!(p.y >= area.top() && p.y < area.bottom());
        }
    }

    #[test]
    fn test_xywh_roundtrip() {
        let r = Rect::new(3.0, 4.0, 25.0, 30.0);
        assert_eq!(Rect::from_xywh(r.to_xywh()), r);
        assert_eq!(r.center(), Vec2::new(15.5, 19.0));
    }
}
