//! Axis-aligned box collision with forgiving hit-boxes
//!
//! Sprites carry transparent padding, so both boxes are shrunk inward by a
//! fraction of their own size on every edge before testing. Touching edges do
//! not count as a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned box in screen space (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Box from top-left corner and size
    pub fn from_rect(x: f32, y: f32, w: f32, h: f32) -> Self {
        let min = Vec2::new(x, y);
        Self {
            min,
            max: min + Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Inset every edge by `fraction` of the box's extent on that axis
    pub fn shrink(&self, fraction: f32) -> Self {
        let inset = self.size() * fraction;
        Self {
            min: self.min + inset,
            max: self.max - inset,
        }
    }

    /// Strict overlap on both axes (edge contact is a miss)
    #[inline]
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && other.min.x < self.max.x
            && self.min.y < other.max.y
            && other.min.y < self.max.y
    }

    /// Overlap rectangle, if it has positive extent on both axes
    pub fn intersection(&self, other: &Aabb) -> Option<Aabb> {
        let overlap = Aabb {
            min: self.min.max(other.min),
            max: self.max.min(other.max),
        };
        let extent = overlap.size();
        (extent.x > 0.0 && extent.y > 0.0).then_some(overlap)
    }
}

/// Hit test used by the simulation: inset-edge comparison of shrunken boxes
pub fn boxes_collide(a: &Aabb, b: &Aabb, shrink: f32) -> bool {
    a.shrink(shrink).overlaps(&b.shrink(shrink))
}

/// Same test phrased as "does the overlap rectangle have positive area"
pub fn overlap_area(a: &Aabb, b: &Aabb, shrink: f32) -> f32 {
    a.shrink(shrink)
        .intersection(&b.shrink(shrink))
        .map(|r| {
            let s = r.size();
            s.x * s.y
        })
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SHRINK: f32 = 0.15;

    #[test]
    fn test_identical_boxes_collide() {
        let a = Aabb::from_rect(120.0, 280.0, 60.0, 80.0);
        assert!(boxes_collide(&a, &a, SHRINK));
        assert!(overlap_area(&a, &a, SHRINK) > 0.0);
    }

    #[test]
    fn test_edge_touching_is_a_miss() {
        let a = Aabb::from_rect(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::from_rect(10.0, 0.0, 10.0, 10.0);
        assert!(!boxes_collide(&a, &b, 0.0));
        assert_eq!(overlap_area(&a, &b, 0.0), 0.0);
    }

    #[test]
    fn test_shrink_forgives_small_overlap() {
        // Player 60 wide, obstacle 55 wide. Raw boxes overlap by 10px.
        let player = Aabb::from_rect(120.0, 280.0, 60.0, 80.0);
        let obstacle = Aabb::from_rect(170.0, 280.0, 55.0, 80.0);
        assert!(boxes_collide(&player, &obstacle, 0.0));
        // Insets of 9 + 8.25 swallow the 10px overlap
        assert!(!boxes_collide(&player, &obstacle, SHRINK));
    }

    #[test]
    fn test_player_above_obstacle_misses() {
        let player = Aabb::from_rect(120.0, 150.0, 60.0, 80.0);
        let obstacle = Aabb::from_rect(120.0, 280.0, 55.0, 80.0);
        assert!(!boxes_collide(&player, &obstacle, SHRINK));
    }

    #[test]
    fn test_shrink_keeps_center() {
        let a = Aabb::from_rect(0.0, 0.0, 100.0, 50.0).shrink(0.1);
        assert_eq!(a.min, Vec2::new(10.0, 5.0));
        assert_eq!(a.max, Vec2::new(90.0, 45.0));
    }

    fn arb_box() -> impl Strategy<Value = Aabb> {
        (-500i32..500, -500i32..500, 1i32..200, 1i32..200)
            .prop_map(|(x, y, w, h)| Aabb::from_rect(x as f32, y as f32, w as f32, h as f32))
    }

    proptest! {
        #[test]
        fn formulations_agree(a in arb_box(), b in arb_box(), shrink in 0.0f32..0.45) {
            prop_assert_eq!(boxes_collide(&a, &b, shrink), overlap_area(&a, &b, shrink) > 0.0);
        }

        #[test]
        fn collision_is_symmetric(a in arb_box(), b in arb_box()) {
            prop_assert_eq!(boxes_collide(&a, &b, SHRINK), boxes_collide(&b, &a, SHRINK));
        }

        #[test]
        fn separated_boxes_never_collide(a in arb_box(), gap in 0i32..100) {
            let size = a.size();
            let b = Aabb::from_rect(a.max.x + gap as f32, a.min.y, size.x, size.y);
            prop_assert!(!boxes_collide(&a, &b, SHRINK));
        }
    }
}
