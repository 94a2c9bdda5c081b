use glam::Vec2;

/// Circular collision volume, positioned relative to its owner's center.
///
/// Collision here is overlap detection only — the host broadcasts
/// overlap-start events; nothing bounces or resolves.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleCollider {
    pub radius: f32,
    /// Offset from the owner's position to the circle center.
    pub offset: Vec2,
}

impl CircleCollider {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            offset: Vec2::ZERO,
        }
    }

    /// Largest circle that fits inside a bounding box of the given size,
    /// centered on the owner.
    pub fn fitting(size: Vec2) -> Self {
        Self::new(size.x.min(size.y) * 0.5)
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    /// World-space circle center for an owner at `owner_pos`.
    pub fn center(&self, owner_pos: Vec2) -> Vec2 {
        owner_pos + self.offset
    }

    /// Overlap test against another collider at its owner's position.
    /// Exact tangency does not count as overlap.
    pub fn overlaps(&self, pos: Vec2, other: &CircleCollider, other_pos: Vec2) -> bool {
        let reach = self.radius + other.radius;
        self.center(pos).distance_squared(other.center(other_pos)) < reach * reach
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fits_bounding_box() {
        let c = CircleCollider::fitting(Vec2::new(150.0, 150.0));
        assert_eq!(c.radius, 75.0);

        let narrow = CircleCollider::fitting(Vec2::new(60.0, 150.0));
        assert_eq!(narrow.radius, 30.0);
    }

    #[test]
    fn overlap_detection() {
        let a = CircleCollider::new(10.0);
        let b = CircleCollider::new(10.0);

        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(15.0, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(25.0, 0.0)));
        // touching circles are not overlapping
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn offset_shifts_center() {
        let a = CircleCollider::new(10.0).with_offset(Vec2::new(0.0, -30.0));
        assert_eq!(a.center(Vec2::new(5.0, 5.0)), Vec2::new(5.0, -25.0));
    }
}
