use super::geometry::STEPS_PER_FRAME;

/// A paddle or the ball: an axis-aligned rectangle with a velocity.
///
/// Position and size are in sub-pixel units, velocity in sub-pixel units per
/// frame. Width and height never change after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameObject {
    pub x: i32,
    pub y: i32,
    pub vx: i32,
    pub vy: i32,
    width: i32,
    height: i32,
}

impl GameObject {
    /// Create a motionless object. Panics on a non-positive size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "object size must be positive");
        Self {
            x,
            y,
            vx: 0,
            vy: 0,
            width,
            height,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Move by one substep's share of the per-frame velocity.
    /// Integer division truncates toward zero.
    pub fn integrate(&mut self) {
        self.x += self.vx / STEPS_PER_FRAME;
        self.y += self.vy / STEPS_PER_FRAME;
    }

    /// Keep the whole object inside `[0, limit)` vertically
    pub fn clamp_y(&mut self, limit: i32) {
        self.y = self.y.clamp(0, limit - self.height);
    }
}

/// Open-interval overlap test: rectangles that only share an edge do not intersect.
pub fn intersects(a: &GameObject, b: &GameObject) -> bool {
    a.x + a.width > b.x && a.x < b.x + b.width && a.y + a.height > b.y && a.y < b.y + b.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::geometry::px;

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = GameObject::new(px(10), px(10), px(8), px(8));
        let b = GameObject::new(px(14), px(14), px(8), px(8));
        assert!(intersects(&a, &b));
        assert!(intersects(&b, &a));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = GameObject::new(px(10), px(10), px(8), px(8));
        let right = GameObject::new(px(18), px(10), px(8), px(8));
        let below = GameObject::new(px(10), px(18), px(8), px(8));
        assert!(!intersects(&a, &right));
        assert!(!intersects(&a, &below));
    }

    #[test]
    fn test_one_sub_pixel_of_overlap_counts() {
        let a = GameObject::new(px(10), px(10), px(8), px(8));
        let b = GameObject::new(px(18) - 1, px(10), px(8), px(8));
        assert!(intersects(&a, &b));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = GameObject::new(0, 0, px(8), px(8));
        let b = GameObject::new(px(4), px(20), px(8), px(8));
        assert!(!intersects(&a, &b));
    }

    #[test]
    fn test_integrate_truncates_toward_zero() {
        let mut o = GameObject::new(0, 0, 1, 1);
        o.vx = 7;
        o.vy = -7;
        o.integrate();
        assert_eq!((o.x, o.y), (0, 0));

        o.vx = 17;
        o.vy = -17;
        o.integrate();
        assert_eq!((o.x, o.y), (2, -2));
    }

    #[test]
    fn test_clamp_y_keeps_object_inside() {
        let mut o = GameObject::new(0, -50, 10, 20);
        o.clamp_y(100);
        assert_eq!(o.y, 0);
        o.y = 95;
        o.clamp_y(100);
        assert_eq!(o.y, 80);
    }

    #[test]
    #[should_panic]
    fn test_zero_size_rejected() {
        GameObject::new(0, 0, 0, 5);
    }
}
