//! # Collider Shapes and Overlap Predicates
//!
//! Pure, stateless geometry: circle and rectangle colliders, an axis-aligned
//! bound for fast rejection, and one exact overlap predicate per shape pair.
//!
//! A [`ColliderShape`] stores *dimensions only*. The positioned [`Collider`]
//! is built from the owning entity's Graphics position at test time
//! ([`ColliderShape::at`]), so a collider can never disagree with where the
//! entity actually is — there is no cached position to go stale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Interaction layer of a collision component.
///
/// Two colliders are only tested against each other if their layer pairing
/// is declared interactive: MAIN↔MAIN (player on tiles) and MAIN↔FOOD
/// (player or tiles vs falling food). BACKGROUND and FOREGROUND never
/// participate, and FOOD↔FOOD is inert so stacked falling food passes
/// through itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Layer {
    Background,
    Food,
    Main,
    Foreground,
}

impl Layer {
    /// The layer interaction matrix. Symmetric.
    pub fn interacts(a: Layer, b: Layer) -> bool {
        matches!(
            (a, b),
            (Layer::Main, Layer::Main) | (Layer::Main, Layer::Food) | (Layer::Food, Layer::Main)
        )
    }
}

/// Dimensions of a collider, without a position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ColliderShape {
    Circle { radius: f32 },
    Rect { width: f32, height: f32 },
}

impl ColliderShape {
    /// A circle inscribed in a `width` × `height` sprite box. The radius is
    /// half the smaller dimension, centered in the box.
    pub fn circle_from_dimensions(width: f32, height: f32) -> Self {
        ColliderShape::Circle {
            radius: width.min(height) / 2.0,
        }
    }

    /// Position this shape at an entity's top-left corner, producing a
    /// testable [`Collider`].
    pub fn at(&self, top_left: Vec2) -> Collider {
        match *self {
            ColliderShape::Circle { radius } => Collider::Circle(Circle {
                center: top_left + Vec2::splat(radius),
                radius,
            }),
            ColliderShape::Rect { width, height } => Collider::Rect(Rect {
                min: top_left,
                width,
                height,
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

/// Axis-aligned rectangle; `min` is the top-left corner (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn max(&self) -> Vec2 {
        self.min + Vec2::new(self.width, self.height)
    }
}

/// A positioned collider, ready for overlap testing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Collider {
    Circle(Circle),
    Rect(Rect),
}

/// Axis-aligned bound used for cheap pair rejection before the exact test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }
}

impl Collider {
    pub fn aabb(&self) -> Aabb {
        match *self {
            Collider::Circle(c) => Aabb {
                min: c.center - Vec2::splat(c.radius),
                max: c.center + Vec2::splat(c.radius),
            },
            Collider::Rect(r) => Aabb {
                min: r.min,
                max: r.max(),
            },
        }
    }

    /// Exact shape overlap. Touching boundaries count as overlapping.
    pub fn overlaps(&self, other: &Collider) -> bool {
        match (self, other) {
            (Collider::Circle(a), Collider::Circle(b)) => circle_circle(a, b),
            (Collider::Circle(c), Collider::Rect(r)) => circle_rect(c, r),
            (Collider::Rect(r), Collider::Circle(c)) => circle_rect(c, r),
            (Collider::Rect(a), Collider::Rect(b)) => rect_rect(a, b),
        }
    }
}

/// Center distance at most the sum of radii.
fn circle_circle(a: &Circle, b: &Circle) -> bool {
    let r = a.radius + b.radius;
    a.center.distance_squared(b.center) <= r * r
}

/// Distance from the circle center to the nearest point of the rectangle
/// at most the radius.
fn circle_rect(c: &Circle, r: &Rect) -> bool {
    let nearest = c.center.clamp(r.min, r.max());
    c.center.distance_squared(nearest) <= c.radius * c.radius
}

/// Interval overlap on both axes.
fn rect_rect(a: &Rect, b: &Rect) -> bool {
    a.min.x <= b.max().x && b.min.x <= a.max().x && a.min.y <= b.max().y && b.min.y <= a.max().y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn circle(x: f32, y: f32, radius: f32) -> Collider {
        Collider::Circle(Circle {
            center: Vec2::new(x, y),
            radius,
        })
    }

    fn rect(x: f32, y: f32, width: f32, height: f32) -> Collider {
        Collider::Rect(Rect {
            min: Vec2::new(x, y),
            width,
            height,
        })
    }

    #[test]
    fn layer_matrix() {
        assert!(Layer::interacts(Layer::Main, Layer::Main));
        assert!(Layer::interacts(Layer::Main, Layer::Food));
        assert!(Layer::interacts(Layer::Food, Layer::Main));
        assert!(!Layer::interacts(Layer::Food, Layer::Food));
        assert!(!Layer::interacts(Layer::Background, Layer::Main));
        assert!(!Layer::interacts(Layer::Main, Layer::Foreground));
        assert!(!Layer::interacts(Layer::Background, Layer::Foreground));
    }

    #[test]
    fn circle_circle_overlap() {
        assert!(circle(0.0, 0.0, 5.0).overlaps(&circle(8.0, 0.0, 5.0)));
        assert!(!circle(0.0, 0.0, 5.0).overlaps(&circle(11.0, 0.0, 5.0)));
        // touching exactly counts
        assert!(circle(0.0, 0.0, 5.0).overlaps(&circle(10.0, 0.0, 5.0)));
    }

    #[test]
    fn circle_rect_overlap() {
        // circle center inside the rect
        assert!(circle(100.0, 100.0, 22.0).overlaps(&rect(90.0, 90.0, 40.0, 40.0)));
        // circle approaching a rect edge
        assert!(circle(50.0, 10.0, 11.0).overlaps(&rect(0.0, 20.0, 100.0, 20.0)));
        assert!(!circle(50.0, 8.0, 11.0).overlaps(&rect(0.0, 20.0, 100.0, 20.0)));
        // corner case: nearest point is the rect corner
        assert!(!circle(-4.0, -4.0, 5.0).overlaps(&rect(0.0, 0.0, 10.0, 10.0)));
        assert!(circle(-3.0, -3.0, 5.0).overlaps(&rect(0.0, 0.0, 10.0, 10.0)));
    }

    #[test]
    fn rect_rect_overlap() {
        assert!(rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(5.0, 5.0, 10.0, 10.0)));
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(11.0, 0.0, 10.0, 10.0)));
        // overlap on one axis only is not an overlap
        assert!(!rect(0.0, 0.0, 10.0, 10.0).overlaps(&rect(5.0, 20.0, 10.0, 10.0)));
    }

    #[test]
    fn shape_positioning() {
        let shape = ColliderShape::circle_from_dimensions(44.0, 44.0);
        assert_eq!(shape, ColliderShape::Circle { radius: 22.0 });

        // circle is centered in the sprite box
        let Collider::Circle(c) = shape.at(Vec2::new(100.0, 20.0)) else {
            panic!("expected circle");
        };
        assert_eq!(c.center, Vec2::new(122.0, 42.0));

        let Collider::Rect(r) =
            (ColliderShape::Rect { width: 50.0, height: 20.0 }).at(Vec2::new(50.0, 400.0))
        else {
            panic!("expected rect");
        };
        assert_eq!(r.min, Vec2::new(50.0, 400.0));
        assert_eq!(r.max(), Vec2::new(100.0, 420.0));
    }

    #[test]
    fn aabb_bounds() {
        let bb = circle(10.0, 10.0, 4.0).aabb();
        assert_eq!(bb.min, Vec2::new(6.0, 6.0));
        assert_eq!(bb.max, Vec2::new(14.0, 14.0));
        assert!(bb.intersects(&rect(13.0, 13.0, 5.0, 5.0).aabb()));
        assert!(!bb.intersects(&rect(15.0, 15.0, 5.0, 5.0).aabb()));
    }

    proptest! {
        /// The exact predicate is symmetric for every shape pairing.
        #[test]
        fn overlap_is_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0, ar in 0.1f32..60.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            bw in 0.1f32..120.0, bh in 0.1f32..120.0,
        ) {
            let c = circle(ax, ay, ar);
            let c2 = circle(bx, by, bw.min(60.0));
            let r = rect(bx, by, bw, bh);
            let r2 = rect(ax, ay, bh, bw);
            prop_assert_eq!(c.overlaps(&r), r.overlaps(&c));
            prop_assert_eq!(c.overlaps(&c2), c2.overlaps(&c));
            prop_assert_eq!(r.overlaps(&r2), r2.overlaps(&r));
        }

        /// The AABB never rejects a pair the exact test would accept.
        #[test]
        fn aabb_is_conservative(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0, ar in 0.1f32..60.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            bw in 0.1f32..120.0, bh in 0.1f32..120.0,
        ) {
            let c = circle(ax, ay, ar);
            let r = rect(bx, by, bw, bh);
            if c.overlaps(&r) {
                prop_assert!(c.aabb().intersects(&r.aabb()));
            }
        }
    }
}
