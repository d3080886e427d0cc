//! 2D transformation matrices for placing panel-local content on a page.

use crate::units::*;

/// An affine transformation matrix, mapping panel-local coordinates onto the page.
///
/// Uses the standard PDF transformation matrix where (0,0) is at the bottom-left.
/// The matrix is represented as [a, b, c, d, e, f] corresponding to:
/// ```text
/// | a  b  0 |
/// | c  d  0 |
/// | e  f  1 |
/// ```
///
/// Transforms chain with [`then`](Transform::then); operations are applied in the
/// order they're chained.
///
/// ```
/// use nametag_gen::{Transform, Pt};
///
/// // turn content upside down, then move its origin to (200, 100)
/// let transform = Transform::half_turn().with_translate(Pt(200.0), Pt(100.0));
/// assert_eq!(transform.apply((Pt(10.0), Pt(0.0))), (Pt(190.0), Pt(100.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Identity transform (no transformation)
    pub fn identity() -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Create a translation transform
    pub fn translate(x: Pt, y: Pt) -> Self {
        Transform {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: *x,
            f: *y,
        }
    }

    /// A 180° rotation about the origin. Exact, unlike feeding π through sin/cos.
    pub fn half_turn() -> Self {
        Transform {
            a: -1.0,
            b: 0.0,
            c: 0.0,
            d: -1.0,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Combine this transform with another (self * other)
    pub fn then(self, other: Transform) -> Self {
        Transform {
            a: self.a * other.a + self.b * other.c,
            b: self.a * other.b + self.b * other.d,
            c: self.c * other.a + self.d * other.c,
            d: self.c * other.b + self.d * other.d,
            e: self.e * other.a + self.f * other.c + other.e,
            f: self.e * other.b + self.f * other.d + other.f,
        }
    }

    /// Add a translation to this transform
    pub fn with_translate(self, x: Pt, y: Pt) -> Self {
        self.then(Transform::translate(x, y))
    }

    /// Map a point through the transform
    pub fn apply(&self, (x, y): (Pt, Pt)) -> (Pt, Pt) {
        (
            Pt(self.a * *x + self.c * *y + self.e),
            Pt(self.b * *x + self.d * *y + self.f),
        )
    }
}
